use super::*;
use serde::Serialize;

/// User projection handed to pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub initials: String,
    pub expiring: bool,
    pub claims: Claims,
}

impl UserInfo {
    pub fn new(claims: Claims, now: kf_core::Epoch) -> Self {
        Self {
            id: claims.sub.clone(),
            name: claims.display_name().to_string(),
            email: claims.email().map(str::to_string),
            initials: claims.initials(),
            expiring: claims.expiring(now),
            claims,
        }
    }
}
