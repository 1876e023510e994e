use super::*;
use kf_core::*;

/// Decoded ID-token claim set.
///
/// The token comes from an external party, so the shape is checked on
/// decode: `sub` must be non-empty and `exp` present. Claims this type
/// does not name are kept in `extra` so the stored record is the full set.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: Epoch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<Epoch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<Epoch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    /// Decode the payload of a compact JWT without verifying its signature.
    /// The token is only ever taken from the token endpoint response.
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let mut validation = jsonwebtoken::Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        let claims = jsonwebtoken::decode::<Self>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(&[]),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::Decode(e.to_string()))?;
        claims.validate()
    }
    /// Parse a stored record, applying the same shape checks as `decode`.
    pub fn parse(json: &str) -> Result<Self, AuthError> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .validate()
    }
    fn validate(self) -> Result<Self, AuthError> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::Decode("missing subject".to_string()));
        }
        Ok(self)
    }

    /// `nbf ≤ now < exp`; an absent `nbf` puts no lower bound.
    pub fn valid(&self, now: Epoch) -> bool {
        self.nbf.map_or(true, |nbf| nbf <= now) && now < self.exp
    }
    pub fn expired(&self, now: Epoch) -> bool {
        now >= self.exp
    }
    pub fn expiring(&self, now: Epoch) -> bool {
        self.exp - now < EXPIRY_WARNING
    }

    pub fn display_name(&self) -> &str {
        self.named().unwrap_or(DEFAULT_NAME)
    }
    /// First non-blank of `name` and `given_name`.
    fn named(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.given_name.as_deref().filter(|s| !s.trim().is_empty()))
    }
    pub fn email(&self) -> Option<&str> {
        self.emails
            .first()
            .map(String::as_str)
            .or_else(|| self.extra.get("email").and_then(|v| v.as_str()))
    }
    pub fn initials(&self) -> String {
        let given = self.given_name.as_deref().and_then(first);
        let family = self.family_name.as_deref().and_then(first);
        if let (Some(g), Some(f)) = (given, family) {
            return format!("{}{}", g, f);
        }
        let words = self
            .named()
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>();
        match words.as_slice() {
            [] => DEFAULT_INITIALS.to_string(),
            [word] => word.chars().take(2).flat_map(char::to_uppercase).collect(),
            [a, b, ..] => format!("{}{}", first(a).unwrap_or_default(), first(b).unwrap_or_default()),
        }
    }
}

fn first(s: &str) -> Option<String> {
    s.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
}
