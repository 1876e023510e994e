use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::web;
use kf_core::*;
use std::future::Ready;
use std::future::ready;

/// Storage scope of the requesting browser, read from the scope cookie.
/// A fresh scope is minted when the cookie is missing or malformed;
/// `cookie()` then yields the cookie to set on the response.
pub struct BrowserScope {
    id: ID<Scope>,
    fresh: bool,
}

impl BrowserScope {
    pub fn of(req: &HttpRequest) -> Self {
        match req
            .cookie(SCOPE_COOKIE)
            .and_then(|c| ID::try_from(c.value()).ok())
        {
            Some(id) => Self { id, fresh: false },
            None => Self {
                id: ID::default(),
                fresh: true,
            },
        }
    }
    pub fn id(&self) -> ID<Scope> {
        self.id
    }
    pub fn cookie(&self) -> Option<Cookie<'static>> {
        self.fresh.then(|| {
            Cookie::build(SCOPE_COOKIE, self.id.to_string())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish()
        })
    }
}

/// Why a guarded request was not admitted.
#[derive(Debug)]
pub enum Rejection {
    Loading(String),
    Redirect(String),
    Misconfigured,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading(text) => write!(f, "{}", text),
            Self::Redirect(target) => write!(f, "redirecting to {}", target),
            Self::Misconfigured => write!(f, "auth state not configured"),
        }
    }
}

impl ResponseError for Rejection {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Loading(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Redirect(_) => StatusCode::SEE_OTHER,
            Self::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Redirect(target) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, target.as_str()))
                .finish(),
            other => HttpResponse::build(other.status_code()).body(other.to_string()),
        }
    }
}

/// Extractor for guarded routes: admits only a signed-in user with a
/// valid session, otherwise redirects home.
pub struct Member(pub UserInfo);

impl Member {
    pub fn user(&self) -> &UserInfo {
        &self.0
    }
}

impl FromRequest for Member {
    type Error = Rejection;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(vault) = req.app_data::<web::Data<Vault>>() else {
            return ready(Err(Rejection::Misconfigured));
        };
        let guard = req
            .app_data::<web::Data<Guard>>()
            .map(|g| g.get_ref().clone())
            .unwrap_or_default();
        let scope = BrowserScope::of(req);
        ready(match guard.admit(&vault.auth(scope.id())) {
            Gate::Render(user) => Ok(Member(user)),
            Gate::Redirect(target) => Err(Rejection::Redirect(target)),
            Gate::Fallback(text) => Err(Rejection::Loading(text)),
        })
    }
}

/// Optional variant of [`Member`]; never rejects.
pub struct MaybeMember(pub Option<UserInfo>);

impl MaybeMember {
    pub fn user(&self) -> Option<&UserInfo> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeMember {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let member = Member::from_request(req, payload).into_inner().ok();
        ready(Ok(MaybeMember(member.map(|m| m.0))))
    }
}
