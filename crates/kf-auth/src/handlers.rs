use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpResponseBuilder;
use actix_web::Responder;
use actix_web::http::header;
use actix_web::web;
use kf_core::*;

fn with_scope(mut builder: HttpResponseBuilder, scope: &BrowserScope) -> HttpResponseBuilder {
    if let Some(cookie) = scope.cookie() {
        builder.cookie(cookie);
    }
    builder
}

fn navigate(result: Result<Navigation, AuthError>, scope: &BrowserScope) -> HttpResponse {
    match result {
        Ok(Navigation::To(target)) => with_scope(HttpResponse::SeeOther(), scope)
            .insert_header((header::LOCATION, target))
            .finish(),
        Ok(Navigation::Stay) => {
            HttpResponse::ServiceUnavailable().body("identity provider is not initialised")
        }
        Err(e) => HttpResponse::BadGateway().body(e.message()),
    }
}

pub async fn signin(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    navigate(vault.auth(scope.id()).sign_in().await, &scope)
}

pub async fn signup(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    navigate(vault.auth(scope.id()).sign_up().await, &scope)
}

pub async fn signin_redirect(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    navigate(vault.auth(scope.id()).sign_in_redirect().await, &scope)
}

pub async fn signup_redirect(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    navigate(vault.auth(scope.id()).sign_up_redirect().await, &scope)
}

pub async fn logout(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    navigate(Ok(vault.auth(scope.id()).sign_out().await), &scope)
}

pub async fn me(member: MaybeMember) -> impl Responder {
    match member.0 {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Unauthorized().body("not signed in"),
    }
}

pub async fn callback(vault: web::Data<Vault>, req: HttpRequest) -> impl Responder {
    let scope = BrowserScope::of(&req);
    let query = CallbackQuery::parse(req.query_string());
    let provider = vault.provider(scope.id());
    let pending = provider.pending();
    let exchange = vault.exchange(pending.as_ref().map_or(Flow::SignIn, |p| p.flow));
    let sessions = vault.sessions(scope.id());
    let mut callback = Callback::new(vault.settings(), &exchange, &sessions)
        .expecting(pending.as_ref().map(|p| p.state.as_str()));
    let body = match callback.complete(&query).await {
        Phase::Success { claims, landing, delay } => {
            if let Err(e) = provider.remember(claims) {
                log::error!("failed to record provider account: {}", e);
            }
            if let (Some(pending), Some(nonce)) = (pending.as_ref(), claims.nonce.as_deref()) {
                if pending.nonce != nonce {
                    log::warn!("id token nonce does not match the pending request");
                }
            }
            success_panel(claims, landing, delay.as_secs())
        }
        Phase::Failure { message } => failure_panel(message),
        Phase::Loading => failure_panel(&AuthError::Exchange.message()),
    };
    with_scope(HttpResponse::Ok(), &scope)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn success_panel(claims: &Claims, landing: &str, delay: u64) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><meta http-equiv=\"refresh\" content=\"{delay};url={landing}\"><title>Signed in</title></head>\
         <body><main class=\"auth-panel success\"><h1>Welcome, {name}</h1><p>Sign-in complete. Taking you to your dashboard…</p></main></body></html>",
        delay = delay,
        landing = escape(landing),
        name = escape(claims.display_name()),
    )
}

fn failure_panel(message: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Sign-in failed</title></head>\
         <body><main class=\"auth-panel error\"><h1>Authentication error</h1><p>{message}</p><a href=\"{home}\">Return home</a></main></body></html>",
        message = escape(message),
        home = HOME_ROUTE,
    )
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            c => c.to_string(),
        })
        .collect()
}
