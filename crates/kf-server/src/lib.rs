//! Portal Backend Server
//!
//! Combines authentication, marketplace, and dashboard routes
//! into a single actix-web server.
//!
//! ## Submodules
//!
//! - [`dashboard`] — Guarded dashboard sections

pub mod dashboard;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use kf_auth::Vault;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Route table shared by the server and its tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/auth")
                .route("/signin", web::get().to(kf_auth::signin))
                .route("/signin/redirect", web::get().to(kf_auth::signin_redirect))
                .route("/signup", web::get().to(kf_auth::signup))
                .route("/signup/redirect", web::get().to(kf_auth::signup_redirect))
                .route("/callback", web::get().to(kf_auth::callback))
                .route("/logout", web::get().to(kf_auth::logout))
                .route("/logout", web::post().to(kf_auth::logout))
                .route("/me", web::get().to(kf_auth::me)),
        )
        .service(
            web::scope("/market")
                .route("/{tab}", web::get().to(kf_market::browse))
                .route("/{tab}/facets", web::get().to(kf_market::facets))
                .route("/{tab}/{id}", web::get().to(kf_market::detail)),
        )
        .service(
            web::scope("/dashboard")
                .route("", web::get().to(dashboard::overview))
                .route("/documents", web::get().to(dashboard::documents))
                .route("/profile", web::get().to(dashboard::profile))
                .route("/insights", web::get().to(dashboard::insights))
                .route("/users", web::get().to(dashboard::users)),
        );
}

/// Sweeps the shared store at start-up and then every `SWEEP_INTERVAL`.
fn sweeper(vault: Vault) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(kf_core::SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            vault.sweep(kf_core::epoch());
        }
    });
}

pub async fn run(vault: Vault, bind: &str) -> anyhow::Result<()> {
    sweeper(vault.clone());
    let vault = web::Data::new(vault);
    let guard = web::Data::new(kf_auth::Guard::default());
    log::info!("starting portal server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(vault.clone())
            .app_data(guard.clone())
            .configure(routes)
    })
    .workers(4)
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;
    use kf_auth::*;
    use kf_core::*;
    use std::sync::Arc;

    fn vault() -> web::Data<Vault> {
        let settings = Settings {
            domain: "khalifafund.b2clogin.com".into(),
            tenant: "khalifafund.onmicrosoft.com".into(),
            client_id: "client-1".into(),
            ..Settings::default()
        };
        web::Data::new(Vault::new(settings, Arc::new(MemoryStore::default())).unwrap())
    }
    fn sign_in(vault: &Vault) -> ID<Scope> {
        let scope = ID::default();
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "user-1",
            "exp": epoch() + 600,
            "given_name": "Ahmed",
            "family_name": "Al Mansoori",
        }))
        .unwrap();
        assert!(vault.sessions(scope).save(&claims));
        vault.provider(scope).remember(&claims).unwrap();
        scope
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().app_data(vault()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }
    #[actix_web::test]
    async fn dashboard_redirects_anonymous_home() {
        let app = test::init_service(App::new().app_data(vault()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
    #[actix_web::test]
    async fn dashboard_shows_fallback_while_provider_unconfigured() {
        let vault = web::Data::new(
            Vault::new(Settings::default(), Arc::new(MemoryStore::default())).unwrap(),
        );
        let app = test::init_service(App::new().app_data(vault).configure(routes)).await;
        let req = test::TestRequest::get().uri("/dashboard/documents").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
    #[actix_web::test]
    async fn dashboard_renders_for_signed_in_scope() {
        let vault = vault();
        let scope = sign_in(&vault);
        let app = test::init_service(App::new().app_data(vault).configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/dashboard/profile")
            .cookie(Cookie::new(SCOPE_COOKIE, scope.to_string()))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user"]["initials"], "AA");
        assert_eq!(body["data"]["emirate"], "Abu Dhabi");
    }
    #[actix_web::test]
    async fn custom_guard_target_is_honoured() {
        let app = test::init_service(
            App::new()
                .app_data(vault())
                .app_data(web::Data::new(Guard::to("/auth/signin")))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/dashboard/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/signin");
    }
    #[actix_web::test]
    async fn abandoned_sign_ins_are_swept() {
        let vault = vault();
        let app = test::init_service(App::new().app_data(vault.clone()).configure(routes)).await;
        for _ in 0..50 {
            let req = test::TestRequest::get().uri("/auth/signin").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);
        }
        assert_eq!(vault.sweep(epoch()), 0);
        assert_eq!(vault.sweep(epoch() + PENDING_TTL), 50);
        assert_eq!(vault.sweep(epoch() + PENDING_TTL), 0);
    }
    #[actix_web::test]
    async fn marketplace_is_public() {
        let app = test::init_service(App::new().app_data(vault()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/market/communities/facets").to_request();
        let facets: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(facets["categories"].as_array().unwrap().contains(&"Networks".into()));
    }
}
