use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{any, get},
    Router,
};
#[cfg(not(test))]
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
#[cfg(not(test))]
use utoipa_swagger_ui::SwaggerUi;

pub mod db;
pub mod entities;
pub mod error;
pub mod join;
pub mod routes;
pub mod store;

pub use error::AppError;
use store::Store;

/// Shared per-request state: just the storage gateway, which carries the
/// connection opened at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donatugee API",
        version = "0.1.0",
        description = "Matches techfugee volunteers with hardware donation challenges"
    ),
    paths(
        health_check,
        routes::techfugees::list_techfugees,
        routes::techfugees::get_techfugee,
        routes::techfugees::login_techfugee,
        routes::techfugees::insert_techfugee,
        routes::techfugees::update_auth,
        routes::techfugees::add_skills,
        routes::techfugees::update_techfugee,
        routes::donators::get_donator,
        routes::donators::login_donator,
        routes::donators::insert_donator,
        routes::challenges::list_challenges,
        routes::challenges::get_challenge,
        routes::challenges::insert_challenge,
        routes::challenges::challenges_by_donator,
        routes::applications::insert_application,
        routes::applications::accept_application,
        routes::applications::applications_by_techfugee,
    ),
    components(schemas(
        entities::techfugee::Model,
        entities::donator::Model,
        entities::challenge::Model,
        entities::application::Model,
        join::TechfugeeWithApplications,
        join::ChallengeWithApplications,
    ))
)]
struct ApiDoc;

/// Assemble the router. Routes are registered method-agnostic: parameters
/// come from the query string on GET and the form-encoded body otherwise,
/// and the frontend uses both interchangeably.
pub fn create_app(store: Store) -> Router {
    let state = AppState { store };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/challenges", any(routes::challenges::list_challenges))
        .route("/api/v1/challenge", any(routes::challenges::get_challenge))
        .route(
            "/api/v1/insert-challenge",
            any(routes::challenges::insert_challenge),
        )
        .route(
            "/api/v1/challenges-by-donator",
            any(routes::challenges::challenges_by_donator),
        )
        .route("/api/v1/techfugees", any(routes::techfugees::list_techfugees))
        .route("/api/v1/techfugee", any(routes::techfugees::get_techfugee))
        .route("/api/v1/login", any(routes::techfugees::login_techfugee))
        .route(
            "/api/v1/insert-techfugee",
            any(routes::techfugees::insert_techfugee),
        )
        .route("/api/v1/update-auth", any(routes::techfugees::update_auth))
        .route("/api/v1/add-skills", any(routes::techfugees::add_skills))
        .route(
            "/api/v1/update-techfugee",
            any(routes::techfugees::update_techfugee),
        )
        .route("/api/v1/donator", any(routes::donators::get_donator))
        .route("/api/v1/login-donator", any(routes::donators::login_donator))
        .route(
            "/api/v1/insert-donator",
            any(routes::donators::insert_donator),
        )
        .route(
            "/api/v1/insert-application",
            any(routes::applications::insert_application),
        )
        .route(
            "/api/v1/accept-application",
            any(routes::applications::accept_application),
        )
        .route(
            "/api/v1/application-by-techfugee",
            any(routes::applications::applications_by_techfugee),
        );

    // Swagger UI only outside of unit-test builds.
    #[cfg(not(test))]
    let app = {
        let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());
        Router::new().merge(api_routes).merge(docs_router)
    };

    #[cfg(test)]
    let app = Router::new().merge(api_routes);

    let app = app.with_state(state);

    // The frontend is served from a different origin.
    #[cfg(not(test))]
    let app = app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    app
}
