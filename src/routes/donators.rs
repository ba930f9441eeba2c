use axum::{extract::State, Form, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{EmailParams, IdParams};
use crate::entities::donator;
use crate::error::AppError;
use crate::store::Upsert;
use crate::AppState;

/// Fetch one donator by id. Unknown ids yield a zero-valued row.
#[utoipa::path(
    get,
    path = "/api/v1/donator",
    params(IdParams),
    responses(
        (status = 200, description = "Donator record", body = donator::Model)
    )
)]
pub async fn get_donator(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<donator::Model>, AppError> {
    let donator = state.store.donator(&params.id).await?;
    Ok(Json(donator))
}

/// Look a donator up by email for the login flow.
#[utoipa::path(
    get,
    path = "/api/v1/login-donator",
    params(EmailParams),
    responses(
        (status = 200, description = "Matching donator, zero-valued if none", body = donator::Model)
    )
)]
pub async fn login_donator(
    State(state): State<AppState>,
    Form(params): Form<EmailParams>,
) -> Result<Json<donator::Model>, AppError> {
    let donator = state.store.login_donator(&params.email).await?;
    Ok(Json(donator))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InsertDonatorParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: String,
}

/// Register a donator. Unlike techfugee registration a duplicate email is
/// reported to the caller as a failure.
#[utoipa::path(
    post,
    path = "/api/v1/insert-donator",
    params(InsertDonatorParams),
    responses(
        (status = 200, description = "The newly registered donator", body = donator::Model),
        (status = 500, description = "Email already registered")
    )
)]
pub async fn insert_donator(
    State(state): State<AppState>,
    Form(params): Form<InsertDonatorParams>,
) -> Result<Json<donator::Model>, AppError> {
    let outcome = state
        .store
        .insert_donator(&params.name, &params.email, &params.website, &params.address)
        .await?;

    match outcome {
        Upsert::Inserted(donator) => Ok(Json(donator)),
        Upsert::Existing(_) => Err(AppError::AlreadyExists("exists already".to_owned())),
    }
}
