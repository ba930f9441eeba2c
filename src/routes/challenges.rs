use axum::{extract::State, Form, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::IdParams;
use crate::entities::challenge;
use crate::error::AppError;
use crate::join::ChallengeWithApplications;
use crate::AppState;

/// List every challenge with its applications attached.
#[utoipa::path(
    get,
    path = "/api/v1/challenges",
    responses(
        (status = 200, description = "All open challenges", body = Vec<ChallengeWithApplications>)
    )
)]
pub async fn list_challenges(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChallengeWithApplications>>, AppError> {
    let challenges = state.store.challenges().await?;
    Ok(Json(challenges))
}

/// Fetch one challenge by id. Unknown ids yield a zero-valued row.
#[utoipa::path(
    get,
    path = "/api/v1/challenge",
    params(IdParams),
    responses(
        (status = 200, description = "Challenge with applications", body = ChallengeWithApplications)
    )
)]
pub async fn get_challenge(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<ChallengeWithApplications>, AppError> {
    let challenge = state.store.challenge(&params.id).await?;
    Ok(Json(challenge))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InsertChallengeParams {
    #[serde(default)]
    pub id_donator: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub laptop_type: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub hardware_provided: String,
    #[serde(default)]
    pub duration: String,
}

/// Post a new challenge. `amount` must parse as an integer quantity.
#[utoipa::path(
    post,
    path = "/api/v1/insert-challenge",
    params(InsertChallengeParams),
    responses(
        (status = 200, description = "The created challenge", body = challenge::Model),
        (status = 500, description = "Non-numeric donator id or amount")
    )
)]
pub async fn insert_challenge(
    State(state): State<AppState>,
    Form(params): Form<InsertChallengeParams>,
) -> Result<Json<challenge::Model>, AppError> {
    let challenge = state
        .store
        .insert_challenge(
            &params.id_donator,
            &params.name,
            &params.description,
            &params.laptop_type,
            &params.amount,
            &params.hardware_provided,
            &params.duration,
        )
        .await?;
    Ok(Json(challenge))
}

/// All challenges posted by one donator.
#[utoipa::path(
    get,
    path = "/api/v1/challenges-by-donator",
    params(IdParams),
    responses(
        (status = 200, description = "The donator's challenges", body = Vec<ChallengeWithApplications>)
    )
)]
pub async fn challenges_by_donator(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<Vec<ChallengeWithApplications>>, AppError> {
    let challenges = state.store.challenges_by_donator(&params.id).await?;
    Ok(Json(challenges))
}
