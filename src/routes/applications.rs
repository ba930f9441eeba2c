use axum::{extract::State, Form, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::IdParams;
use crate::entities::application;
use crate::error::AppError;
use crate::join::ChallengeWithApplications;
use crate::store::Upsert;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InsertApplicationParams {
    #[serde(default)]
    pub techfugee_id: String,
    #[serde(default)]
    pub challenge_id: String,
}

/// File an application for a challenge. A techfugee can apply to a given
/// challenge once; repeats are reported as a failure.
#[utoipa::path(
    post,
    path = "/api/v1/insert-application",
    params(InsertApplicationParams),
    responses(
        (status = 200, description = "The filed application", body = application::Model),
        (status = 500, description = "Pair already applied, or non-numeric ids")
    )
)]
pub async fn insert_application(
    State(state): State<AppState>,
    Form(params): Form<InsertApplicationParams>,
) -> Result<Json<application::Model>, AppError> {
    let outcome = state
        .store
        .insert_application(&params.techfugee_id, &params.challenge_id)
        .await?;

    match outcome {
        Upsert::Inserted(application) => Ok(Json(application)),
        Upsert::Existing(_) => Err(AppError::AlreadyExists("exists already".to_owned())),
    }
}

/// Donor approval of an application.
#[utoipa::path(
    post,
    path = "/api/v1/accept-application",
    params(IdParams),
    responses(
        (status = 200, description = "The accepted application", body = application::Model),
        (status = 500, description = "No application with that id")
    )
)]
pub async fn accept_application(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<application::Model>, AppError> {
    let application = state.store.accept_application(&params.id).await?;
    Ok(Json(application))
}

/// Every challenge the techfugee has applied to, with all applications on
/// those challenges attached.
#[utoipa::path(
    get,
    path = "/api/v1/application-by-techfugee",
    params(IdParams),
    responses(
        (status = 200, description = "Challenges the techfugee applied to", body = Vec<ChallengeWithApplications>)
    )
)]
pub async fn applications_by_techfugee(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<Vec<ChallengeWithApplications>>, AppError> {
    let challenges = state.store.challenges_by_techfugee(&params.id).await?;
    Ok(Json(challenges))
}
