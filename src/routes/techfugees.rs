use axum::{extract::State, Form, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{EmailParams, IdParams};
use crate::entities::techfugee;
use crate::error::AppError;
use crate::join::TechfugeeWithApplications;
use crate::AppState;

/// List every techfugee with their applications attached.
#[utoipa::path(
    get,
    path = "/api/v1/techfugees",
    responses(
        (status = 200, description = "All registered techfugees", body = Vec<TechfugeeWithApplications>)
    )
)]
pub async fn list_techfugees(
    State(state): State<AppState>,
) -> Result<Json<Vec<TechfugeeWithApplications>>, AppError> {
    let techfugees = state.store.techfugees().await?;
    Ok(Json(techfugees))
}

/// Fetch one techfugee by id. Unknown ids yield a zero-valued profile.
#[utoipa::path(
    get,
    path = "/api/v1/techfugee",
    params(IdParams),
    responses(
        (status = 200, description = "Techfugee profile", body = TechfugeeWithApplications)
    )
)]
pub async fn get_techfugee(
    State(state): State<AppState>,
    Form(params): Form<IdParams>,
) -> Result<Json<TechfugeeWithApplications>, AppError> {
    let techfugee = state.store.techfugee(&params.id).await?;
    Ok(Json(techfugee))
}

/// Look a techfugee up by email for the login flow.
#[utoipa::path(
    get,
    path = "/api/v1/login",
    params(EmailParams),
    responses(
        (status = 200, description = "Matching profile, zero-valued if none", body = TechfugeeWithApplications)
    )
)]
pub async fn login_techfugee(
    State(state): State<AppState>,
    Form(params): Form<EmailParams>,
) -> Result<Json<TechfugeeWithApplications>, AppError> {
    let techfugee = state.store.login_techfugee(&params.email).await?;
    Ok(Json(techfugee))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InsertTechfugeeParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: String,
}

/// Register a techfugee. Re-registering an email returns the existing
/// profile with a 200, so the frontend can treat signup as login.
#[utoipa::path(
    post,
    path = "/api/v1/insert-techfugee",
    params(InsertTechfugeeParams),
    responses(
        (status = 200, description = "The new or already-registered techfugee", body = techfugee::Model)
    )
)]
pub async fn insert_techfugee(
    State(state): State<AppState>,
    Form(params): Form<InsertTechfugeeParams>,
) -> Result<Json<techfugee::Model>, AppError> {
    let outcome = state
        .store
        .insert_techfugee(&params.name, &params.email, &params.skills)
        .await?;
    Ok(Json(outcome.into_inner()))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateAuthParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub passed: String,
}

/// Record the reviewer's authentication verdict, verbatim.
#[utoipa::path(
    post,
    path = "/api/v1/update-auth",
    params(UpdateAuthParams),
    responses(
        (status = 200, description = "Updated techfugee", body = techfugee::Model)
    )
)]
pub async fn update_auth(
    State(state): State<AppState>,
    Form(params): Form<UpdateAuthParams>,
) -> Result<Json<techfugee::Model>, AppError> {
    let techfugee = state.store.update_auth(&params.id, &params.passed).await?;
    Ok(Json(techfugee))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddSkillsParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub skills: String,
}

/// Replace a techfugee's skills. Loads the profile first, then saves it
/// back with the new skill list.
#[utoipa::path(
    post,
    path = "/api/v1/add-skills",
    params(AddSkillsParams),
    responses(
        (status = 200, description = "Updated techfugee", body = techfugee::Model)
    )
)]
pub async fn add_skills(
    State(state): State<AppState>,
    Form(params): Form<AddSkillsParams>,
) -> Result<Json<techfugee::Model>, AppError> {
    let profile = state.store.techfugee(&params.id).await?;
    let techfugee = state
        .store
        .update_techfugee_skills(profile.techfugee, &params.skills)
        .await?;
    Ok(Json(techfugee))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateTechfugeeParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub introduction: String,
}

/// Update a techfugee's city and introduction.
#[utoipa::path(
    post,
    path = "/api/v1/update-techfugee",
    params(UpdateTechfugeeParams),
    responses(
        (status = 200, description = "Updated techfugee", body = techfugee::Model)
    )
)]
pub async fn update_techfugee(
    State(state): State<AppState>,
    Form(params): Form<UpdateTechfugeeParams>,
) -> Result<Json<techfugee::Model>, AppError> {
    let techfugee = state
        .store
        .update_techfugee(&params.id, &params.city, &params.introduction)
        .await?;
    Ok(Json(techfugee))
}
