//! HTTP adapter. Handlers are thin: extract form/query parameters, make one
//! storage call, serialize the result. Missing parameters deserialize to
//! empty strings, matching what the form-driven frontend sends.

pub mod applications;
pub mod challenges;
pub mod donators;
pub mod techfugees;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// The `id` parameter shared by most single-row endpoints. Always a string
/// on the wire; the storage layer parses it.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParams {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailParams {
    #[serde(default)]
    pub email: String,
}
