//! In-memory attachment of application rows to their parent rows.
//!
//! Parents and children are fetched with two independent queries; the
//! grouping here replaces a SQL join. Both passes are linear: one over the
//! applications to bucket them by parent id, one over the parents to claim
//! their bucket.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::entities::{application, challenge, techfugee};

/// A challenge with every application filed against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChallengeWithApplications {
    #[serde(flatten)]
    pub challenge: challenge::Model,
    pub applications: Vec<application::Model>,
}

/// A techfugee profile with every application they have filed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechfugeeWithApplications {
    #[serde(flatten)]
    pub techfugee: techfugee::Model,
    pub applications: Vec<application::Model>,
}

/// Attach applications to the challenges they reference, keyed on
/// `challenge_id`. Parent and child ordering follow the input order; an
/// application referencing a challenge not in `challenges` is dropped.
pub fn attach_to_challenges(
    challenges: Vec<challenge::Model>,
    applications: Vec<application::Model>,
) -> Vec<ChallengeWithApplications> {
    let mut grouped: HashMap<i64, Vec<application::Model>> = HashMap::new();
    for application in applications {
        grouped
            .entry(application.challenge_id)
            .or_default()
            .push(application);
    }

    challenges
        .into_iter()
        .map(|challenge| {
            let applications = grouped.remove(&challenge.id).unwrap_or_default();
            ChallengeWithApplications {
                challenge,
                applications,
            }
        })
        .collect()
}

/// Same grouping as [`attach_to_challenges`], keyed on `techfugee_id`.
pub fn attach_to_techfugees(
    techfugees: Vec<techfugee::Model>,
    applications: Vec<application::Model>,
) -> Vec<TechfugeeWithApplications> {
    let mut grouped: HashMap<i64, Vec<application::Model>> = HashMap::new();
    for application in applications {
        grouped
            .entry(application.techfugee_id)
            .or_default()
            .push(application);
    }

    techfugees
        .into_iter()
        .map(|techfugee| {
            let applications = grouped.remove(&techfugee.id).unwrap_or_default();
            TechfugeeWithApplications {
                techfugee,
                applications,
            }
        })
        .collect()
}
