//! Storage gateway. One method per API use case; every method is a single
//! synchronous round-trip (or two, for the eager-loaded reads) against the
//! shared connection. No caching, no retries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set, SqlErr,
};

use crate::entities::{application, challenge, donator, techfugee};
use crate::entities::{Application, Challenge, Donator, Techfugee};
use crate::error::AppError;
use crate::join::{self, ChallengeWithApplications, TechfugeeWithApplications};

use migration::{Migrator, MigratorTrait};

/// Outcome of an insert guarded by a natural unique key. The row is carried
/// in both arms; `Existing` holds the row that already owned the key. The
/// guard is a single conditional insert backed by a unique index, so two
/// concurrent inserts of the same key cannot both win.
#[derive(Debug, Clone, PartialEq)]
pub enum Upsert<T> {
    Inserted(T),
    Existing(T),
}

impl<T> Upsert<T> {
    /// The row, regardless of whether this call created it.
    pub fn into_inner(self) -> T {
        match self {
            Upsert::Inserted(row) | Upsert::Existing(row) => row,
        }
    }
}

/// Handle on the relational store. Cheap to clone; opened once at startup
/// and shared by every request handler.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    Ok(raw.parse::<i64>()?)
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensure all four tables exist. Idempotent; run before serving.
    pub async fn initialize_schema(&self) -> Result<(), AppError> {
        Migrator::up(&self.db, None).await?;
        Ok(())
    }

    /// All techfugees with their applications eagerly attached.
    pub async fn techfugees(&self) -> Result<Vec<TechfugeeWithApplications>, AppError> {
        let techfugees = Techfugee::find()
            .filter(techfugee::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        let ids: Vec<i64> = techfugees.iter().map(|t| t.id).collect();
        let applications = Application::find()
            .filter(application::Column::TechfugeeId.is_in(ids))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(join::attach_to_techfugees(techfugees, applications))
    }

    /// All challenges with their applications eagerly attached.
    pub async fn challenges(&self) -> Result<Vec<ChallengeWithApplications>, AppError> {
        let challenges = Challenge::find()
            .filter(challenge::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        let ids: Vec<i64> = challenges.iter().map(|c| c.id).collect();
        let applications = Application::find()
            .filter(application::Column::ChallengeId.is_in(ids))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(join::attach_to_challenges(challenges, applications))
    }

    /// One techfugee by id. A missing id is not an error: the caller gets a
    /// zero-valued profile, matching the silent-not-found contract of the
    /// single-row reads.
    pub async fn techfugee(&self, id: &str) -> Result<TechfugeeWithApplications, AppError> {
        let id = parse_id(id)?;
        let techfugee = Techfugee::find_by_id(id)
            .filter(techfugee::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .unwrap_or_default();

        let applications = Application::find()
            .filter(application::Column::TechfugeeId.eq(techfugee.id))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(TechfugeeWithApplications {
            techfugee,
            applications,
        })
    }

    /// One challenge by id, zero-valued when missing.
    pub async fn challenge(&self, id: &str) -> Result<ChallengeWithApplications, AppError> {
        let id = parse_id(id)?;
        let challenge = Challenge::find_by_id(id)
            .filter(challenge::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .unwrap_or_default();

        let applications = Application::find()
            .filter(application::Column::ChallengeId.eq(challenge.id))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(ChallengeWithApplications {
            challenge,
            applications,
        })
    }

    /// One donator by id, zero-valued when missing. No eager loading.
    pub async fn donator(&self, id: &str) -> Result<donator::Model, AppError> {
        let id = parse_id(id)?;
        let donator = Donator::find_by_id(id)
            .filter(donator::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .unwrap_or_default();
        Ok(donator)
    }

    /// First techfugee with the given email, zero-valued when missing.
    pub async fn login_techfugee(&self, email: &str) -> Result<TechfugeeWithApplications, AppError> {
        let techfugee = Techfugee::find()
            .filter(techfugee::Column::Email.eq(email))
            .filter(techfugee::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .unwrap_or_default();

        let applications = Application::find()
            .filter(application::Column::TechfugeeId.eq(techfugee.id))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(TechfugeeWithApplications {
            techfugee,
            applications,
        })
    }

    /// First donator with the given email, zero-valued when missing.
    pub async fn login_donator(&self, email: &str) -> Result<donator::Model, AppError> {
        let donator = Donator::find()
            .filter(donator::Column::Email.eq(email))
            .filter(donator::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .unwrap_or_default();
        Ok(donator)
    }

    /// Every challenge owned by the donator, applications attached.
    pub async fn challenges_by_donator(
        &self,
        donator_id: &str,
    ) -> Result<Vec<ChallengeWithApplications>, AppError> {
        let donator_id = parse_id(donator_id)?;
        let challenges = Challenge::find()
            .filter(challenge::Column::DonatorId.eq(donator_id))
            .filter(challenge::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        let ids: Vec<i64> = challenges.iter().map(|c| c.id).collect();
        let applications = Application::find()
            .filter(application::Column::ChallengeId.is_in(ids))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(join::attach_to_challenges(challenges, applications))
    }

    /// Every challenge the techfugee has applied to, each populated with all
    /// of its applications, not only this techfugee's own. A challenge
    /// appears once no matter how many of its applications match.
    pub async fn challenges_by_techfugee(
        &self,
        techfugee_id: &str,
    ) -> Result<Vec<ChallengeWithApplications>, AppError> {
        let techfugee_id = parse_id(techfugee_id)?;
        let own_applications = Application::find()
            .filter(application::Column::TechfugeeId.eq(techfugee_id))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        let challenge_ids: Vec<i64> = own_applications.iter().map(|a| a.challenge_id).collect();
        let challenges = Challenge::find()
            .filter(challenge::Column::Id.is_in(challenge_ids.clone()))
            .filter(challenge::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        let applications = Application::find()
            .filter(application::Column::ChallengeId.is_in(challenge_ids))
            .filter(application::Column::DeletedAt.is_null())
            .all(&self.db)
            .await?;

        Ok(join::attach_to_challenges(challenges, applications))
    }

    /// Register a techfugee. Registration is idempotent by email: hitting an
    /// existing address hands back that row tagged `Existing`.
    pub async fn insert_techfugee(
        &self,
        name: &str,
        email: &str,
        skills: &str,
    ) -> Result<Upsert<techfugee::Model>, AppError> {
        let now = Utc::now();
        let row = techfugee::ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            skills: Set(skills.to_owned()),
            city: Set(String::new()),
            introduction: Set(String::new()),
            authenticated: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match row.insert(&self.db).await {
            Ok(created) => Ok(Upsert::Inserted(created)),
            Err(err) if is_unique_violation(&err) => {
                let existing = Techfugee::find()
                    .filter(techfugee::Column::Email.eq(email))
                    .filter(techfugee::Column::DeletedAt.is_null())
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| {
                        AppError::Database(format!("duplicate email {email} with no visible row"))
                    })?;
                Ok(Upsert::Existing(existing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Register a donator. Unlike techfugee registration the caller is told
    /// about a duplicate email; the boundary turns `Existing` into an error.
    pub async fn insert_donator(
        &self,
        name: &str,
        email: &str,
        website: &str,
        address: &str,
    ) -> Result<Upsert<donator::Model>, AppError> {
        let now = Utc::now();
        let row = donator::ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            website: Set(website.to_owned()),
            address: Set(address.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match row.insert(&self.db).await {
            Ok(created) => Ok(Upsert::Inserted(created)),
            Err(err) if is_unique_violation(&err) => {
                let existing = Donator::find()
                    .filter(donator::Column::Email.eq(email))
                    .filter(donator::Column::DeletedAt.is_null())
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| {
                        AppError::Database(format!("duplicate email {email} with no visible row"))
                    })?;
                Ok(Upsert::Existing(existing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// File an application. One per (techfugee, challenge) pair; a repeat
    /// comes back tagged `Existing` with the first row's data. Referenced
    /// ids are parsed but their rows are not verified to exist.
    pub async fn insert_application(
        &self,
        techfugee_id: &str,
        challenge_id: &str,
    ) -> Result<Upsert<application::Model>, AppError> {
        let techfugee_id = parse_id(techfugee_id)?;
        let challenge_id = parse_id(challenge_id)?;

        let now = Utc::now();
        let row = application::ActiveModel {
            techfugee_id: Set(techfugee_id),
            challenge_id: Set(challenge_id),
            accepted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match row.insert(&self.db).await {
            Ok(created) => Ok(Upsert::Inserted(created)),
            Err(err) if is_unique_violation(&err) => {
                let existing = Application::find()
                    .filter(application::Column::TechfugeeId.eq(techfugee_id))
                    .filter(application::Column::ChallengeId.eq(challenge_id))
                    .filter(application::Column::DeletedAt.is_null())
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| {
                        AppError::Database(format!(
                            "duplicate application ({techfugee_id}, {challenge_id}) with no visible row"
                        ))
                    })?;
                Ok(Upsert::Existing(existing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Post a challenge. No duplicate check of any kind.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_challenge(
        &self,
        donator_id: &str,
        name: &str,
        description: &str,
        laptop_type: &str,
        amount: &str,
        hardware_provided: &str,
        duration: &str,
    ) -> Result<challenge::Model, AppError> {
        let donator_id = parse_id(donator_id)?;
        let amount = amount.parse::<i64>()?;

        let now = Utc::now();
        let row = challenge::ActiveModel {
            donator_id: Set(donator_id),
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            laptop_type: Set(laptop_type.to_owned()),
            amount: Set(amount),
            hardware_provided: Set(hardware_provided.to_owned()),
            duration: Set(duration.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(row.insert(&self.db).await?)
    }

    /// Store the reviewer's verdict verbatim in `authenticated`.
    pub async fn update_auth(&self, id: &str, passed: &str) -> Result<techfugee::Model, AppError> {
        let id = parse_id(id)?;
        let techfugee = Techfugee::find_by_id(id)
            .filter(techfugee::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("record not found".to_owned()))?;

        let mut active = techfugee.into_active_model();
        active.authenticated = Set(passed.to_owned());
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.db).await?)
    }

    /// Update city and introduction, leaving every other field alone.
    pub async fn update_techfugee(
        &self,
        id: &str,
        city: &str,
        introduction: &str,
    ) -> Result<techfugee::Model, AppError> {
        let parsed = parse_id(id)?;
        let techfugee = Techfugee::find_by_id(parsed)
            .filter(techfugee::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no such techfugee: {id}")))?;

        let mut active = techfugee.into_active_model();
        active.city = Set(city.to_owned());
        active.introduction = Set(introduction.to_owned());
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.db).await?)
    }

    /// Replace the skills of an already-loaded techfugee row.
    pub async fn update_techfugee_skills(
        &self,
        techfugee: techfugee::Model,
        skills: &str,
    ) -> Result<techfugee::Model, AppError> {
        let mut active = techfugee.into_active_model();
        active.skills = Set(skills.to_owned());
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.db).await?)
    }

    /// Donor approval: flip `accepted` to true. Idempotent on repeat calls.
    /// The not-found message names the wrong entity; it is kept verbatim
    /// because clients already match on it.
    pub async fn accept_application(&self, id: &str) -> Result<application::Model, AppError> {
        let parsed = parse_id(id)?;
        let application = Application::find_by_id(parsed)
            .filter(application::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no such techfugee: {id}")))?;

        let mut active = application.into_active_model();
        active.accepted = Set(true);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.db).await?)
    }
}
