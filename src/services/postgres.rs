use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{BasicInfo, CandidateProfile, MatchPreferences, Personality};

/// Errors that can occur when reading the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Minimal requester record, just enough to authorize and shape the pool query.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub account_type: Option<String>,
    pub profile_pic: Option<String>,
}

/// Read-only client for the profile store.
///
/// The surrounding application owns all writes (registration, profile edits);
/// this service only snapshots users, sub-records, and match preferences for
/// one scoring pass.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch the requester's user row, if it exists.
    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserRecord>, StoreError> {
        let query = r#"
            SELECT id, account_type, profile_pic
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(UserRecord {
                id: row.try_get("id")?,
                account_type: row.try_get("account_type")?,
                profile_pic: row.try_get("profile_pic")?,
            })
        })
        .transpose()
        .map_err(StoreError::SqlxError)
    }

    /// Fetch the requester's match preferences, if they have been set.
    pub async fn get_preferences(
        &self,
        user_id: i64,
    ) -> Result<Option<MatchPreferences>, StoreError> {
        let query = r#"
            SELECT user_id, age_range, marital_status, country_of_origin, tribe,
                   current_location, skin_tone, height, eye_colour, body_type,
                   hair_colour, hair_style, religion, education, languages,
                   interest, hobbies, movies, music, activities, personal_values,
                   personality
            FROM match_preferences
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(MatchPreferences {
                user_id: row.try_get("user_id")?,
                age_range: row.try_get("age_range")?,
                marital_status: row.try_get("marital_status")?,
                country_of_origin: row.try_get("country_of_origin")?,
                tribe: row.try_get("tribe")?,
                current_location: row.try_get("current_location")?,
                skin_tone: row.try_get("skin_tone")?,
                height: row.try_get("height")?,
                eye_colour: row.try_get("eye_colour")?,
                body_type: row.try_get("body_type")?,
                hair_colour: row.try_get("hair_colour")?,
                hair_style: row.try_get("hair_style")?,
                religion: row.try_get("religion")?,
                education: row.try_get("education")?,
                languages: row.try_get("languages")?,
                interest: row.try_get("interest")?,
                hobbies: row.try_get("hobbies")?,
                movies: row.try_get("movies")?,
                music: row.try_get("music")?,
                activities: row.try_get("activities")?,
                values: row.try_get("personal_values")?,
                personality: row.try_get("personality")?,
            })
        })
        .transpose()
        .map_err(StoreError::SqlxError)
    }

    /// Snapshot the candidate pool: every user of the given account type with
    /// their basic-info and personality sub-records left-joined in.
    ///
    /// Pool-selection policy (same account type as the requester) lives here,
    /// at the store boundary; the scoring engine never sees it. The requester
    /// is filtered out by the caller so the pool can be cached per account
    /// type.
    pub async fn get_candidates(
        &self,
        account_type: Option<&str>,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let query = r#"
            SELECT u.id AS user_id,
                   u.profile_pic,
                   b.id AS basic_id,
                   b.nickname, b.age_range, b.marital_status, b.country_of_origin,
                   b.tribe, b.current_location, b.skin_tone,
                   p.id AS personality_id,
                   p.height, p.eye_colour, p.body_type, p.hair_colour, p.hair_style,
                   p.religion, p.education, p.languages, p.interest, p.hobbies,
                   p.movies, p.music, p.activities, p.personal_values, p.personality
            FROM users u
            LEFT JOIN basic_info b ON b.user_id = u.id
            LEFT JOIN personalities p ON p.user_id = u.id
            WHERE ($1::text IS NULL OR u.account_type = $1)
            ORDER BY u.id
        "#;

        let rows = sqlx::query(query)
            .bind(account_type)
            .fetch_all(&self.pool)
            .await?;

        let candidates: Result<Vec<CandidateProfile>, sqlx::Error> = rows
            .iter()
            .map(|row| {
                let basic_id: Option<i64> = row.try_get("basic_id")?;
                let basic_info = basic_id
                    .map(|_| {
                        Ok::<_, sqlx::Error>(BasicInfo {
                            nickname: row.try_get("nickname")?,
                            age_range: row.try_get("age_range")?,
                            marital_status: row.try_get("marital_status")?,
                            country_of_origin: row.try_get("country_of_origin")?,
                            tribe: row.try_get("tribe")?,
                            current_location: row.try_get("current_location")?,
                            skin_tone: row.try_get("skin_tone")?,
                        })
                    })
                    .transpose()?;

                let personality_id: Option<i64> = row.try_get("personality_id")?;
                let personality = personality_id
                    .map(|_| {
                        Ok::<_, sqlx::Error>(Personality {
                            height: row.try_get("height")?,
                            eye_colour: row.try_get("eye_colour")?,
                            body_type: row.try_get("body_type")?,
                            hair_colour: row.try_get("hair_colour")?,
                            hair_style: row.try_get("hair_style")?,
                            religion: row.try_get("religion")?,
                            education: row.try_get("education")?,
                            languages: row.try_get("languages")?,
                            interest: row.try_get("interest")?,
                            hobbies: row.try_get("hobbies")?,
                            movies: row.try_get("movies")?,
                            music: row.try_get("music")?,
                            activities: row.try_get("activities")?,
                            values: row.try_get("personal_values")?,
                            personality: row.try_get("personality")?,
                        })
                    })
                    .transpose()?;

                Ok(CandidateProfile {
                    user_id: row.try_get("user_id")?,
                    profile_pic: row.try_get("profile_pic")?,
                    basic_info,
                    personality,
                })
            })
            .collect();

        let candidates = candidates?;
        tracing::debug!("Loaded {} candidates from store", candidates.len());

        Ok(candidates)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
