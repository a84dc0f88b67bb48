use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::postgres::PgRow;
use sqlx::query::Query;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Row;

use crate::domain::account::models::AccountId;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileId;
use crate::domain::profile::ports::ProfileRepository;

/// Insert-or-overwrite keyed on the owning account. Shared with account
/// registration, which writes the initial profile inside its transaction.
pub(crate) const UPSERT_PROFILE_SQL: &str = r#"
    INSERT INTO profiles (
        id, account_id, avatar_url, bio, skills, interests,
        company_name, company_website, country, city
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
    ON CONFLICT (account_id) DO UPDATE SET
        avatar_url = EXCLUDED.avatar_url,
        bio = EXCLUDED.bio,
        skills = EXCLUDED.skills,
        interests = EXCLUDED.interests,
        company_name = EXCLUDED.company_name,
        company_website = EXCLUDED.company_website,
        country = EXCLUDED.country,
        city = EXCLUDED.city
    RETURNING id
    "#;

/// Bind every profile column onto [`UPSERT_PROFILE_SQL`].
pub(crate) fn bind_profile<'q>(
    query: Query<'q, Postgres, PgArguments>,
    profile: &Profile,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(profile.id.0)
        .bind(profile.account_id.0)
        .bind(profile.avatar_url.clone())
        .bind(profile.bio.clone())
        .bind(profile.skills.clone())
        .bind(profile.interests.clone())
        .bind(profile.company_name.clone())
        .bind(profile.company_website.clone())
        .bind(profile.country.clone())
        .bind(profile.city.clone())
}

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &PgRow) -> Result<Profile, sqlx::Error> {
        Ok(Profile {
            id: ProfileId(row.try_get("id")?),
            account_id: AccountId(row.try_get("account_id")?),
            avatar_url: row.try_get("avatar_url")?,
            bio: row.try_get("bio")?,
            skills: row.try_get("skills")?,
            interests: row.try_get("interests")?,
            company_name: row.try_get("company_name")?,
            company_website: row.try_get("company_website")?,
            country: row.try_get("country")?,
            city: row.try_get("city")?,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, avatar_url, bio, skills, interests,
                   company_name, company_website, country, city
            FROM profiles
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(Self::row_to_profile)
            .transpose()
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))
    }

    async fn upsert(&self, mut profile: Profile) -> Result<Profile, ProfileError> {
        let row = bind_profile(sqlx::query(UPSERT_PROFILE_SQL), &profile)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        // An existing row keeps its original id.
        profile.id = ProfileId(
            row.try_get("id")
                .map_err(|e| ProfileError::DatabaseError(e.to_string()))?,
        );

        Ok(profile)
    }
}
