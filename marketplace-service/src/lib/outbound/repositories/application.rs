use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::models::AccountId;
use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::Application;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::ApplicationWithOpportunity;
use crate::domain::application::ports::ApplicationRepository;
use crate::domain::opportunity::models::OpportunityId;
use crate::outbound::repositories::opportunity::PostgresOpportunityRepository;
use crate::outbound::repositories::opportunity::OPPORTUNITY_COLUMNS;

fn database_error(e: sqlx::Error) -> ApplicationError {
    ApplicationError::DatabaseError(e.to_string())
}

pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &PgRow) -> Result<Application, ApplicationError> {
        let status: String = row.try_get("status").map_err(database_error)?;

        Ok(Application {
            id: ApplicationId(row.try_get("id").map_err(database_error)?),
            seeker_id: AccountId(row.try_get("seeker_id").map_err(database_error)?),
            opportunity_id: OpportunityId(row.try_get("opportunity_id").map_err(database_error)?),
            status: status.parse::<ApplicationStatus>()?,
            cover_letter: row.try_get("cover_letter").map_err(database_error)?,
            submitted_at: row.try_get("submitted_at").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn create(&self, application: Application) -> Result<Application, ApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO applications (id, seeker_id, opportunity_id, status, cover_letter, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(application.id.0)
        .bind(application.seeker_id.0)
        .bind(application.opportunity_id.0)
        .bind(application.status.as_str())
        .bind(&application.cover_letter)
        .bind(application.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("applications_seeker_opportunity_key")
                {
                    return ApplicationError::AlreadyApplied(application.opportunity_id);
                }
                // The opportunity was deleted between the check and the insert.
                if db_err.is_foreign_key_violation() {
                    return ApplicationError::OpportunityNotFound(application.opportunity_id);
                }
            }
            database_error(e)
        })?;

        Ok(application)
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, ApplicationError> {
        let row = sqlx::query(
            r#"
            SELECT id, seeker_id, opportunity_id, status, cover_letter, submitted_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn find_by_seeker_and_opportunity(
        &self,
        seeker_id: &AccountId,
        opportunity_id: &OpportunityId,
    ) -> Result<Option<Application>, ApplicationError> {
        let row = sqlx::query(
            r#"
            SELECT id, seeker_id, opportunity_id, status, cover_letter, submitted_at
            FROM applications
            WHERE seeker_id = $1 AND opportunity_id = $2
            "#,
        )
        .bind(seeker_id.0)
        .bind(opportunity_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn find_by_seeker_with_opportunity(
        &self,
        seeker_id: &AccountId,
    ) -> Result<Vec<ApplicationWithOpportunity>, ApplicationError> {
        let rows = sqlx::query(&format!(
            "SELECT a.id, a.seeker_id, a.opportunity_id, a.status, a.cover_letter, \
                    a.submitted_at, {OPPORTUNITY_COLUMNS} \
             FROM applications a \
             JOIN opportunities o ON o.id = a.opportunity_id \
             WHERE a.seeker_id = $1 \
             ORDER BY a.submitted_at DESC"
        ))
        .bind(seeker_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter()
            .map(|row| {
                let opportunity = PostgresOpportunityRepository::row_to_opportunity(row)
                    .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;
                Ok(ApplicationWithOpportunity {
                    application: Self::row_to_application(row)?,
                    opportunity,
                })
            })
            .collect()
    }

    async fn find_by_opportunity(
        &self,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Application>, ApplicationError> {
        let rows = sqlx::query(
            r#"
            SELECT id, seeker_id, opportunity_id, status, cover_letter, submitted_at
            FROM applications
            WHERE opportunity_id = $1
            ORDER BY submitted_at ASC
            "#,
        )
        .bind(opportunity_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_application).collect()
    }

    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, ApplicationError> {
        let row = sqlx::query(
            r#"
            UPDATE applications
            SET status = $2
            WHERE id = $1
            RETURNING id, seeker_id, opportunity_id, status, cover_letter, submitted_at
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Self::row_to_application(&row),
            None => Err(ApplicationError::NotFound(*id)),
        }
    }
}
