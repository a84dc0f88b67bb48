use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::models::AccountId;
use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::opportunity::models::OpportunityDescription;
use crate::domain::opportunity::models::OpportunityId;
use crate::domain::opportunity::models::OpportunityStatus;
use crate::domain::opportunity::models::OpportunityTitle;
use crate::domain::opportunity::ports::OpportunityRepository;

fn database_error(e: sqlx::Error) -> OpportunityError {
    OpportunityError::DatabaseError(e.to_string())
}

pub struct PostgresOpportunityRepository {
    pool: PgPool,
}

impl PostgresOpportunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Map a row selected with the `o_`-prefixed opportunity columns.
    ///
    /// The prefix lets application queries join opportunities without
    /// column name clashes.
    pub(crate) fn row_to_opportunity(row: &PgRow) -> Result<Opportunity, OpportunityError> {
        let title: String = row.try_get("o_title").map_err(database_error)?;
        let description: String = row.try_get("o_description").map_err(database_error)?;
        let status: String = row.try_get("o_status").map_err(database_error)?;

        Ok(Opportunity {
            id: OpportunityId(row.try_get("o_id").map_err(database_error)?),
            provider_id: AccountId(row.try_get("o_provider_id").map_err(database_error)?),
            title: OpportunityTitle::new(title)?,
            description: OpportunityDescription::new(description)?,
            opportunity_type: row.try_get("o_type").map_err(database_error)?,
            tags: row.try_get("o_tags").map_err(database_error)?,
            status: status.parse::<OpportunityStatus>()?,
            location: row.try_get("o_location").map_err(database_error)?,
            created_at: row.try_get("o_created_at").map_err(database_error)?,
            updated_at: row.try_get("o_updated_at").map_err(database_error)?,
        })
    }
}

/// Opportunity columns aliased for [`PostgresOpportunityRepository::row_to_opportunity`].
pub(crate) const OPPORTUNITY_COLUMNS: &str = "o.id AS o_id, o.provider_id AS o_provider_id, \
     o.title AS o_title, o.description AS o_description, o.type AS o_type, o.tags AS o_tags, \
     o.status AS o_status, o.location AS o_location, o.created_at AS o_created_at, \
     o.updated_at AS o_updated_at";

#[async_trait]
impl OpportunityRepository for PostgresOpportunityRepository {
    async fn create(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError> {
        sqlx::query(
            r#"
            INSERT INTO opportunities (
                id, provider_id, title, description, type, tags,
                status, location, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(opportunity.id.0)
        .bind(opportunity.provider_id.0)
        .bind(opportunity.title.as_str())
        .bind(opportunity.description.as_str())
        .bind(&opportunity.opportunity_type)
        .bind(&opportunity.tags)
        .bind(opportunity.status.as_str())
        .bind(&opportunity.location)
        .bind(opportunity.created_at)
        .bind(opportunity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(opportunity)
    }

    async fn find_all(&self) -> Result<Vec<Opportunity>, OpportunityError> {
        let rows = sqlx::query(&format!(
            "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities o ORDER BY o.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_opportunity).collect()
    }

    async fn find_by_id(
        &self,
        id: &OpportunityId,
    ) -> Result<Option<Opportunity>, OpportunityError> {
        let row = sqlx::query(&format!(
            "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities o WHERE o.id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_opportunity).transpose()
    }

    async fn find_by_provider(
        &self,
        provider_id: &AccountId,
    ) -> Result<Vec<Opportunity>, OpportunityError> {
        let rows = sqlx::query(&format!(
            "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities o \
             WHERE o.provider_id = $1 ORDER BY o.created_at DESC"
        ))
        .bind(provider_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_opportunity).collect()
    }

    async fn save(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError> {
        let result = sqlx::query(
            r#"
            UPDATE opportunities
            SET title = $2, description = $3, type = $4, tags = $5,
                status = $6, location = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(opportunity.id.0)
        .bind(opportunity.title.as_str())
        .bind(opportunity.description.as_str())
        .bind(&opportunity.opportunity_type)
        .bind(&opportunity.tags)
        .bind(opportunity.status.as_str())
        .bind(&opportunity.location)
        .bind(opportunity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(OpportunityError::NotFound(opportunity.id));
        }

        Ok(opportunity)
    }

    async fn delete(&self, id: &OpportunityId) -> Result<(), OpportunityError> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(OpportunityError::NotFound(*id));
        }

        Ok(())
    }
}
