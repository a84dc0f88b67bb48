pub mod create_opportunity;
pub mod delete_opportunity;
pub mod get_opportunity;
pub mod list_my_opportunities;
pub mod list_opportunities;
pub mod list_opportunity_applications;
pub mod update_opportunity;

pub use create_opportunity::create_opportunity;
pub use delete_opportunity::delete_opportunity;
pub use get_opportunity::get_opportunity;
pub use list_my_opportunities::list_my_opportunities;
pub use list_opportunities::list_opportunities;
pub use list_opportunity_applications::list_opportunity_applications;
pub use update_opportunity::update_opportunity;

use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::OpportunityId;
use crate::inbound::http::handlers::ApiError;

/// Parse an opportunity id taken from the request path.
pub(crate) fn parse_opportunity_id(raw: &str) -> Result<OpportunityId, ApiError> {
    OpportunityId::from_string(raw).map_err(|e| ApiError::from(OpportunityError::from(e)))
}
