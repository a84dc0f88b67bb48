pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use service::OpportunityService;
