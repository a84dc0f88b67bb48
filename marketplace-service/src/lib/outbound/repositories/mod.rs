pub mod account;
pub mod application;
pub mod opportunity;
pub mod profile;

pub use account::PostgresAccountRepository;
pub use application::PostgresApplicationRepository;
pub use opportunity::PostgresOpportunityRepository;
pub use profile::PostgresProfileRepository;
