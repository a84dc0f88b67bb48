pub mod get_my_profile;
pub mod upsert_my_profile;

pub use get_my_profile::get_my_profile;
pub use upsert_my_profile::upsert_my_profile;
