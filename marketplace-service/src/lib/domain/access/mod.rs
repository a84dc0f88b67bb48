pub mod errors;
pub mod guard;
pub mod models;
pub mod ports;

pub use guard::AccessGuard;
