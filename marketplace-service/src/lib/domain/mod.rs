pub mod access;
pub mod account;
pub mod application;
pub mod opportunity;
pub mod profile;
