pub mod delete_current_account;
pub mod get_current_account;
pub mod update_current_account;

pub use delete_current_account::delete_current_account;
pub use get_current_account::get_current_account;
pub use update_current_account::update_current_account;
