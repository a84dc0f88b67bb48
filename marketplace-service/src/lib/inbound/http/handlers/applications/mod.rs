pub mod apply;
pub mod list_my_applications;
pub mod review_application;

pub use apply::apply;
pub use list_my_applications::list_my_applications;
pub use review_application::review_application;
