pub mod gallery_service;
pub mod notification_service;

pub use gallery_service::*;
pub use notification_service::*;
