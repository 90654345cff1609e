pub mod error;
pub mod logs;
pub mod users;
