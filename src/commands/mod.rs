//! CLI commands for waypath

pub mod dispatch;
pub mod neighbors;
pub mod paths;
pub mod validate;
