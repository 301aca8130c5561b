pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::ServerConfig;
pub use crate::core::classifier;
pub use crate::domain::model::{Classification, NumberProperty, ParsedNumber};
pub use crate::server::app_router;
pub use crate::utils::error::{ApiError, Result};
