use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_port, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "number-classifier")]
#[command(about = "A small API server that classifies numbers")]
pub struct ServerConfig {
    /// Listening port; the PORT environment variable takes precedence over
    /// the default.
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_port("port", self.port)?;
        validate_non_empty_string("host", &self.host)?;
        Ok(())
    }
}
