//! Parser config loader (strict parsing).

pub mod schema;

use std::fs;

use demlens_core::error::{DemError, Result};

pub use schema::{ParserConfig, Verbosity};

pub fn load_from_file(path: &str) -> Result<ParserConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DemError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ParserConfig> {
    let cfg: ParserConfig = serde_yaml::from_str(s)
        .map_err(|e| DemError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
