use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use demlens_core::error::{DemError, Result};

/// Output verbosity, 1 (errors only) to 5 (every message body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub struct Verbosity(u8);

impl Verbosity {
    pub const ERROR: Verbosity = Verbosity(1);
    pub const IMPORTANT: Verbosity = Verbosity(2);
    pub const INFO: Verbosity = Verbosity(3);
    pub const DEBUG: Verbosity = Verbosity(4);
    pub const WORTHLESS: Verbosity = Verbosity(5);

    pub fn at_least(self, other: Verbosity) -> bool {
        self >= other
    }

    /// Matching tracing filter.
    pub fn level_filter(self) -> LevelFilter {
        match self.0 {
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::INFO
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = String;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        if (1..=5).contains(&v) {
            Ok(Verbosity(v))
        } else {
            Err(format!("verbosity must be between 1 and 5, got {v}"))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    pub version: u32,

    #[serde(default)]
    pub verbosity: Verbosity,

    /// Stop cleanly after this many frames.
    #[serde(default)]
    pub max_frames: Option<usize>,

    /// Keep resolved game events in the parse summary.
    #[serde(default)]
    pub collect_events: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: 1,
            verbosity: Verbosity::default(),
            max_frames: None,
            collect_events: false,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DemError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        if self.max_frames == Some(0) {
            return Err(DemError::Config("max_frames must be at least 1".into()));
        }
        Ok(())
    }
}
