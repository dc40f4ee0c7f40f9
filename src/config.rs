use std::path::PathBuf;

use tracing::Level;

use crate::error::ConfigError;

pub const DEFAULT_CATALOG: &str = "players_info.json";
pub const DEFAULT_TOP: usize = 20;
const DEFAULT_LOG_LEVEL: Level = Level::WARN;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub catalog: PathBuf,
    /// Space separated ranks; `None` selects the whole catalog.
    pub ranks: Option<String>,
    pub top: usize,
    pub overview: bool,
    pub log_level: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            ranks: None,
            top: DEFAULT_TOP,
            overview: false,
            log_level: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top == 0 {
            return Err(ConfigError::ZeroTop);
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(DEFAULT_LOG_LEVEL),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::LogLevel(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RunConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.level(), Ok(Level::WARN));
    }

    #[test]
    fn rejects_zero_top() {
        let config = RunConfig { top: 0, ..RunConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTop));
    }

    #[test]
    fn parses_log_level() {
        let config = RunConfig { log_level: Some("debug".into()), ..RunConfig::default() };
        assert_eq!(config.level(), Ok(Level::DEBUG));
        let config = RunConfig { log_level: Some("loud".into()), ..RunConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::LogLevel("loud".into())));
    }
}
