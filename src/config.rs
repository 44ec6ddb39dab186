//! Application-level configuration loading: data file locations and leaderboard sizing.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "WORD_GAME_CONFIG_PATH";
const DEFAULT_WORDS_PATH: &str = "data/words.json";
const DEFAULT_SCORES_PATH: &str = "data/scores.json";
/// Number of entries returned by the leaderboard when the client does not ask for a limit.
const DEFAULT_LEADERBOARD_SIZE: usize = 10;
/// Port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// JSON document holding the word list.
    pub words_path: PathBuf,
    /// JSON document holding the score history.
    pub scores_path: PathBuf,
    /// Default number of leaderboard entries.
    pub leaderboard_size: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        words = %app_config.words_path.display(),
                        scores = %app_config.scores_path.display(),
                        "loaded config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
/// Every key is optional.
struct RawConfig {
    words_path: Option<PathBuf>,
    scores_path: Option<PathBuf>,
    leaderboard_size: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            words_path: value.words_path.unwrap_or(defaults.words_path),
            scores_path: value.scores_path.unwrap_or(defaults.scores_path),
            leaderboard_size: value.leaderboard_size.unwrap_or(defaults.leaderboard_size),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Port to listen on, read from `PORT` then `SERVER_PORT`.
pub fn server_port() -> u16 {
    env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let raw: RawConfig = serde_json::from_str(r#"{ "leaderboard_size": 25 }"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.leaderboard_size, 25);
        assert_eq!(config.words_path, PathBuf::from(DEFAULT_WORDS_PATH));
        assert_eq!(config.scores_path, PathBuf::from(DEFAULT_SCORES_PATH));
    }

    #[test]
    fn empty_config_matches_defaults() {
        let config = AppConfig::from(RawConfig::default());

        assert_eq!(config.leaderboard_size, DEFAULT_LEADERBOARD_SIZE);
        assert_eq!(config.words_path, PathBuf::from(DEFAULT_WORDS_PATH));
    }
}
