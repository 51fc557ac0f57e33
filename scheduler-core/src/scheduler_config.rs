//! Scheduler configuration.
//!
//! Values come from `~/.config/scheduler/config.toml`, overridden by
//! `TODO_*` environment variables (`TODO_PORT`, `TODO_DBFILE`, `TODO_WEBDIR`).

use std::path::{Path, PathBuf};

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_FILE, DEFAULT_PORT, DEFAULT_WEB_DIR};
use crate::error::{SchedulerError, SchedulerResult};

static ENV_PREFIX: &str = "TODO";

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// The database lives next to the executable unless configured otherwise.
fn default_db_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DB_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

fn default_web_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WEB_DIR)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(rename = "dbfile", default = "default_db_file")]
    pub db_file: PathBuf,

    #[serde(rename = "webdir", default = "default_web_dir")]
    pub web_dir: PathBuf,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            port: default_port(),
            db_file: default_db_file(),
            web_dir: default_web_dir(),
        }
    }
}

impl SchedulerConfig {
    pub fn config_path() -> SchedulerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedulerError::Config("Could not determine config directory".into()))?
            .join("scheduler");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration, creating a commented default config file on first run.
    pub fn load() -> SchedulerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> SchedulerResult<Self> {
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// Load only what is stored in the file, ignoring `TODO_*` overrides.
    ///
    /// Used before [`save`](Self::save) so environment values are not persisted.
    pub fn load_file(path: &Path) -> SchedulerResult<Self> {
        Self::build(Config::builder().add_source(File::from(path).required(false)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> SchedulerResult<Self> {
        let config: SchedulerConfig = builder
            .build()
            .map_err(|e| SchedulerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SchedulerError::Config(e.to_string()))?;

        Ok(config.expanded())
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> SchedulerResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SchedulerError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SchedulerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SchedulerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SchedulerResult<()> {
        let contents = format!(
            "\
# scheduler configuration

# HTTP port (env: TODO_PORT):
# port = {DEFAULT_PORT}

# SQLite database file (env: TODO_DBFILE), defaults to {DEFAULT_DB_FILE} next to the binary:
# dbfile = \"~/scheduler/{DEFAULT_DB_FILE}\"

# Directory with the web frontend (env: TODO_WEBDIR):
# webdir = \"{DEFAULT_WEB_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SchedulerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SchedulerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Expand `~` in configured paths.
    fn expanded(self) -> Self {
        SchedulerConfig {
            db_file: expand_tilde(&self.db_file),
            web_dir: expand_tilde(&self.web_dir),
            ..self
        }
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SchedulerConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.web_dir, PathBuf::from(DEFAULT_WEB_DIR));
        assert!(config.db_file.ends_with(DEFAULT_DB_FILE));
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 8080\ndbfile = \"/tmp/tasks.db\"\n").unwrap();

        let config = SchedulerConfig::load_from(&path).unwrap();
        assert_eq!(config.db_file, PathBuf::from("/tmp/tasks.db"));
        assert_eq!(config.web_dir, PathBuf::from(DEFAULT_WEB_DIR));
    }

    #[test]
    fn default_config_file_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        SchedulerConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents
            .lines()
            .all(|line| line.is_empty() || line.starts_with('#')));
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = SchedulerConfig {
            port: 9000,
            db_file: PathBuf::from("/var/lib/scheduler.db"),
            web_dir: PathBuf::from("/srv/web"),
        };

        config.save(&path).unwrap();

        let loaded: SchedulerConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_file_reads_stored_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 8080\n").unwrap();

        let config = SchedulerConfig::load_file(&path).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        SchedulerConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn tilde_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            expand_tilde(Path::new("~/scheduler.db")),
            home.join("scheduler.db")
        );
    }
}
