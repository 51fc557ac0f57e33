use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::SchedulerConfig;

/// Values to store in the config file; unset fields keep their current value.
#[derive(Default)]
pub struct ConfigUpdate {
    pub port: Option<u16>,
    pub db_file: Option<PathBuf>,
    pub web_dir: Option<PathBuf>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.port.is_none() && self.db_file.is_none() && self.web_dir.is_none()
    }
}

pub fn run(update: ConfigUpdate) -> Result<()> {
    let config_path = SchedulerConfig::config_path()?;

    if !update.is_empty() {
        apply(&config_path, update)?;
        println!("{} {}", "Saved".green(), config_path.display());
    }

    let config = SchedulerConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Database:  {}", config.db_file.display());
    println!("  Web:       {}", config.web_dir.display());
    println!("{}", "Server".bold());
    println!("  Port:      {}", config.port);

    Ok(())
}

/// Write `update` over the values stored at `path`.
pub fn apply(path: &Path, update: ConfigUpdate) -> Result<SchedulerConfig> {
    let mut config = SchedulerConfig::load_file(path)?;

    if let Some(port) = update.port {
        config.port = port;
    }
    if let Some(db_file) = update.db_file {
        config.db_file = db_file;
    }
    if let Some(web_dir) = update.web_dir {
        config.web_dir = web_dir;
    }

    config.save(path)?;
    Ok(config)
}
