use super::types::Settings;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const SETTINGS_PATH: &str = "settings.json";

/// Settings persisted as json inside a config directory.
#[derive(Clone, Debug)]
pub struct Repository {
    directory: PathBuf,
    settings: Arc<Mutex<Settings>>,
}

impl Repository {
    /// Repository in the per-user config directory
    pub fn new() -> Result<Self, String> {
        Self::with_directory(data_directory()?)
    }

    pub fn with_directory(directory: impl Into<PathBuf>) -> Result<Self, String> {
        let directory = directory.into();
        if !directory.exists() {
            std::fs::create_dir_all(&directory).map_err(|e| {
                format!("Could not create directory {}: {e:?}", directory.display())
            })?;
        }
        let settings = match read(&directory, SETTINGS_PATH) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                log::error!("Could not load settings, using defaults: {e}");
                Settings::default()
            }
        };
        Ok(Self {
            directory,
            settings: Arc::new(Mutex::new(settings)),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn settings(&self) -> Result<Settings, String> {
        Ok(self
            .settings
            .lock()
            .map_err(|e| format!("Settings Data Error: {e:?}"))?
            .clone())
    }

    pub fn set_settings(&self, settings: &Settings) -> Result<(), String> {
        let mut current = self
            .settings
            .lock()
            .map_err(|e| format!("Settings Data Error: {e:?}"))?;
        *current = settings.clone();
        write(&self.directory, SETTINGS_PATH, current.deref())
    }

    pub fn map_settings<T>(
        &self,
        action: impl FnOnce(&mut MutexGuard<Settings>) -> T,
    ) -> Result<T, String> {
        let mut settings = self
            .settings
            .lock()
            .map_err(|e| format!("Settings Data Error: {e:?}"))?;
        let o = action(&mut settings);
        if let Err(e) = write(&self.directory, SETTINGS_PATH, settings.deref()) {
            log::error!("Could not save settings: {e:?}");
        }
        Ok(o)
    }
}

fn read<T: DeserializeOwned>(directory: &Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &Path, name: &str, value: &T) -> Result<(), String> {
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    ProjectDirs::from("com", "watchlist", "watchlist")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| "Couldn't find a folder to save data".to_string())
}
