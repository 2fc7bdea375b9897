//! Locating, reading, and writing the preferences file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};
use serde::Serialize;

const PREFS_FILE_NAME: &str = "rubiksim-prefs.yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = ProjectDirs::from("", "", "rubiksim")
        .map(|dirs| dirs.config_dir().join(PREFS_FILE_NAME));
}

/// Returns the default path of the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE
        .as_deref()
        .ok_or_eyre("unable to determine config directory")
}

/// Returns a config source that reads `path`, which may not exist.
pub fn config_source(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path)
        .format(crate::PREFS_FILE_FORMAT)
        .required(false)
}

/// Returns a config source for the default user preferences file.
pub fn user_config_source() -> Result<config::File<config::FileSourceFile, config::FileFormat>> {
    Ok(config_source(prefs_file()?))
}

/// Saves preferences to the default user preferences file.
pub fn save(prefs_data: &impl Serialize) -> Result<()> {
    save_to(prefs_file()?, prefs_data)
}

/// Saves preferences to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    log::info!("saved preferences to {}", path.display());
    Ok(())
}
