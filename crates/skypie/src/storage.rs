//! Profile and constants files (native only)
//!
//! Directory structure:
//! ~/.skypie/
//!   skypie.log         # Trimmed once it passes 5 MB
//!   constants.yaml     # Optional overrides of the default constants
//!
//! Airplane profiles may live anywhere; `PLANE` arguments that are not a
//! preset name are read as a YAML profile path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use skypie_core::error::ProfileError;
use skypie_core::model::{AircraftProfile, Constants};

use crate::presets::{PRESET_NAMES, preset};

pub const CONSTANTS_FILE: &str = "constants.yaml";

#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    UnknownPlane(String),
    Profile(ProfileError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io { path, message } => {
                write!(f, "could not read {}: {message}", path.display())
            }
            StorageError::Parse { path, message } => {
                write!(f, "could not parse {}: {message}", path.display())
            }
            StorageError::UnknownPlane(name) => write!(
                f,
                "unknown plane {name:?}: expected one of {} or a YAML profile path",
                PRESET_NAMES.join(", ")
            ),
            StorageError::Profile(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ProfileError> for StorageError {
    fn from(err: ProfileError) -> Self {
        StorageError::Profile(err)
    }
}

fn read(path: &Path) -> Result<String, StorageError> {
    fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve a `PLANE` argument: a preset name, else a YAML profile file
pub fn load_plane(plane: &str) -> Result<AircraftProfile, StorageError> {
    if let Some(profile) = preset(plane) {
        return Ok(profile?);
    }

    let path = Path::new(plane);
    if !path.is_file() {
        return Err(StorageError::UnknownPlane(plane.to_string()));
    }
    let profile: AircraftProfile =
        serde_saphyr::from_str(&read(path)?).map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), plane = profile.name(), "Loaded profile");
    Ok(profile)
}

/// Default constants with `{data_dir}/constants.yaml` layered on top, if present
pub fn load_constants(data_dir: &Path) -> Result<Constants, StorageError> {
    let mut constants = Constants::default();

    let path = data_dir.join(CONSTANTS_FILE);
    if !path.exists() {
        return Ok(constants);
    }
    let overrides: BTreeMap<String, f64> =
        serde_saphyr::from_str(&read(&path)?).map_err(|e| StorageError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), count = overrides.len(), "Loaded constants");
    constants.extend(overrides);
    Ok(constants)
}
