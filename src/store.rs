// src/store.rs
//
// Local persistence under `.store/`: the settings file that outlives a
// session: the API base URL and the admin token.

use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::config::consts::{SETTINGS_FILE, STORE_DIR};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}

pub fn settings_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

/// A missing file is not an error; it yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, Box<dyn std::error::Error>> {
    match fs::read_to_string(path) {
        Ok(text) if text.trim().is_empty() => Ok(Settings::default()),
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let path = settings_path();
    save_settings_to(&path, settings)?;
    logd!("Store: Saved settings → {}", path.display());
    Ok(())
}

/// Read-modify-write of the token only; other keys survive.
pub fn remember_admin_token(token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = load_settings()?;
    let token = token.trim();
    let next = (!token.is_empty()).then(|| s!(token));
    if settings.admin_token != next {
        settings.admin_token = next;
        save_settings(&settings)?;
    }
    Ok(())
}

pub fn remember_api_base(base: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = load_settings()?;
    settings.api_base = Some(crate::config::options::normalize_base_url(base));
    save_settings(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fashion_store_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("nested").join(SETTINGS_FILE)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let p = tmp("missing");
        assert_eq!(load_settings_from(&p).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_token() {
        let p = tmp("save");
        let s = Settings { api_base: None, admin_token: Some(s!("secret")) };
        save_settings_to(&p, &s).unwrap();
        let text = fs::read_to_string(&p).unwrap();
        assert!(!text.contains("api_base"));
        assert_eq!(load_settings_from(&p).unwrap(), s);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let p = tmp("corrupt");
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, "{not json").unwrap();
        assert!(load_settings_from(&p).is_err());
    }
}
