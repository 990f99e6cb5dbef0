// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The page context: who the overview is for, where the API lives, and the
//! translations to use.  Loaded from a JSON config file.
//!

use crate::{ConfigError, RenderTarget};
use directories_next::ProjectDirs;
use holiday_overview_core::{I18n, PersonId};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "HolidayOverview";
const APPLICATION_NAME: &str = "HolidayOverview";
const CONFIG_FILE_NAME: &str = "config.json";

/// Everything the controller needs to know about the page it runs for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// The person whose holidays are shown
    pub person_id: PersonId,

    /// Prefix of the web pages (e.g. for links)
    pub web_prefix: String,

    /// Prefix of the JSON API
    pub api_prefix: String,

    /// Translation table
    #[serde(default)]
    pub translations: I18n,

    /// Where the calendar is rendered
    #[serde(default)]
    pub render_target: RenderTarget,
}

impl PageContext {
    /// Load the context from the JSON file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let context: PageContext = serde_json::from_str(&data)?;
        info!(
            "Config loaded (person = {}, translations = {})",
            context.person_id,
            context.translations.len()
        );
        Ok(context)
    }

    /// Load the context from the default config file location
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&config_file_path()?)
    }

    /// Save the context as JSON to `path` (parent directories are created)
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {}", path.display());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(ConfigError::NoProjectDirs)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirs)
}

/// Get the default path to the config file
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    info!("Config file path = {config_file:?}");
    Ok(config_file)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn load_minimal() {
        let dir = TempDir::new("holiday-overview-context").unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "person_id": 4, "web_prefix": "/web", "api_prefix": "/api" }"#,
        )
        .unwrap();

        let context = PageContext::load(&path).unwrap();
        assert_eq!(context.person_id, PersonId::from(4).unwrap());
        assert_eq!(context.api_prefix, "/api");
        assert!(context.translations.is_empty());
        assert_eq!(context.render_target, RenderTarget::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new("holiday-overview-context").unwrap();
        let path = dir.path().join("nested/config.json");
        let mut translations = I18n::default();
        translations.insert("overview.calendar.title", "Overview");
        let context = PageContext {
            person_id: PersonId::from(8).unwrap(),
            web_prefix: "https://example.org/web".to_string(),
            api_prefix: "https://example.org/api".to_string(),
            translations,
            render_target: RenderTarget::new("#calendar"),
        };
        context.save(&path).unwrap();
        assert_eq!(PageContext::load(&path).unwrap(), context);
    }

    #[test]
    fn invalid() {
        let dir = TempDir::new("holiday-overview-context").unwrap();

        // Missing file
        let missing = PageContext::load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ConfigError::StdIo(_))));

        // Person 0 isn't allowed
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "person_id": 0, "web_prefix": "", "api_prefix": "" }"#,
        )
        .unwrap();
        assert!(matches!(
            PageContext::load(&path),
            Err(ConfigError::SerdeJson(_))
        ));
    }
}
