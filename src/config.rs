use crate::error::{Result, SidebarError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub page: PageConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationGroup>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PanelConfig {
    /// Width of the sidebar (in pixels)
    pub sidebar_width: f32,
}

/// Where the first page load happens
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PageConfig {
    /// Absolute base URL that link paths resolve against
    pub origin: String,
    /// Page opened at startup, relative to `origin`
    pub start: String,
}

/// Persisted favorites/recents storage
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StorageConfig {
    /// Override for the storage file; defaults to the platform data dir
    pub path: Option<PathBuf>,
}

/// A declared sidebar section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationGroup {
    pub title: String,
    pub links: Vec<NavigationLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationLink {
    pub text: String,
    pub path: String,
}

/// The stock navigation: two transactions and four reports.
pub fn default_navigation() -> Vec<NavigationGroup> {
    let link = |text: &str, path: &str| NavigationLink {
        text: text.to_string(),
        path: path.to_string(),
    };

    vec![
        NavigationGroup {
            title: "Transactions".to_string(),
            links: vec![
                link("Instruction", "instruction.html"),
                link("Enrollment", "enrollment.html"),
            ],
        },
        NavigationGroup {
            title: "Reports".to_string(),
            links: (1..=4)
                .map(|i| link(&format!("Report {i}"), &format!("report_{i}.html")))
                .collect(),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            panel: PanelConfig {
                sidebar_width: 220.0,
            },
            page: PageConfig {
                origin: "http://localhost/".to_string(),
                start: "index.html".to_string(),
            },
            storage: StorageConfig::default(),
            navigation: default_navigation(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "waymark")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            tracing::warn!(path = %path.display(), error = %e, "failed to parse config file, using defaults");
                        }
                    },
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to read config file, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(SidebarError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }

    /// Storage file to use, honoring the override.
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage
            .path
            .clone()
            .or_else(crate::store::FileStore::default_path)
    }
}
