use crate::utils::path::is_absolute;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_week_dates")]
    pub show_week_dates: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_week_dates() -> String {
    "Yes".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let store_path = Self::store_file();
        Self {
            store: store_path.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            show_week_dates: default_show_week_dates(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wlog.conf")
    }

    /// Return the full path of the JSON shift store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("wlog.store.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            if is_absolute(&name) {
                PathBuf::from(name)
            } else {
                dir.join(name)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            show_week_dates: default_show_week_dates(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&store_path)?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }
}
