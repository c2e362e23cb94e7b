use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

pub const ENV_FILE: &str = "./.env";

const APP_PORT_DEFAULT: u16 = 3000;
const APP_HOST_DEFAULT: &str = "localhost";
const DB_PORT_DEFAULT: u16 = 27017;
const DB_HOST_DEFAULT: &str = "localhost";
const DB_NAME_DEFAULT: &str = "mySimpleBlog";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_port: u16,
    pub app_host: String,
    pub db_port: u16,
    pub db_host: String,
    pub db_name: String,
}

impl Config {
    /// Resolve the five settings from the process environment, seeding a
    /// default settings file first if none exists. Nothing here is fatal:
    /// every missing or malformed value falls back to its default.
    pub fn load() -> Config {
        let env_path = Path::new(ENV_FILE);
        if !env_path.exists() {
            info!("{} does not exist. Creating default settings file.", ENV_FILE);
            if let Err(err) = write_default_env_file(env_path) {
                warn!("Could not create {}: {}", ENV_FILE, err);
            }
        }
        dotenvy::from_path(env_path).ok();

        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            app_port: get_port(&lookup, "APP_PORT", APP_PORT_DEFAULT),
            app_host: get_string(&lookup, "APP_HOST", APP_HOST_DEFAULT),
            db_port: get_port(&lookup, "DB_PORT", DB_PORT_DEFAULT),
            db_host: get_string(&lookup, "DB_HOST", DB_HOST_DEFAULT),
            db_name: get_string(&lookup, "DB_NAME", DB_NAME_DEFAULT),
        }
    }

    /// The store lives in the working directory, named after DB_NAME.
    pub fn database_path(&self) -> String {
        format!("./{}.db", self.db_name)
    }
}

fn get_string(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key) {
        Some(value) => value,
        None => {
            warn!(
                "Failed to find {}. Assuming {} is {}. To correct this, set {} in {} or in the process environment.",
                key, key, default, key, ENV_FILE
            );
            default.to_owned()
        }
    }
}

fn get_port(lookup: impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    match lookup(key) {
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                warn!("Invalid value for {}: {}. Assuming {} is {}.", key, value, key, default);
                default
            }
        },
        None => {
            warn!(
                "Failed to find {}. Assuming {} is {}. To correct this, set {} in {} or in the process environment.",
                key, key, default, key, ENV_FILE
            );
            default
        }
    }
}

fn write_default_env_file(path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "APP_PORT={}", APP_PORT_DEFAULT)?;
    writeln!(file, "APP_HOST={}", APP_HOST_DEFAULT)?;
    writeln!(file, "DB_PORT={}", DB_PORT_DEFAULT)?;
    writeln!(file, "DB_HOST={}", DB_HOST_DEFAULT)?;
    writeln!(file, "DB_NAME={}", DB_NAME_DEFAULT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_resolves_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.app_port, 3000);
        assert_eq!(config.app_host, "localhost");
        assert_eq!(config.db_port, 27017);
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_name, "mySimpleBlog");
    }

    #[test]
    fn set_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_PORT", "8080"),
            ("APP_HOST", "0.0.0.0"),
            ("DB_NAME", "weblog"),
        ]));
        assert_eq!(config.app_port, 8080);
        assert_eq!(config.app_host, "0.0.0.0");
        assert_eq!(config.db_port, 27017);
        assert_eq!(config.db_name, "weblog");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("APP_PORT", "not-a-port")]));
        assert_eq!(config.app_port, 3000);
    }

    #[test]
    fn database_path_derives_from_name() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.database_path(), "./mySimpleBlog.db");
    }

    #[test]
    fn default_env_file_contains_all_five_keys() {
        let path = std::env::temp_dir().join(format!("logbook-env-{}", std::process::id()));
        write_default_env_file(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        for key in ["APP_PORT", "APP_HOST", "DB_PORT", "DB_HOST", "DB_NAME"] {
            assert!(contents.contains(key), "missing {}", key);
        }
        assert!(contents.contains("DB_NAME=mySimpleBlog"));
    }
}
