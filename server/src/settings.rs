use std::net::IpAddr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::model::{seed_users, User, DEFAULT_CURRENT_USER};

/// Prefix of the environment variables overriding file settings, e.g. `USERGRAPH__API__PORT`.
pub const ENV_PREFIX: &str = "USERGRAPH";

/// Machine local overrides, not checked in.
pub const LOCAL_CONFIG_FILE: &str = "config/local.yaml";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Port(pub u16);

impl Default for Port {
    fn default() -> Self { Port(8000) }
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_path() -> String { "/graphql".to_string() }

fn default_as_true() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub port: Port,
    /// Mount point of the GraphQL endpoint
    #[serde(default = "default_path")]
    pub path: String,
    /// Serve the playground on `GET` requests without a query
    #[serde(default = "default_as_true")]
    pub playground: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Port::default(),
            path: default_path(),
            playground: true,
        }
    }
}

impl ApiSettings {
    /// Address clients can reach the endpoint at.
    pub fn endpoint_url(&self) -> String {
        let host = match self.host.parse::<IpAddr>() {
            Ok(ip) if ip.is_unspecified() => "localhost",
            _ => self.host.as_str(),
        };
        format!("http://{}:{}{}", host, self.port.0, self.path)
    }
}

fn default_max_age() -> usize { 3600 }

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// Origins allowed to call the api, any origin when empty
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Preflight cache duration in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogSettings {
    #[serde(default)]
    pub json: bool,
}

fn default_me() -> String { DEFAULT_CURRENT_USER.to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default = "seed_users")]
    pub users: Vec<User>,
    /// Id of the user every request is made on behalf of
    #[serde(default = "default_me")]
    pub me: String,
    #[serde(default)]
    pub config_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            cors: CorsSettings::default(),
            log: LogSettings::default(),
            users: seed_users(),
            me: default_me(),
            config_file: String::new(),
        }
    }
}

impl Settings {
    /// Loads `config/{env}.yaml`, then `config/local.yaml`, then `USERGRAPH__*` variables.
    pub fn new(env: &str) -> Result<Self, ConfigError> { Self::load(&format!("config/{}.yaml", env)) }

    pub fn load(config_file: &str) -> Result<Self, ConfigError> { Self::load_layers(config_file, LOCAL_CONFIG_FILE) }

    fn load_layers(config_file: &str, local_file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(config_file).required(false))
            .add_source(File::with_name(local_file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override("config_file", config_file)?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempdir::TempDir;

    use crate::model::{seed_users, User};
    use crate::settings::{ApiSettings, Port, Settings};

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.port, Port(8000));
        assert_eq!(settings.api.path, "/graphql");
        assert!(settings.api.playground);
        assert!(settings.cors.allowed_origins.is_empty());
        assert_eq!(settings.users, seed_users());
        assert_eq!(settings.me, "1");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new("usergraph_settings").unwrap();
        let path = dir.path().join("absent.yaml");
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api.path, "/graphql");
        assert_eq!(settings.users.len(), 2);
        assert_eq!(settings.config_file, path.to_str().unwrap());
    }

    #[test]
    fn test_deserialize_yaml() {
        let dir = TempDir::new("usergraph_settings").unwrap();
        let path = dir.path().join("test.yaml");
        let mut file = File::create(&path).unwrap();
        file.write_all(
            br#"
api:
  port: 9001
  path: /api/graphql
  playground: false
cors:
  allowed_origins: ["http://localhost:3000"]
users:
  - id: "7"
    username: Ada
me: "7"
"#,
        )
        .unwrap();
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api.port, Port(9001));
        assert_eq!(settings.api.path, "/api/graphql");
        assert_eq!(settings.api.host, "0.0.0.0");
        assert!(!settings.api.playground);
        assert_eq!(settings.cors.allowed_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(settings.cors.max_age, 3600);
        assert_eq!(settings.users, vec![User::new("7", "Ada")]);
        assert_eq!(settings.me, "7");
    }

    fn write_yaml(path: &Path, contents: &str) {
        let mut file = File::create(path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_local_file_overrides_env_file() {
        let dir = TempDir::new("usergraph_settings").unwrap();
        let env_file = dir.path().join("staging.yaml");
        let local_file = dir.path().join("local.yaml");
        write_yaml(&env_file, "api:\n  port: 9001\n  path: /staging\nme: \"2\"\n");
        write_yaml(&local_file, "api:\n  path: /local\nme: \"1\"\n");
        let settings = Settings::load_layers(env_file.to_str().unwrap(), local_file.to_str().unwrap()).unwrap();
        assert_eq!(settings.api.path, "/local");
        assert_eq!(settings.me, "1");
        assert_eq!(settings.api.port, Port(9001));
        assert_eq!(settings.config_file, env_file.to_str().unwrap());
    }

    #[test]
    fn test_env_overrides_files() {
        let dir = TempDir::new("usergraph_settings").unwrap();
        let env_file = dir.path().join("staging.yaml");
        let local_file = dir.path().join("local.yaml");
        write_yaml(&env_file, "log:\n  json: false\n");
        write_yaml(&local_file, "log:\n  json: false\n");
        std::env::set_var("USERGRAPH__LOG__JSON", "true");
        let settings = Settings::load_layers(env_file.to_str().unwrap(), local_file.to_str().unwrap());
        std::env::remove_var("USERGRAPH__LOG__JSON");
        assert!(settings.unwrap().log.json);
    }

    #[test]
    fn test_endpoint_url() {
        let mut api = ApiSettings::default();
        assert_eq!(api.endpoint_url(), "http://localhost:8000/graphql");
        api.host = "127.0.0.1".to_string();
        api.port = Port(9000);
        assert_eq!(api.endpoint_url(), "http://127.0.0.1:9000/graphql");
    }
}
