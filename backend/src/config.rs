//! Server and proxy configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//! data_dir = "data"
//! allowed_origins = ["https://www.yuvasaathi.in"]
//! display_type_seed = 42
//! # display_type = "pieChart"
//!
//! [proxy]
//! backend_url = "https://yuvasaathi-backend-v2.vercel.app"
//! allowed_origin = "https://www.yuvasaathi.in"
//! port = 3001
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Layer;
use crate::services::{DisplayType, DisplayTypeSource};
use crate::store::{DataPaths, DEFAULT_SKILLS_FILE};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MAP_SERVER_CONFIG";

pub const DEFAULT_BACKEND_URL: &str = "https://yuvasaathi-backend-v2.vercel.app";
pub const DEFAULT_PROXY_ORIGIN: &str = "https://www.yuvasaathi.in";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    5000
}

fn default_proxy_port() -> u16 {
    3001
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://yuvasaathi-frontend.vercel.app".to_string(),
        "http://localhost:3000".to_string(),
        "https://www.yuvasaathi.in".to_string(),
    ]
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_proxy_origin() -> String {
    DEFAULT_PROXY_ORIGIN.to_string()
}

/// Map API server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub districts_file: Option<String>,
    #[serde(default)]
    pub blocks_file: Option<String>,
    #[serde(default)]
    pub villages_file: Option<String>,
    #[serde(default)]
    pub skills_file: Option<String>,
    /// Exact origins allowed by CORS. `*` is rejected.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Seed for `displayType`; random per response when unset.
    #[serde(default)]
    pub display_type_seed: Option<u64>,
    /// Chart every district with this type. Takes precedence over the seed.
    #[serde(default)]
    pub display_type: Option<DisplayType>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_server_port(),
            data_dir: default_data_dir(),
            districts_file: None,
            blocks_file: None,
            villages_file: None,
            skills_file: None,
            allowed_origins: default_allowed_origins(),
            display_type_seed: None,
            display_type: None,
        }
    }
}

impl ServerConfig {
    /// Resolved locations of the four data files.
    pub fn data_paths(&self) -> DataPaths {
        let file = |name: &Option<String>, fallback: &str| {
            self.data_dir.join(name.as_deref().unwrap_or(fallback))
        };
        DataPaths {
            districts: file(&self.districts_file, Layer::District.default_file_name()),
            blocks: file(&self.blocks_file, Layer::Block.default_file_name()),
            villages: file(&self.villages_file, Layer::Village.default_file_name()),
            skills: file(&self.skills_file, DEFAULT_SKILLS_FILE),
        }
    }

    pub fn display_type_source(&self) -> DisplayTypeSource {
        match (self.display_type, self.display_type_seed) {
            (Some(display), _) => DisplayTypeSource::Fixed(display),
            (None, Some(seed)) => DisplayTypeSource::Seeded(seed),
            (None, None) => DisplayTypeSource::Random,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply `HOST`, `PORT`, `DATA_DIR`, `ALLOWED_ORIGINS`,
    /// `DISPLAY_TYPE_SEED` and `DISPLAY_TYPE` from `vars`, then validate.
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(host) = vars.get("HOST") {
            self.host = host.clone();
        }
        if let Some(port) = vars.get("PORT") {
            self.port = parse_port("PORT", port)?;
        }
        if let Some(dir) = vars.get("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(origins) = vars.get("ALLOWED_ORIGINS") {
            self.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(seed) = vars.get("DISPLAY_TYPE_SEED") {
            let seed = seed.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DISPLAY_TYPE_SEED",
                expected: "an unsigned integer",
                value: seed.clone(),
            })?;
            self.display_type_seed = Some(seed);
        }
        if let Some(display) = vars.get("DISPLAY_TYPE") {
            let display = display.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DISPLAY_TYPE",
                expected: "pieChart or barGraph",
                value: display.clone(),
            })?;
            self.display_type = Some(display);
        }
        self.validate()
    }

    /// Credentialed CORS cannot be combined with a wildcard origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(origin) = self.allowed_origins.iter().find(|o| o.trim() == "*") {
            return Err(ConfigError::InvalidValue {
                key: "allowed_origins",
                expected: "exact origins (no wildcard)",
                value: origin.clone(),
            });
        }
        Ok(())
    }

    /// Defaults, overlaid with the `[server]` section of the located config
    /// file, overlaid with `vars`.
    pub fn resolve(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::load(vars)?.server;
        config.apply_env(vars)?;
        Ok(config)
    }

    /// [`ServerConfig::resolve`] against the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(&process_env())
    }
}

/// CORS proxy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_proxy_port")]
    pub port: u16,
    /// Origin requests are forwarded to, without a trailing slash.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// The single origin advertised in `Access-Control-Allow-Origin`.
    #[serde(default = "default_proxy_origin")]
    pub allowed_origin: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_proxy_port(),
            backend_url: default_backend_url(),
            allowed_origin: default_proxy_origin(),
        }
    }
}

impl ProxyConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply `PROXY_HOST`, `PROXY_PORT`, `PROXY_BACKEND_URL` and
    /// `PROXY_ALLOWED_ORIGIN` from `vars`.
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(host) = vars.get("PROXY_HOST") {
            self.host = host.clone();
        }
        if let Some(port) = vars.get("PROXY_PORT") {
            self.port = parse_port("PROXY_PORT", port)?;
        }
        if let Some(url) = vars.get("PROXY_BACKEND_URL") {
            self.backend_url = url.clone();
        }
        if let Some(origin) = vars.get("PROXY_ALLOWED_ORIGIN") {
            self.allowed_origin = origin.clone();
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.backend_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "backend_url",
                expected: "an http(s) URL",
                value: url.to_string(),
            });
        }
        Ok(())
    }

    /// Backend URL with any trailing slash removed, ready for path joining.
    pub fn backend_origin(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    /// Defaults, overlaid with the `[proxy]` section of the located config
    /// file, overlaid with `vars`.
    pub fn resolve(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::load(vars)?.proxy;
        config.apply_env(vars)?;
        Ok(config)
    }

    /// [`ProxyConfig::resolve`] against the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(&process_env())
    }
}

fn process_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        expected: "a valid port number",
        value: value.to_string(),
    })
}

/// Contents of a config file. Both sections are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Locate a config file: the path in `MAP_SERVER_CONFIG` if set, otherwise
    /// the first `server.toml` found in the current directory, `backend/` or
    /// the parent directory.
    pub fn locate(vars: &HashMap<String, String>) -> Option<PathBuf> {
        if let Some(path) = vars.get(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        [
            "server.toml",
            "backend/server.toml",
            "../server.toml",
        ]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
    }

    /// The located file, or defaults when there is none. Environment
    /// overrides are applied per section by each binary, so one binary's
    /// settings never stop the other from starting.
    pub fn load(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        match Self::locate(vars) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.server.allowed_origins.len(), 3);
        assert!(!config.server.allowed_origins.iter().any(|o| o == "*"));
        assert_eq!(config.server.display_type_source(), DisplayTypeSource::Random);
        assert_eq!(config.proxy.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.proxy.allowed_origin, "https://www.yuvasaathi.in");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
[server]
port = 8081
data_dir = "/srv/bihar"
skills_file = "skills.csv"
display_type_seed = 9
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.display_type_source(), DisplayTypeSource::Seeded(9));

        let paths = config.server.data_paths();
        assert_eq!(paths.skills, PathBuf::from("/srv/bihar/skills.csv"));
        assert_eq!(paths.blocks, PathBuf::from("/srv/bihar/bihar_blocks.geojson"));
        assert_eq!(config.proxy, ProxyConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut server = ServerConfig::default();
        server
            .apply_env(&vars(&[
                ("PORT", "9000"),
                ("DATA_DIR", "fixtures"),
                ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
                ("DISPLAY_TYPE_SEED", "3"),
            ]))
            .unwrap();
        assert_eq!(server.port, 9000);
        assert_eq!(server.data_dir, PathBuf::from("fixtures"));
        assert_eq!(server.allowed_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(server.display_type_seed, Some(3));
    }

    #[test]
    fn test_wildcard_origin_rejected() {
        let mut server = ServerConfig::default();
        let err = server
            .apply_env(&vars(&[("ALLOWED_ORIGINS", "https://a.example, *")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "allowed_origins", .. }));

        let config: AppConfig = toml::from_str("[server]\nallowed_origins = [\"*\"]\n").unwrap();
        assert!(config.server.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_fixed_display_type() {
        let toml = "[server]\ndisplay_type = \"barGraph\"\ndisplay_type_seed = 4\n";
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.server.display_type_source(),
            DisplayTypeSource::Fixed(DisplayType::BarGraph)
        );

        let mut server = ServerConfig::default();
        server.apply_env(&vars(&[("DISPLAY_TYPE", "pieChart")])).unwrap();
        assert_eq!(
            server.display_type_source(),
            DisplayTypeSource::Fixed(DisplayType::PieChart)
        );

        let err = server.apply_env(&vars(&[("DISPLAY_TYPE", "donut")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DISPLAY_TYPE", .. }));
        assert!(toml::from_str::<AppConfig>("[server]\ndisplay_type = \"donut\"\n").is_err());
    }

    #[test]
    fn test_invalid_env_values() {
        let mut server = ServerConfig::default();
        let err = server.apply_env(&vars(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = server
            .apply_env(&vars(&[("DISPLAY_TYPE_SEED", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DISPLAY_TYPE_SEED", .. }));

        let mut proxy = ProxyConfig::default();
        assert!(proxy
            .apply_env(&vars(&[("PROXY_BACKEND_URL", "ftp://nope")]))
            .is_err());
    }

    #[test]
    fn test_backend_origin_trims_slash() {
        let proxy = ProxyConfig {
            backend_url: "https://api.example/".into(),
            ..Default::default()
        };
        assert_eq!(proxy.backend_origin(), "https://api.example");
    }

    #[test]
    fn test_resolve_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[proxy]\nport = 4000\n").unwrap();

        let env = vars(&[
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
            ("PROXY_HOST", "127.0.0.1"),
        ]);
        let proxy = ProxyConfig::resolve(&env).unwrap();
        assert_eq!(proxy.port, 4000);
        assert_eq!(proxy.bind_address(), "127.0.0.1:4000");
        assert_eq!(ServerConfig::resolve(&env).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_sections_resolve_independently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        fs::write(&path, "[server]\nport = 5050\n").unwrap();
        let config_path = path.to_str().unwrap();

        let bad_proxy = vars(&[
            (CONFIG_PATH_ENV, config_path),
            ("PROXY_BACKEND_URL", "ftp://nope"),
        ]);
        assert_eq!(ServerConfig::resolve(&bad_proxy).unwrap().port, 5050);
        assert!(ProxyConfig::resolve(&bad_proxy).is_err());

        let bad_server = vars(&[(CONFIG_PATH_ENV, config_path), ("ALLOWED_ORIGINS", "*")]);
        assert!(ServerConfig::resolve(&bad_server).is_err());
        assert_eq!(ProxyConfig::resolve(&bad_server).unwrap(), ProxyConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = AppConfig::load(&vars(&[(CONFIG_PATH_ENV, "/definitely/not/here.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
