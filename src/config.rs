use std::io::ErrorKind;

use log::{info, warn};
use yaml_rust::{Yaml, YamlLoader};

use crate::catalog::CatalogMode;
use crate::error::ConfigError;
use crate::utils::read_file_as_str;

pub const CONFIG_PATH: &str = "config.yml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REDIS_HOST: &str = "redis";
const DEFAULT_REDIS_PORT: u16 = 6379;
const DEFAULT_COURSES: [&str; 5] = ["Math", "Physics", "Chemistry", "Biology", "History"];

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone)]
pub enum HitCounterBackend {
    Memory,
    Redis { host: String, port: u16 },
}

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub permissive_cors: bool,
    pub catalog_mode: CatalogMode,
    pub courses: Vec<String>,
    pub hit_counter: HitCounterBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            permissive_cors: false,
            catalog_mode: CatalogMode::Fixed,
            courses: DEFAULT_COURSES.iter().map(|course| course.to_string()).collect(),
            hit_counter: HitCounterBackend::Redis {
                host: DEFAULT_REDIS_HOST.to_string(),
                port: DEFAULT_REDIS_PORT,
            },
        }
    }
}

impl AppConfig {
    /// Loads `path` if it exists, falling back to defaults, then applies
    /// the `HOST`, `PORT` and `REDIS_HOST` environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with environment lookups going through `lookup`.
    pub fn load_with<F>(path: &str, lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String> {
        let config = match read_file_as_str(path) {
            Ok(buf) => Self::from_yaml_str(&buf)?,
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!("No {} found in the current directory, using defaults", path);
                AppConfig::default()
            }
            Err(e) => return Err(e),
        };
        config.with_env_overrides(lookup)
    }

    pub fn from_yaml_str(buf: &str) -> Result<Self, ConfigError> {
        let docs = YamlLoader::load_from_str(buf)?;
        let mut config = AppConfig::default();
        let root = match docs.first() {
            Some(root) => root,
            None => return Ok(config),
        };

        let server = &root["server"];
        if let Some(host) = str_field(&server["host"], "server.host")? {
            config.host = host;
        }
        if let Some(port) = int_field(&server["port"], "server.port")? {
            config.port = to_port(port, "server.port")?;
        }
        if let Some(permissive_cors) = bool_field(&server["permissive_cors"], "server.permissive_cors")? {
            config.permissive_cors = permissive_cors;
        }

        let catalog = &root["catalog"];
        if let Some(mode) = str_field(&catalog["mode"], "catalog.mode")? {
            config.catalog_mode = mode.parse()
                .map_err(|reason| ConfigError::Invalid { key: "catalog.mode", reason })?;
        }
        if let Some(courses) = str_list_field(&catalog["courses"], "catalog.courses")? {
            config.courses = courses;
        }

        let hit_counter = &root["hit_counter"];
        let backend = str_field(&hit_counter["backend"], "hit_counter.backend")?
            .unwrap_or_else(|| "redis".to_string());
        config.hit_counter = match backend.as_str() {
            "memory" => HitCounterBackend::Memory,
            "redis" => HitCounterBackend::Redis {
                host: str_field(&hit_counter["redis_host"], "hit_counter.redis_host")?
                    .unwrap_or_else(|| DEFAULT_REDIS_HOST.to_string()),
                port: match int_field(&hit_counter["redis_port"], "hit_counter.redis_port")? {
                    Some(port) => to_port(port, "hit_counter.redis_port")?,
                    None => DEFAULT_REDIS_PORT,
                },
            },
            other => return Err(ConfigError::Invalid {
                key: "hit_counter.backend",
                reason: format!("unknown backend `{}`, expected `memory` or `redis`", other),
            }),
        };

        Ok(config)
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String> {
        if let Some(host) = lookup("HOST") {
            info!("HOST set, binding to {}", host);
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::Invalid { key: "PORT", reason: e.to_string() })?;
        }
        if let Some(redis_host) = lookup("REDIS_HOST") {
            let port = match &self.hit_counter {
                HitCounterBackend::Redis { port, .. } => *port,
                HitCounterBackend::Memory => DEFAULT_REDIS_PORT,
            };
            info!("REDIS_HOST set, counting hits in redis at {}:{}", redis_host, port);
            self.hit_counter = HitCounterBackend::Redis { host: redis_host, port };
        }
        Ok(self)
    }
}

fn invalid(key: &'static str, expected: &str, found: &Yaml) -> ConfigError {
    ConfigError::Invalid { key, reason: format!("expected {}, found {:?}", expected, found) }
}

fn str_field(node: &Yaml, key: &'static str) -> Result<Option<String>, ConfigError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(value) => Ok(Some(value.clone())),
        other => Err(invalid(key, "a string", other)),
    }
}

fn int_field(node: &Yaml, key: &'static str) -> Result<Option<i64>, ConfigError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Integer(value) => Ok(Some(*value)),
        other => Err(invalid(key, "an integer", other)),
    }
}

fn bool_field(node: &Yaml, key: &'static str) -> Result<Option<bool>, ConfigError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Boolean(value) => Ok(Some(*value)),
        other => Err(invalid(key, "a boolean", other)),
    }
}

fn str_list_field(node: &Yaml, key: &'static str) -> Result<Option<Vec<String>>, ConfigError> {
    match node {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Array(items) => items.iter()
            .map(|item| match item {
                Yaml::String(value) => Ok(value.clone()),
                other => Err(invalid(key, "a list of strings", other)),
            })
            .collect::<Result<Vec<String>, ConfigError>>()
            .map(Some),
        other => Err(invalid(key, "a list of strings", other)),
    }
}

fn to_port(value: i64, key: &'static str) -> Result<u16, ConfigError> {
    u16::try_from(value).map_err(|_| ConfigError::Invalid {
        key,
        reason: format!("{} is not a valid port", value),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::from_yaml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.catalog_mode, CatalogMode::Fixed);
        assert_eq!(config.courses.len(), 5);
    }

    #[test]
    fn full_document_overrides_every_key() {
        let config = AppConfig::from_yaml_str(r#"
server:
  host: 127.0.0.1
  port: 8080
  permissive_cors: true
catalog:
  mode: dynamic
  courses: []
hit_counter:
  backend: redis
  redis_host: cache
  redis_port: 6380
"#).unwrap();

        assert_eq!(config, AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            permissive_cors: true,
            catalog_mode: CatalogMode::Dynamic,
            courses: Vec::new(),
            hit_counter: HitCounterBackend::Redis { host: "cache".to_string(), port: 6380 },
        });
    }

    #[test]
    fn redis_backend_defaults_host_and_port() {
        let config = AppConfig::from_yaml_str("hit_counter:\n  backend: redis\n").unwrap();
        assert_eq!(config.hit_counter, HitCounterBackend::Redis {
            host: "redis".to_string(),
            port: 6379,
        });
    }

    #[test]
    fn invalid_values_are_reported_with_their_key() {
        let cases = [
            ("server:\n  port: 70000\n", "server.port"),
            ("server:\n  port: abc\n", "server.port"),
            ("catalog:\n  mode: sometimes\n", "catalog.mode"),
            ("catalog:\n  courses: [Math, 101]\n", "catalog.courses"),
            ("hit_counter:\n  backend: memcached\n", "hit_counter.backend"),
        ];
        for (yaml, expected_key) in cases {
            match AppConfig::from_yaml_str(yaml) {
                Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, expected_key, "{}", yaml),
                other => panic!("expected invalid {} for {:?}, got {:?}", expected_key, yaml, other),
            }
        }
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("HOST", "localhost"),
            ("PORT", "9000"),
            ("REDIS_HOST", "redis.internal"),
        ]);
        let config = AppConfig::default()
            .with_env_overrides(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 9000);
        assert_eq!(config.hit_counter, HitCounterBackend::Redis {
            host: "redis.internal".to_string(),
            port: 6379,
        });
    }

    #[test]
    fn bad_port_in_env_is_rejected() {
        let result = AppConfig::default().with_env_overrides(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_with("does/not/exist.yml", |_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn hits_are_counted_in_redis_unless_memory_is_asked_for() {
        assert_eq!(AppConfig::default().hit_counter, HitCounterBackend::Redis {
            host: "redis".to_string(),
            port: 6379,
        });

        let shipped = AppConfig::load_with(CONFIG_PATH, |_| None).unwrap();
        assert_eq!(shipped.hit_counter, HitCounterBackend::Redis {
            host: "redis".to_string(),
            port: 6379,
        });

        let memory = AppConfig::from_yaml_str("hit_counter:\n  backend: memory\n").unwrap();
        assert_eq!(memory.hit_counter, HitCounterBackend::Memory);
    }
}
