use std::str::FromStr;

pub const HOST_VAR: &str = "REAUTH_HOST";
pub const PORT_VAR: &str = "REAUTH_PORT";
pub const WORKERS_VAR: &str = "REAUTH_WORKERS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse::<u16, _>(&lookup, PORT_VAR)?.unwrap_or(8080);
        let workers = match parse::<usize, _>(&lookup, WORKERS_VAR)? {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    name: WORKERS_VAR,
                    value: "0".to_string(),
                })
            }
            Some(workers) => workers,
            None => num_cpus::get() * 2,
        };

        Ok(Self {
            host,
            port,
            workers,
        })
    }
}

fn parse<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(None),
    }
}
