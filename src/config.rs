use std::{env, fmt, net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_DELAY_MIN_MS: u64 = 100;
const DEFAULT_DELAY_MAX_MS: u64 = 500;
const DEFAULT_ERROR_RATE: f64 = 0.05;

/// Which route set the server registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sse,
    Stream,
}

impl Mode {
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Sse => "/sse",
            Self::Stream => "/message",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sse" => Ok(Self::Sse),
            "stream" => Ok(Self::Stream),
            _ => Err(ConfigError::InvalidMode),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sse => f.write_str("sse"),
            Self::Stream => f.write_str("stream"),
        }
    }
}

/// Fixed timing and error-injection parameters, immutable after startup.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub delay_min: Duration,
    pub delay_max: Duration,
    pub error_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_min: Duration::from_millis(DEFAULT_DELAY_MIN_MS),
            delay_max: Duration::from_millis(DEFAULT_DELAY_MAX_MS),
            error_rate: DEFAULT_ERROR_RATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub mode: Mode,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_MODE must be one of: sse, stream")]
    InvalidMode,
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("SIM_DELAY_MIN_MS and SIM_DELAY_MAX_MS must be whole milliseconds")]
    InvalidDelay,
    #[error("SIM_DELAY_MIN_MS must not exceed SIM_DELAY_MAX_MS")]
    InvertedDelayRange,
    #[error("SIM_ERROR_RATE must be a number between 0 and 1")]
    InvalidErrorRate,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = env::var("BIND_PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);
        let mode = env::var("SERVER_MODE")
            .ok()
            .map(|value| value.parse::<Mode>())
            .transpose()?
            .unwrap_or(Mode::Sse);

        let delay_min = parse_millis("SIM_DELAY_MIN_MS")?.unwrap_or(DEFAULT_DELAY_MIN_MS);
        let delay_max = parse_millis("SIM_DELAY_MAX_MS")?.unwrap_or(DEFAULT_DELAY_MAX_MS);
        if delay_min > delay_max {
            return Err(ConfigError::InvertedDelayRange);
        }

        let error_rate = env::var("SIM_ERROR_RATE")
            .ok()
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidErrorRate)
            })
            .transpose()?
            .unwrap_or(DEFAULT_ERROR_RATE);
        if !(0.0..=1.0).contains(&error_rate) {
            return Err(ConfigError::InvalidErrorRate);
        }

        let config = Self {
            bind_addr,
            bind_port,
            mode,
            simulation: SimulationConfig {
                delay_min: Duration::from_millis(delay_min),
                delay_max: Duration::from_millis(delay_max),
                error_rate,
            },
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

fn parse_millis(name: &str) -> Result<Option<u64>, ConfigError> {
    env::var(name)
        .ok()
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay)
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    // These tests share process-wide env vars, so they run serialized.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_env() {
        for name in [
            "BIND_ADDR",
            "BIND_PORT",
            "SERVER_MODE",
            "SIM_DELAY_MIN_MS",
            "SIM_DELAY_MAX_MS",
            "SIM_ERROR_RATE",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn parse_defaults() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.mode, Mode::Sse);
        assert_eq!(config.simulation.delay_min, Duration::from_millis(100));
        assert_eq!(config.simulation.delay_max, Duration::from_millis(500));
        assert_eq!(config.simulation.error_rate, 0.05);
    }

    #[test]
    fn stream_mode_parses() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();
        env::set_var("SERVER_MODE", "stream");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.mode, Mode::Stream);
        assert_eq!(config.mode.endpoint_path(), "/message");
    }

    #[test]
    fn invalid_mode_fails() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();
        env::set_var("SERVER_MODE", "websocket");

        let err = Config::from_env().expect_err("expected invalid mode error");
        assert!(matches!(err, ConfigError::InvalidMode));
    }

    #[test]
    fn inverted_delay_range_fails() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();
        env::set_var("SIM_DELAY_MIN_MS", "600");
        env::set_var("SIM_DELAY_MAX_MS", "500");

        let err = Config::from_env().expect_err("expected inverted range error");
        assert!(matches!(err, ConfigError::InvertedDelayRange));
    }

    #[test]
    fn error_rate_out_of_range_fails() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();
        env::set_var("SIM_ERROR_RATE", "1.5");

        let err = Config::from_env().expect_err("expected invalid rate error");
        assert!(matches!(err, ConfigError::InvalidErrorRate));
    }

    #[test]
    fn error_rate_bounds_are_inclusive() {
        let _guard = env_lock().lock().expect("env lock");

        for rate in ["0", "1"] {
            clear_env();
            env::set_var("SIM_ERROR_RATE", rate);
            Config::from_env().expect("boundary rate should parse");
        }
    }

    #[test]
    fn invalid_bind_addr_fails() {
        let _guard = env_lock().lock().expect("env lock");
        clear_env();
        env::set_var("BIND_ADDR", "not-an-address");

        let err = Config::from_env().expect_err("expected invalid socket error");
        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}
