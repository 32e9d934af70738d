//! Simulation parameters loaded from a `name=value` file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized or malformed option: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of a tandem-queue run.
///
/// The file is a flat list of `name = value` lines with `#` comments, one
/// option per line. Unknown option names are rejected. Interarrival and
/// service times are all doubly truncated exponential with the shared
/// bounds `[a, b]` and their own means.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    pub mean_interarrival_time: f64,
    pub mean_service_time_1: f64,
    pub mean_service_time_2: f64,
    pub a: f64,
    pub b: f64,
    pub num_pkts: u64,
    pub seed: u64,
    pub q_limit: usize,
}

impl SimConfig {
    /// Loads and validates the configuration at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        text.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mean_interarrival_time", self.mean_interarrival_time),
            ("mean_service_time_1", self.mean_service_time_1),
            ("mean_service_time_2", self.mean_service_time_2),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        if !self.a.is_finite() || !self.b.is_finite() || self.a >= self.b {
            return Err(ConfigError::Invalid(format!(
                "truncation bounds must satisfy a < b, got a = {}, b = {}",
                self.a, self.b
            )));
        }
        if self.a < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "lower truncation bound must not be negative, got {}",
                self.a
            )));
        }
        if self.num_pkts == 0 {
            return Err(ConfigError::Invalid("num_pkts must be positive".into()));
        }
        if self.q_limit == 0 {
            return Err(ConfigError::Invalid("q_limit must be positive".into()));
        }
        Ok(())
    }
}

impl FromStr for SimConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean_interarrival_time = {}", self.mean_interarrival_time)?;
        writeln!(f, "mean_service_time_1 = {}", self.mean_service_time_1)?;
        writeln!(f, "mean_service_time_2 = {}", self.mean_service_time_2)?;
        writeln!(f, "a = {}", self.a)?;
        writeln!(f, "b = {}", self.b)?;
        writeln!(f, "num_pkts = {}", self.num_pkts)?;
        writeln!(f, "seed = {}", self.seed)?;
        write!(f, "q_limit = {}", self.q_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
# tandem queue parameters
mean_interarrival_time = 782.0
mean_service_time_1 = 600.0
mean_service_time_2 = 650.0
a = 64.0
b = 1500.0
num_pkts = 1000
seed = 42
q_limit = 100
";

    #[test]
    fn parses_a_key_value_file_with_comments() {
        let config: SimConfig = VALID.parse().unwrap();
        assert_eq!(config.mean_interarrival_time, 782.0);
        assert_eq!(config.mean_service_time_1, 600.0);
        assert_eq!(config.a, 64.0);
        assert_eq!(config.b, 1500.0);
        assert_eq!(config.num_pkts, 1000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.q_limit, 100);
    }

    #[test]
    fn accepts_integer_literals_for_means_and_bounds() {
        let text = VALID.replace("782.0", "782").replace("64.0", "64");
        let config: SimConfig = text.parse().unwrap();
        assert_eq!(config.mean_interarrival_time, 782.0);
        assert_eq!(config.a, 64.0);
    }

    #[test]
    fn rejects_unrecognized_options() {
        let text = format!("{}window_size = 3\n", VALID);
        assert!(matches!(
            text.parse::<SimConfig>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_options() {
        let text = VALID.replace("seed = 42\n", "");
        assert!(matches!(
            text.parse::<SimConfig>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        let inverted = VALID.replace("b = 1500.0", "b = 32.0");
        assert!(matches!(
            inverted.parse::<SimConfig>(),
            Err(ConfigError::Invalid(_))
        ));

        let zero_mean = VALID.replace("mean_service_time_1 = 600.0", "mean_service_time_1 = 0.0");
        assert!(matches!(
            zero_mean.parse::<SimConfig>(),
            Err(ConfigError::Invalid(_))
        ));

        let no_packets = VALID.replace("num_pkts = 1000", "num_pkts = 0");
        assert!(matches!(
            no_packets.parse::<SimConfig>(),
            Err(ConfigError::Invalid(_))
        ));

        let no_room = VALID.replace("q_limit = 100", "q_limit = 0");
        assert!(matches!(
            no_room.parse::<SimConfig>(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = SimConfig::from_path(Path::new("/nonexistent/input.txt"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn display_echoes_every_option() {
        let config: SimConfig = VALID.parse().unwrap();
        let echo = config.to_string();
        assert!(echo.contains("mean_interarrival_time = 782"));
        assert!(echo.contains("num_pkts = 1000"));
        assert!(echo.contains("q_limit = 100"));
        assert_eq!(echo.lines().count(), 8);
    }
}
