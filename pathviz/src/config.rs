//! Run configuration for the visualizer.
//!
//! Defaults reproduce the classic layout: a 20×50 grid, start in the top-left
//! corner, finish in the bottom-right, 10% obstacles and 50 ms per frame.
//! Any field can be overridden with `--key=value` arguments.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Pos;

/// Lowest obstacle density accepted; lower values are clamped.
pub const MIN_DENSITY: f64 = 0.01;
/// Highest obstacle density accepted; higher values are clamped.
pub const MAX_DENSITY: f64 = 0.30;
/// Largest grid accepted, in cells.
pub const MAX_CELLS: i64 = 1_000_000;
/// Longest frame delay accepted.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Which frontier ordering to search with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("Dijkstra"),
            Self::AStar => f.write_str("A*"),
        }
    }
}

/// Visualizer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    /// Probability that any non-role cell is a wall.
    pub density: f64,
    /// Delay between animation frames.
    pub delay_ms: u64,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            density: 0.1,
            delay_ms: 50,
            seed: None,
            algorithm: Algorithm::Dijkstra,
        }
    }
}

impl Config {
    /// Build a config from `--key=value` arguments (program name excluded).
    ///
    /// Recognized keys: `rows`, `cols`, `density`, `delay`, `seed`, `algo`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) else {
                return Err(ConfigError::Malformed(arg.to_string()));
            };
            match key {
                "rows" => cfg.rows = parse_positive(key, value)?,
                "cols" => cfg.cols = parse_positive(key, value)?,
                "density" => cfg.set_density(parse(key, value)?),
                "delay" => match parse(key, value)? {
                    d if d <= MAX_DELAY_MS => cfg.delay_ms = d,
                    _ => return Err(invalid(key, value)),
                },
                "seed" => cfg.seed = Some(parse(key, value)?),
                "algo" => cfg.algorithm = parse(key, value)?,
                _ => return Err(ConfigError::UnknownKey(key.to_string())),
            }
        }
        let cells = i64::from(cfg.rows) * i64::from(cfg.cols);
        if !(2..=MAX_CELLS).contains(&cells) {
            return Err(ConfigError::InvalidValue {
                key: "rows".to_string(),
                value: format!(
                    "{}x{} grid must hold between 2 and {MAX_CELLS} cells",
                    cfg.rows, cfg.cols
                ),
            });
        }
        Ok(cfg)
    }

    /// Set the obstacle density, clamped to `[MIN_DENSITY, MAX_DENSITY]`.
    pub fn set_density(&mut self, density: f64) {
        self.density = if density.is_nan() {
            MIN_DENSITY
        } else {
            density.clamp(MIN_DENSITY, MAX_DENSITY)
        };
    }

    /// Top-left corner.
    pub fn start(&self) -> Pos {
        Pos::ZERO
    }

    /// Bottom-right corner.
    pub fn finish(&self) -> Pos {
        Pos::new(self.rows - 1, self.cols - 1)
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_positive(key: &str, value: &str) -> Result<i32, ConfigError> {
    match parse::<i32>(key, value)? {
        n if n > 0 => Ok(n),
        _ => Err(invalid(key, value)),
    }
}

/// Errors from [`Config::from_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Argument is not of the form `--key=value`.
    Malformed(String),
    UnknownKey(String),
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(a) => write!(f, "expected --key=value, got \u{201c}{a}\u{201d}"),
            Self::UnknownKey(k) => write!(f, "unknown option --{k}"),
            Self::InvalidValue { key, value } => write!(f, "invalid value for --{key}: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}
