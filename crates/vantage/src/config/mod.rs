use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub simulators: SimulatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            simulators: SimulatorConfig::load()?,
        })
    }
}

/// Timings and odds for the two simulated services plus UI pacing.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Artificial "AI thinking" latency before an estimate resolves.
    pub estimator_delay: Duration,
    /// Simulated network plus USSD interaction time for a charge.
    pub payment_delay: Duration,
    /// Probability in [0, 1] that a charge resolves with a transaction id.
    pub payment_success_rate: f64,
    /// Pause between recording a swipe decision and presenting the next card.
    pub swipe_settle: Duration,
}

impl SimulatorConfig {
    fn load() -> Result<Self, ConfigError> {
        let estimator_delay = duration_var("VANTAGE_ESTIMATOR_DELAY_MS", 1_500)?;
        let payment_delay = duration_var("VANTAGE_PAYMENT_DELAY_MS", 3_000)?;
        let swipe_settle = duration_var("VANTAGE_SWIPE_SETTLE_MS", 200)?;

        let raw_rate =
            env::var("VANTAGE_PAYMENT_SUCCESS_RATE").unwrap_or_else(|_| "0.9".to_string());
        let payment_success_rate = raw_rate
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| (0.0..=1.0).contains(rate))
            .ok_or(ConfigError::InvalidRate { value: raw_rate })?;

        Ok(Self {
            estimator_delay,
            payment_delay,
            payment_success_rate,
            swipe_settle,
        })
    }

    /// Zero out every artificial delay, keeping the configured odds.
    pub fn instant(mut self) -> Self {
        self.estimator_delay = Duration::ZERO;
        self.payment_delay = Duration::ZERO;
        self.swipe_settle = Duration::ZERO;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            estimator_delay: Duration::from_millis(1_500),
            payment_delay: Duration::from_millis(3_000),
            payment_success_rate: 0.9,
            swipe_settle: Duration::from_millis(200),
        }
    }
}

fn duration_var(var: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDuration { var }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDuration { var: &'static str },
    InvalidRate { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDuration { var } => {
                write!(f, "{var} must be a whole number of milliseconds")
            }
            ConfigError::InvalidRate { value } => {
                write!(
                    f,
                    "VANTAGE_PAYMENT_SUCCESS_RATE must be a number in [0, 1], got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
