use std::time::Duration;

/// Longest simulated latency accepted from the environment.
const MAX_LATENCY_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub tracker_latency_ms: u64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            tracker_latency_ms: 2000,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

/// Parses a raw variable value, falling back to `default` when unset or blank.
fn parse_value<T: std::str::FromStr>(
    name: &str,
    raw: Option<&str>,
    default: T,
) -> anyhow::Result<T> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a valid number, got {:?}", name, value)),
        _ => Ok(default),
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T> {
    let raw = std::env::var(name).ok();
    parse_value(name, raw.as_deref(), default)
}

fn check_port(port: u16) -> anyhow::Result<u16> {
    if port == 0 {
        anyhow::bail!("PORT must be a valid number between 1-65535");
    }
    Ok(port)
}

fn check_latency(ms: u64) -> anyhow::Result<u64> {
    if ms > MAX_LATENCY_MS {
        anyhow::bail!("TRACKER_LATENCY_MS cannot exceed {}", MAX_LATENCY_MS);
    }
    Ok(ms)
}

fn check_positive<T: PartialEq + From<u8>>(name: &str, n: T) -> anyhow::Result<T> {
    if n == T::from(0) {
        anyhow::bail!("{} must be at least 1", name);
    }
    Ok(n)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            port: parse_var("PORT", defaults.port)
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))
                .and_then(check_port)?,
            tracker_latency_ms: parse_var("TRACKER_LATENCY_MS", defaults.tracker_latency_ms)
                .and_then(check_latency)?,
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            )
            .and_then(|n| check_positive("RATE_LIMIT_PER_SECOND", n))?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst)
                .and_then(|n| check_positive("RATE_LIMIT_BURST", n))?,
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Bind address: {}:{}", config.bind_addr, config.port);
        tracing::debug!("Tracker latency: {} ms", config.tracker_latency_ms);
        tracing::debug!(
            "Rate limit: {}/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }

    pub fn tracker_latency(&self) -> Duration {
        Duration::from_millis(self.tracker_latency_ms)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
