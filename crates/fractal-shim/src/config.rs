use std::time::Duration;

use crate::logging::LoggingConfig;

/// Shim configuration.
///
/// Built in code by the host crate; there is no file, environment or CLI
/// surface.
///
/// ```rust
/// use std::time::Duration;
/// use fractal_shim::ShimConfig;
///
/// let config = ShimConfig::new()
///     .ready_timeout(Some(Duration::from_secs(30)))
///     .log_level(log::LevelFilter::Debug);
/// assert!(config.capture);
/// ```
#[derive(Debug, Clone)]
pub struct ShimConfig {
    /// Register touch listeners in the capture phase so they run before any
    /// listener on a descendant element.
    pub capture: bool,
    /// After this long without module readiness a warning is logged.
    /// `None` disables the watchdog. Startup is never cancelled either way.
    ///
    /// Only takes effect once a timer is supplied through
    /// [`Sequencer::with_delay`](crate::bootstrap::Sequencer::with_delay);
    /// [`Sequencer::new`](crate::bootstrap::Sequencer::new) installs none.
    pub ready_timeout: Option<Duration>,
    pub logging: LoggingConfig,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            capture: true,
            ready_timeout: Some(Duration::from_secs(10)),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn ready_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn log_level(mut self, level: log::LevelFilter) -> Self {
        self.logging.level = level;
        self
    }

    /// `env_logger` filter directives; ignored in the browser.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.env_filter = Some(filter.into());
        self
    }
}
