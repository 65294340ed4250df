//! Runtime configuration for timesheet runs.
//!
//! The only configurable surface is the Workday base URL embedded into
//! generated task descriptions. It is read from the [`WORKDAY_URL_ENV`]
//! environment variable with a fixed production fallback.

use crate::constants::{DEFAULT_WORKDAY_URL, WORKDAY_URL_ENV};

/// Configuration injected into [`TimesheetService`](crate::service::TimesheetService).
///
/// # Examples
///
/// ```
/// use timesheet_tasks::config::TimesheetConfig;
///
/// let config = TimesheetConfig::default();
/// assert!(config.workday_url.starts_with("https://"));
/// ```
#[derive(Debug, Clone)]
pub struct TimesheetConfig {
    /// Base URL of the Workday instance the browser agent navigates to.
    pub workday_url: String,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            workday_url: DEFAULT_WORKDAY_URL.to_string(),
        }
    }
}

impl TimesheetConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Reads [`WORKDAY_URL_ENV`]; an unset or empty variable falls back to
    /// [`DEFAULT_WORKDAY_URL`](crate::constants::DEFAULT_WORKDAY_URL).
    pub fn from_env() -> Self {
        let workday_url = std::env::var(WORKDAY_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORKDAY_URL.to_string());

        Self { workday_url }
    }

    /// Overrides the Workday base URL.
    pub fn with_workday_url(mut self, url: impl Into<String>) -> Self {
        self.workday_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_url() {
        let config = TimesheetConfig::default();
        assert_eq!(config.workday_url, DEFAULT_WORKDAY_URL);
    }

    #[test]
    fn with_workday_url_overrides() {
        let config = TimesheetConfig::default().with_workday_url("https://wd5.example.com/home");
        assert_eq!(config.workday_url, "https://wd5.example.com/home");
    }
}
