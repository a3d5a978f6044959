//! # Calendar Configuration
//!
//! Policy choices for the availability calendar, read from a YAML file.
//! Every field is optional; a missing file path yields the defaults.
//!
//! ```yaml
//! week_start: monday          # or sunday
//! checkout_day: blocked       # or available
//! backward_click: restart     # or swap
//! disable_out_of_month_days: true
//! min_booking_date: 2024-07-01
//! default_guests: 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use crate::domain::dates::WeekStart;

/// Whether a booking's `dateTo` day is unavailable to other guests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutDayPolicy {
    /// Every day from `dateFrom` through `dateTo` is blocked
    #[default]
    Blocked,
    /// A new stay may begin on the day an earlier one ends
    Available,
}

/// What a click on or before the check-in does while picking a check-out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackwardClickPolicy {
    /// The clicked day becomes the new check-in
    #[default]
    Restart,
    /// The clicked day becomes check-in and the old check-in becomes check-out
    Swap,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub week_start: WeekStart,
    pub checkout_day: CheckoutDayPolicy,
    pub backward_click: BackwardClickPolicy,
    pub disable_out_of_month_days: bool,
    /// Earliest bookable day, when later than today
    pub min_booking_date: Option<NaiveDate>,
    pub default_guests: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            checkout_day: CheckoutDayPolicy::Blocked,
            backward_click: BackwardClickPolicy::Restart,
            disable_out_of_month_days: true,
            min_booking_date: None,
            default_guests: 2,
        }
    }
}

impl CalendarConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded calendar config from {:?}", path);
        debug!("Calendar config: {:?}", config);
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Earliest selectable day given today's date
    pub fn booking_floor(&self, today: NaiveDate) -> NaiveDate {
        match self.min_booking_date {
            Some(min) if min > today => min,
            _ => today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.checkout_day, CheckoutDayPolicy::Blocked);
        assert_eq!(config.backward_click, BackwardClickPolicy::Restart);
        assert!(config.disable_out_of_month_days);
        assert_eq!(config.default_guests, 2);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = CalendarConfig::from_yaml("week_start: sunday\ncheckout_day: available\n").unwrap();
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.checkout_day, CheckoutDayPolicy::Available);
        assert_eq!(config.backward_click, BackwardClickPolicy::Restart);
        assert!(config.min_booking_date.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backward_click: swap").unwrap();
        writeln!(file, "min_booking_date: 2024-07-01").unwrap();

        let config = CalendarConfig::load(file.path()).unwrap();
        assert_eq!(config.backward_click, BackwardClickPolicy::Swap);
        assert_eq!(config.min_booking_date, NaiveDate::from_ymd_opt(2024, 7, 1));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(CalendarConfig::load(&missing), Err(ConfigError::Read { .. })));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "week_start: tuesday\n").unwrap();
        assert!(matches!(CalendarConfig::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CalendarConfig::load_or_default(None).unwrap(), CalendarConfig::default());
    }

    #[test]
    fn test_booking_floor() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

        let mut config = CalendarConfig::default();
        assert_eq!(config.booking_floor(today), today);

        config.min_booking_date = Some(later);
        assert_eq!(config.booking_floor(today), later);

        config.min_booking_date = Some(earlier);
        assert_eq!(config.booking_floor(today), today);
    }
}
