//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `DownloadPreferences`, the plain settings a host passes to the planner.
//!
//! Preferences can be built from string key/value pairs as they come out of a
//! host's settings store:
//! ```
//! use box_cover::preferences::DownloadPreferences;
//! use box_cover::strategy::StrategyKind;
//!
//! let prefs = DownloadPreferences::from_entries(vec![
//!     ("max_areas", "2"),
//!     ("strategy", "SimpleStrategy"),
//!     ("wait_time", "250"),
//! ])
//! .unwrap();
//!
//! assert_eq!(prefs.max_areas, 2);
//! assert_eq!(prefs.strategy, StrategyKind::Simple);
//! assert_eq!(prefs.wait_time.whole_milliseconds(), 250);
//! ```

use crate::error::{CoverageError, Result};
use crate::strategy::StrategyKind;
use core::str::FromStr;
use time::Duration;
use tracing::debug;

/// Settings for continuous downloading.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadPreferences {
    /// Whether downloading is active when the host starts.
    pub active_default: bool,
    /// Number of concurrent fetches the host may run.
    pub max_threads: usize,
    /// Maximum number of boxes requested for each change of the viewport.
    pub max_areas: usize,
    /// How long the viewport must be still before planning.
    pub wait_time: Duration,
    /// Fraction of the viewport's width and height added on every side.
    pub extra_download: f64,
    /// Largest area, in square input units, that is planned at all.
    pub max_area: f64,
    /// Which strategy picks the boxes.
    pub strategy: StrategyKind,
    /// Whether the host should suppress its progress display.
    pub quiet_download: bool,
    /// Snap requested boxes to multiples of this many ticks; below 2 disables.
    pub grid: i64,
}

impl Default for DownloadPreferences {
    fn default() -> Self {
        DownloadPreferences {
            active_default: true,
            max_threads: 2,
            max_areas: 4,
            wait_time: Duration::milliseconds(500),
            extra_download: 0.1,
            max_area: 0.25,
            strategy: StrategyKind::default(),
            quiet_download: false,
            grid: 0,
        }
    }
}

impl DownloadPreferences {
    /// Defaults overridden by `entries`, then validated. Unknown keys are
    /// skipped.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut prefs = DownloadPreferences::default();
        for (key, value) in entries {
            let value = value.trim();
            match key {
                "active_default" => prefs.active_default = parse("active_default", value)?,
                "max_threads" => prefs.max_threads = parse("max_threads", value)?,
                "max_areas" => prefs.max_areas = parse("max_areas", value)?,
                "wait_time" => {
                    prefs.wait_time = Duration::milliseconds(parse("wait_time", value)?)
                }
                "extra_download" => prefs.extra_download = parse("extra_download", value)?,
                "max_area" => prefs.max_area = parse("max_area", value)?,
                "strategy" => prefs.strategy = value.parse()?,
                "quiet_download" => prefs.quiet_download = parse("quiet_download", value)?,
                "grid" => prefs.grid = parse("grid", value)?,
                _ => debug!("ignoring unknown preference {}", key),
            }
        }
        prefs.validate()?;
        Ok(prefs)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_threads == 0 {
            return Err(invalid("max_threads", "must be at least 1"));
        }
        if self.max_areas == 0 {
            return Err(invalid("max_areas", "must be at least 1"));
        }
        if self.wait_time.is_negative() {
            return Err(invalid("wait_time", "must not be negative"));
        }
        if !self.extra_download.is_finite() || self.extra_download < 0.0 {
            return Err(invalid("extra_download", "must be a non-negative number"));
        }
        if !self.max_area.is_finite() || self.max_area <= 0.0 {
            return Err(invalid("max_area", "must be a positive number"));
        }
        if self.grid < 0 {
            return Err(invalid("grid", "must not be negative"));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CoverageError::MalformedPreference {
            name,
            value: value.into(),
        })
}

fn invalid(name: &'static str, reason: &'static str) -> CoverageError {
    CoverageError::InvalidPreference { name, reason }
}
