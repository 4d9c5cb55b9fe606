use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

use shared_config::AppConfig;

use crate::models::{StepDirection, ViewMode};

/// The schedule's real-world meaning is tied to where the practice sits,
/// not to wherever a viewer or server happens to run.
pub const DEFAULT_PRACTICE_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Clock pinned to the practice's civil timezone.
#[derive(Debug, Clone)]
pub struct PracticeClock {
    tz: Tz,
}

impl PracticeClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let tz = config.practice_timezone.parse().unwrap_or_else(|_| {
            warn!(
                "Unrecognized practice timezone {:?}, falling back to {}",
                config.practice_timezone, DEFAULT_PRACTICE_TZ
            );
            DEFAULT_PRACTICE_TZ
        });
        Self { tz }
    }

    /// Civil date of the given instant at the practice.
    pub fn civil_date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Today's civil date at the practice, independent of the host clock's zone.
    pub fn today(&self) -> NaiveDate {
        self.civil_date_of(Utc::now())
    }
}

/// Monday and Friday of the work week containing `anchor`. Saturday and
/// Sunday anchors resolve to the preceding Monday's week.
pub fn work_week_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(4))
}

/// Expand an anchor date into the ordered list of dates to display.
pub fn resolve_range(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => {
            let (monday, friday) = work_week_bounds(anchor);
            monday.iter_days().take_while(|d| *d <= friday).collect()
        }
    }
}

/// Move the anchor one step in the given direction: a civil day in Day view,
/// seven in Week view. Pure date arithmetic; a DST clock shift can never make
/// this skip or repeat a date.
pub fn step_anchor(anchor: NaiveDate, mode: ViewMode, direction: StepDirection) -> NaiveDate {
    let step = match mode {
        ViewMode::Day => 1,
        ViewMode::Week => 7,
    };
    let delta = match direction {
        StepDirection::Previous => -step,
        StepDirection::Next => step,
    };
    anchor + Duration::days(delta)
}
