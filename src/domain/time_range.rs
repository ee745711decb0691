// Time range domain model - chart granularity and the date window it covers
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY_LABELS: [&str; 6] = ["6am", "9am", "12pm", "3pm", "6pm", "9pm"];
const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_POINTS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    #[default]
    Month,
}

impl TimeRange {
    /// Chart labels for this range, one per bucket
    pub fn labels(&self) -> Vec<String> {
        match self {
            TimeRange::Day => DAY_LABELS.iter().map(|l| l.to_string()).collect(),
            TimeRange::Week => WEEK_LABELS.iter().map(|l| l.to_string()).collect(),
            TimeRange::Month => (1..=MONTH_POINTS).map(|d| d.to_string()).collect(),
        }
    }

    /// Number of buckets every series must have for this range
    pub fn point_count(&self) -> usize {
        match self {
            TimeRange::Day => DAY_LABELS.len(),
            TimeRange::Week => WEEK_LABELS.len(),
            TimeRange::Month => MONTH_POINTS,
        }
    }

    /// Number of calendar days the meal window spans, today included
    pub fn window_days(&self) -> i64 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn period_label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Daily",
            TimeRange::Week => "Weekly",
            TimeRange::Month => "Monthly",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time range '{0}', expected day, week or month")]
pub struct ParseTimeRangeError(String);

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            _ => Err(ParseTimeRangeError(s.to_string())),
        }
    }
}

/// Inclusive run of calendar dates ending on `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn ending(today: NaiveDate, range: TimeRange) -> Self {
        let start = today - Duration::days(range.window_days() - 1);
        Self { start, end: today }
    }

    /// Dates in chronological order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    pub fn day_count(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }
}

/// Document key for a calendar date, e.g. "2026-02-03"
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "October 2026"
pub fn period_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
