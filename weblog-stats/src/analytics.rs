use regex::Regex;
use std::{cmp::Reverse, collections::HashMap, sync::LazyLock};
use thiserror::Error;

use crate::{invariants::Hour, models::LogRecord, parse::record_from_line};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|gif|png)$").expect("valid regex"));

// Leftmost match wins; at equal offsets the earlier alternative wins.
static BROWSER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Firefox|Chrome|Internet Explorer|Safari").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Firefox,
    Chrome,
    InternetExplorer,
    Safari,
}

impl Browser {
    pub const ALL: [Self; 4] = [
        Self::Firefox,
        Self::Chrome,
        Self::InternetExplorer,
        Self::Safari,
    ];

    pub fn detect(user_agent: &str) -> Option<Self> {
        BROWSER_RE
            .find(user_agent)
            .and_then(|m| Self::from_token(m.as_str()))
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "Firefox" => Some(Self::Firefox),
            "Chrome" => Some(Self::Chrome),
            "Internet Explorer" => Some(Self::InternetExplorer),
            "Safari" => Some(Self::Safari),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
            Self::InternetExplorer => "Internet Explorer",
            Self::Safari => "Safari",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("line {line}: timestamp {timestamp:?} has no time component")]
    MissingTime { line: usize, timestamp: String },

    #[error("line {line}: cannot parse an hour from timestamp {timestamp:?}")]
    BadHour { line: usize, timestamp: String },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Analytics {
    image_hits: usize,
    total_hits: usize,
    browser_counts: HashMap<Browser, usize>,
    hour_counts: HashMap<Hour, usize>,
}

pub fn analyze(log_text: &str) -> Result<Analytics, AnalyzeError> {
    let mut analytics = Analytics::default();
    for (idx, line) in log_text.lines().enumerate() {
        if let Some(record) = record_from_line(line) {
            analytics.record(&record, idx + 1)?;
        }
    }
    Ok(analytics)
}

impl Analytics {
    fn record(&mut self, record: &LogRecord, line: usize) -> Result<(), AnalyzeError> {
        if IMAGE_RE.is_match(&record.path) {
            self.image_hits += 1;
        }
        if let Some(browser) = Browser::detect(&record.user_agent) {
            *self.browser_counts.entry(browser).or_default() += 1;
        }
        let hour = extract_hour(&record.timestamp, line)?;
        *self.hour_counts.entry(hour).or_default() += 1;
        self.total_hits += 1;
        Ok(())
    }

    pub fn image_hits(&self) -> usize {
        self.image_hits
    }

    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    pub fn browser_counts(&self) -> &HashMap<Browser, usize> {
        &self.browser_counts
    }

    pub fn hour_counts(&self) -> &HashMap<Hour, usize> {
        &self.hour_counts
    }

    pub fn image_percentage(&self) -> Option<f64> {
        (self.total_hits > 0).then(|| self.image_hits as f64 / self.total_hits as f64 * 100.0)
    }

    pub fn top_browser(&self) -> Option<(Browser, usize)> {
        // Ties go to the browser declared first.
        let mut best: Option<(Browser, usize)> = None;
        for browser in Browser::ALL {
            if let Some(&count) = self.browser_counts.get(&browser)
                && best.is_none_or(|(_, c)| count > c)
            {
                best = Some((browser, count));
            }
        }
        best
    }

    pub fn hours_by_hits(&self) -> Vec<(Hour, usize)> {
        let mut entries: Vec<_> = self.hour_counts.iter().map(|(h, c)| (*h, *c)).collect();
        entries.sort_unstable_by_key(|(hour, count)| (Reverse(*count), *hour));
        entries
    }
}

fn extract_hour(timestamp: &str, line: usize) -> Result<Hour, AnalyzeError> {
    let time = timestamp
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| AnalyzeError::MissingTime {
            line,
            timestamp: timestamp.to_string(),
        })?;
    let hour_text = time.split_once(':').map_or(time, |(hour, _)| hour);
    hour_text.parse().map_err(|_| AnalyzeError::BadHour {
        line,
        timestamp: timestamp.to_string(),
    })
}
