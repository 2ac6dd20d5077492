use thiserror::Error;

use crate::analytics::Analytics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("log contained no complete records")]
    NoRequests,

    #[error("no known browser appeared in any user agent")]
    NoBrowsers,
}

pub fn render(analytics: &Analytics) -> Result<String, ReportError> {
    let percentage = analytics.image_percentage().ok_or(ReportError::NoRequests)?;
    let (browser, _) = analytics.top_browser().ok_or(ReportError::NoBrowsers)?;

    let mut out = format!("Image requests account for {percentage:.1}% of all requests\n");
    out.push_str(&format!("The most popular browser is {}\n", browser.name()));
    for (hour, count) in analytics.hours_by_hits() {
        out.push_str(&format!("Hour {hour} has {count} hits\n"));
    }
    Ok(out)
}
