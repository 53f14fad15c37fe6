//! Current date banner, written the way French readers expect it.

use campus_core::{RenderOp, Target};
use chrono::{Locale, NaiveDate, NaiveTime};

/// `lundi 19 octobre 2026`.
pub fn format_french_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A %-d %B %Y", Locale::fr_FR)
        .to_string()
}

pub fn render(date: NaiveDate) -> Vec<RenderOp> {
    vec![RenderOp::text(Target::CurrentDate, format_french_date(date))]
}
