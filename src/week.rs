//! ISO-week resolution: maps a user-supplied date token to a concrete
//! work-week date range and a canonical note path.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Days covered by a work-week (Monday through Friday).
pub const WORK_WEEK_DAYS: u32 = 5;

/// Days covered by a full calendar week.
pub const CALENDAR_WEEK_DAYS: u32 = 7;

/// Accepted date input formats, tried in order.
pub const DATE_FORMATS: &[&str] = &[
    // 4-digit year
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    // 2-digit year, year needs to come first
    "%y-%m-%d",
    "%y/%m/%d",
];

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// An ISO week together with its work-week date range.
///
/// `year` is the calendar year of the resolved date, not the ISO
/// week-year; the two diverge for a few days around January 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWeek {
    pub year: i32,
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Resolve a date token against the current local date.
///
/// See [`resolve_date_from`] for the resolution rules.
pub fn resolve_date(token: Option<&str>) -> Result<NaiveDate> {
    resolve_date_from(token, local_date_today())
}

/// Resolve a date token against an explicit `today`.
///
/// # Arguments
/// * `token` - `None`, the empty string, `"this"` or `"today"` for the
///   current week; `"last"` for exactly one week back; otherwise a date
///   string in one of [`DATE_FORMATS`]
/// * `today` - the date relative tokens are resolved against
///
/// # Returns
/// The resolved calendar date, or an error carrying the literal token
/// when no format matches
pub fn resolve_date_from(token: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match token {
        None | Some("") | Some("this") | Some("today") => Ok(today),
        Some("last") => Ok(today - Duration::weeks(1)),
        Some(raw) => {
            for fmt in DATE_FORMATS {
                if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
                    return Ok(date);
                }
            }
            bail!("Unable to parse date '{raw}'")
        }
    }
}

/// Year and ISO week number of a date.
///
/// The year is the date's calendar year; a late-December date that ISO
/// assigns to week 1 of the next year keeps its calendar year here.
pub fn year_and_week(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.iso_week().week())
}

/// Date range of the given ISO week of `year`.
///
/// # Arguments
/// * `days` - range length: [`WORK_WEEK_DAYS`] for filenames and
///   headers, [`CALENDAR_WEEK_DAYS`] for a full week
pub fn week_range(year: i32, week: u32, days: u32) -> Result<(NaiveDate, NaiveDate)> {
    // January 4th is always in the first week of the given year.
    // (ISO weeks start on Monday)
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)
        .with_context(|| format!("year {year} is out of range"))?;

    // Rewind to the Monday of that week, then step forward.
    let week1_monday = jan4 - Duration::days(i64::from(jan4.weekday().num_days_from_monday()));
    let start = week1_monday + Duration::weeks(i64::from(week) - 1);
    let end = start + Duration::days(i64::from(days) - 1);
    Ok((start, end))
}

/// Resolve a date into its ISO week plus work-week range.
pub fn resolve_week(date: NaiveDate) -> Result<ResolvedWeek> {
    let (year, week) = year_and_week(date);
    let (start, end) = week_range(year, week, WORK_WEEK_DAYS)?;
    Ok(ResolvedWeek {
        year,
        week,
        start,
        end,
    })
}

/// Canonical note path for the week containing `date`:
/// `<base_dir>/<YYYY>/<MM-DD of the work-week Monday>.md`.
pub fn note_path(base_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let week = resolve_week(date)?;
    Ok(base_dir
        .join(week.year.to_string())
        .join(format!("{}.md", week.start.format("%m-%d"))))
}
