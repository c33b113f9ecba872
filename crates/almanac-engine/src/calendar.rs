//! Deterministic in-game calendar computation.
//!
//! Every season is 31 days long and a year has four of them, so neither a
//! season nor a year is a whole number of weeks. The start weekday of a
//! season therefore drifts: by 3 days per elapsed season and by 5 days per
//! elapsed year. Festivals are authored once, on the day they fall in Year 1,
//! and are shifted every year so that they keep landing on the same weekday.
//!
//! All functions here are pure: the same inputs always produce the same
//! outputs, and no source table is ever mutated.
//!
//! # Functions
//!
//! - [`start_weekday`] — Weekday of day 1 of a (year, season)
//! - [`festivals_for`] — A season's festivals for a year, on their shifted days
//! - [`build_month_grid`] — 7-column grid of a season, padded with empty cells
//! - [`merge_events`] — Festival and birthday events indexed by day
//! - [`month_view`] — All of the above for one query
//!
//! # Weekday encoding
//!
//! Weekdays are numbered 0 = Sunday … 6 = Saturday. Year 1 Spring day 1 is a
//! Saturday.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;
use crate::festival::{season_festivals, Festival};
use crate::resident::Resident;
use crate::season::{Season, SEASONS_PER_YEAR, SEASON_DAYS};

/// Weekday of Year 1, Spring, day 1 (Saturday).
pub const BASE_WEEKDAY: u32 = 6;

/// Weekday of the weekly bazaar (Saturday).
pub const BAZAAR_WEEKDAY: u32 = 6;

const DAYS_PER_WEEK: u32 = 7;

/// Weekday drift caused by one elapsed season (31 mod 7).
const SEASON_WEEKDAY_SHIFT: u32 = SEASON_DAYS % DAYS_PER_WEEK;

/// Weekday drift caused by one elapsed year (124 mod 7).
const YEAR_WEEKDAY_SHIFT: u32 = (SEASONS_PER_YEAR * SEASON_DAYS) % DAYS_PER_WEEK;

/// First year in which `extra_from_year2` festivals are held.
const EXTRA_FESTIVALS_FROM: u32 = 2;

// ── Weekdays ────────────────────────────────────────────────────────────────

/// Compute the weekday on which day 1 of `season` falls in `year`.
///
/// Returns a value in `0..=6` (0 = Sunday).
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidYear`] if `year` is 0.
///
/// # Examples
///
/// ```
/// use almanac_engine::{calendar::start_weekday, Season};
///
/// assert_eq!(start_weekday(1, Season::Spring).unwrap(), 6);
/// assert_eq!(start_weekday(1, Season::Summer).unwrap(), 2);
/// ```
pub fn start_weekday(year: u32, season: Season) -> Result<u32, AlmanacError> {
    let elapsed_years = elapsed_years(year)?;
    let season_offset = SEASON_WEEKDAY_SHIFT * season.index() as u32;
    let year_offset = YEAR_WEEKDAY_SHIFT * elapsed_years;
    Ok((BASE_WEEKDAY + season_offset + year_offset) % DAYS_PER_WEEK)
}

/// Compute the numeric weekday (0 = Sunday) of a specific day.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidYear`] for year 0, or
/// [`AlmanacError::InvalidDay`] if `day` is outside the season.
pub fn weekday_index(year: u32, season: Season, day: u32) -> Result<u32, AlmanacError> {
    check_day(season, day)?;
    let start = start_weekday(year, season)?;
    Ok((start + day - 1) % DAYS_PER_WEEK)
}

/// Compute the [`chrono::Weekday`] of a specific day.
///
/// # Errors
///
/// Same as [`weekday_index`].
pub fn weekday_of(year: u32, season: Season, day: u32) -> Result<Weekday, AlmanacError> {
    let index = weekday_index(year, season, day)?;
    weekday_from_sunday(index)
}

/// Whether the bazaar is open on a specific day (every Saturday).
///
/// # Errors
///
/// Same as [`weekday_index`].
pub fn is_bazaar_day(year: u32, season: Season, day: u32) -> Result<bool, AlmanacError> {
    Ok(weekday_index(year, season, day)? == BAZAAR_WEEKDAY)
}

/// Convert a 0 = Sunday weekday number to a [`chrono::Weekday`].
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidWeekday`] if `index` is 7 or more.
pub fn weekday_from_sunday(index: u32) -> Result<Weekday, AlmanacError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(AlmanacError::InvalidWeekday(index)),
    }
}

// ── festivals_for ───────────────────────────────────────────────────────────

/// A season's festivals as they occur in one specific year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonSchedule {
    pub year: u32,
    pub season: Season,
    /// Number of days in the season (always 31).
    pub days: u32,
    /// Base festivals first, then year-2 extras, each in table order, with
    /// `day` already shifted for `year`.
    pub events: Vec<Festival>,
}

/// Forward shift (in days, `0..=6`) that restores Year 1's weekday alignment
/// in `year`.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidYear`] if `year` is 0.
pub fn realignment_delta(year: u32) -> Result<u32, AlmanacError> {
    let drift = (YEAR_WEEKDAY_SHIFT * elapsed_years(year)?) % DAYS_PER_WEEK;
    Ok((DAYS_PER_WEEK - drift) % DAYS_PER_WEEK)
}

/// Compute the festivals of `season` in `year`, on their shifted days.
///
/// Base festivals are shifted by [`realignment_delta`] of `year`. Festivals
/// introduced in Year 2 are authored against Year 2's alignment, so they are
/// shifted by the difference between this year's delta and Year 2's delta,
/// and are omitted entirely in Year 1. Either way a festival falls on the
/// same weekday every year.
///
/// A shifted day that would run past the end of the season is moved back by
/// a whole week instead of wrapping by the season length: 31 is not a
/// multiple of 7, so wrapping would change the weekday.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidYear`] if `year` is 0.
///
/// # Examples
///
/// ```
/// use almanac_engine::{calendar::festivals_for, Season};
///
/// let spring = festivals_for(1, Season::Spring).unwrap();
/// assert_eq!(spring.days, 31);
/// assert_eq!(spring.events[0].title, "Flower Festival");
/// assert_eq!(spring.events[0].day, 11);
/// ```
pub fn festivals_for(year: u32, season: Season) -> Result<SeasonSchedule, AlmanacError> {
    let catalog = season_festivals(season);
    let delta = realignment_delta(year)?;

    let mut events: Vec<Festival> = catalog
        .base
        .iter()
        .map(|f| f.with_day(shift_day(f.day, delta, catalog.days)))
        .collect();

    if year >= EXTRA_FESTIVALS_FROM {
        let year2_delta = realignment_delta(EXTRA_FESTIVALS_FROM)?;
        let extra_delta = (delta + DAYS_PER_WEEK - year2_delta) % DAYS_PER_WEEK;
        events.extend(
            catalog
                .extra_from_year2
                .iter()
                .map(|f| f.with_day(shift_day(f.day, extra_delta, catalog.days))),
        );
    }

    Ok(SeasonSchedule {
        year,
        season,
        days: catalog.days,
        events,
    })
}

/// Reduce any day number into `1..=days` by whole-season wraparound.
///
/// `0` maps to `days`, `days + 1` maps to `1`, and so on in both directions.
///
/// # Panics
///
/// Panics if `days` is 0.
pub fn wrap_day(day: i64, days: u32) -> u32 {
    assert!(days > 0, "season length must be positive");
    ((day - 1).rem_euclid(i64::from(days)) + 1) as u32
}

/// Shift a canonical day forward by `delta` days, keeping the weekday when
/// the result would overflow the season.
fn shift_day(canonical: u32, delta: u32, days: u32) -> u32 {
    let mut day = i64::from(canonical) + i64::from(delta);
    while day > i64::from(days) {
        day -= i64::from(DAYS_PER_WEEK);
    }
    wrap_day(day, days)
}

// ── build_month_grid ────────────────────────────────────────────────────────

/// A day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    /// 0 = Sunday … 6 = Saturday.
    pub weekday: u32,
    pub bazaar_day: bool,
}

/// One cell of a 7-column month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridCell {
    Empty,
    Day(DayCell),
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Empty => None,
            GridCell::Day(cell) => Some(cell.day),
        }
    }
}

/// Lay out `day_count` days in a 7-column grid starting on `start_weekday`.
///
/// The grid has `start_weekday` leading empty cells, then one cell per day,
/// then trailing empty cells up to the next multiple of 7.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidWeekday`] if `start_weekday` is 7 or more,
/// or [`AlmanacError::InvalidDay`] if `day_count` exceeds a season's length.
pub fn build_month_grid(start_weekday: u32, day_count: u32) -> Result<Vec<GridCell>, AlmanacError> {
    if start_weekday >= DAYS_PER_WEEK {
        return Err(AlmanacError::InvalidWeekday(start_weekday));
    }
    if day_count > SEASON_DAYS {
        return Err(AlmanacError::InvalidDay(format!(
            "a month has at most {} days, got {}",
            SEASON_DAYS, day_count
        )));
    }

    let mut cells = Vec::with_capacity((start_weekday + day_count + DAYS_PER_WEEK) as usize);
    cells.extend((0..start_weekday).map(|_| GridCell::Empty));
    cells.extend((1..=day_count).map(|day| {
        let weekday = (start_weekday + day - 1) % DAYS_PER_WEEK;
        GridCell::Day(DayCell {
            day,
            weekday,
            bazaar_day: weekday == BAZAAR_WEEKDAY,
        })
    }));
    while cells.len() % DAYS_PER_WEEK as usize != 0 {
        cells.push(GridCell::Empty);
    }
    Ok(cells)
}

// ── merge_events ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Festival,
    Birthday,
}

/// Which event kinds a calendar query shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Festival,
    Birthday,
}

impl EventFilter {
    pub fn admits(self, kind: EventKind) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Festival => kind == EventKind::Festival,
            EventFilter::Birthday => kind == EventKind::Birthday,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventFilter::All => "all",
            EventFilter::Festival => "festival",
            EventFilter::Birthday => "birthday",
        })
    }
}

impl FromStr for EventFilter {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(EventFilter::All),
            "festival" | "festivals" => Ok(EventFilter::Festival),
            "birthday" | "birthdays" => Ok(EventFilter::Birthday),
            _ => Err(AlmanacError::InvalidFilter(format!("'{}'", s.trim()))),
        }
    }
}

/// A festival or birthday placed on a day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedEvent {
    pub day: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub festival: Option<Festival>,
}

impl CombinedEvent {
    pub fn from_festival(festival: &Festival) -> Self {
        CombinedEvent {
            day: festival.day,
            title: festival.title.to_string(),
            kind: EventKind::Festival,
            resident_name: None,
            festival: Some(*festival),
        }
    }
}

/// Events grouped by day of the season, in ascending day order.
pub type EventIndex = BTreeMap<u32, Vec<CombinedEvent>>;

/// Birthday events of every resident born in `season`, in table order.
///
/// Residents without a birthday are skipped.
pub fn birthday_events(residents: &[Resident], season: Season) -> Vec<CombinedEvent> {
    residents
        .iter()
        .filter_map(|r| {
            let birthday = r.birthday.filter(|b| b.season == season)?;
            Some(CombinedEvent {
                day: birthday.day,
                title: format!("{}'s Birthday", r.name),
                kind: EventKind::Birthday,
                resident_name: Some(r.name),
                festival: None,
            })
        })
        .collect()
}

/// Merge festival and birthday events into a per-day index.
///
/// Festivals come before birthdays on the same day, and each keeps its input
/// order. Events not admitted by `filter` are dropped before grouping.
/// Nothing is deduplicated.
pub fn merge_events(
    festivals: &[Festival],
    birthdays: &[CombinedEvent],
    filter: EventFilter,
) -> EventIndex {
    let mut index = EventIndex::new();
    let combined = festivals
        .iter()
        .map(CombinedEvent::from_festival)
        .chain(birthdays.iter().cloned());
    for event in combined.filter(|e| filter.admits(e.kind)) {
        index.entry(event.day).or_default().push(event);
    }
    index
}

// ── month_view ──────────────────────────────────────────────────────────────

/// Everything needed to render one season of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    pub year: u32,
    pub season: Season,
    pub filter: EventFilter,
    /// 0 = Sunday … 6 = Saturday.
    pub start_weekday: u32,
    pub first_day: Weekday,
    pub days: u32,
    pub cells: Vec<GridCell>,
    pub events: EventIndex,
}

impl MonthView {
    /// Events on `day`, or an empty slice.
    pub fn events_on(&self, day: u32) -> &[CombinedEvent] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Compute the full month view for a (year, season) query.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidYear`] if `year` is 0.
pub fn month_view(
    year: u32,
    season: Season,
    filter: EventFilter,
    residents: &[Resident],
) -> Result<MonthView, AlmanacError> {
    let schedule = festivals_for(year, season)?;
    let start = start_weekday(year, season)?;
    let cells = build_month_grid(start, schedule.days)?;
    let birthdays = birthday_events(residents, season);
    let events = merge_events(&schedule.events, &birthdays, filter);

    Ok(MonthView {
        year,
        season,
        filter,
        start_weekday: start,
        first_day: weekday_from_sunday(start)?,
        days: schedule.days,
        cells,
        events,
    })
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Full years elapsed since Year 1, reduced modulo the 7-year weekday cycle.
fn elapsed_years(year: u32) -> Result<u32, AlmanacError> {
    if year == 0 {
        return Err(AlmanacError::InvalidYear(year));
    }
    Ok((year - 1) % DAYS_PER_WEEK)
}

fn check_day(season: Season, day: u32) -> Result<(), AlmanacError> {
    if day == 0 || day > season.days() {
        return Err(AlmanacError::InvalidDay(format!(
            "{} is outside {} (1-{})",
            day,
            season,
            season.days()
        )));
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
