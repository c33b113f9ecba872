//! # almanac-engine
//!
//! Deterministic calendar computation and reference data for a farming-life
//! game whose year is four 31-day seasons.
//!
//! The engine answers the questions a calendar page needs: on which weekday a
//! season starts, which day each festival falls on in a given year (festivals
//! keep their weekday from year to year), and which festivals and resident
//! birthdays land on each day of the month grid. All computation is pure; the
//! caller owns the current selection and passes it in on every query.
//!
//! ## Modules
//!
//! - [`calendar`] — Start weekdays, festival day shifting, month grid, event merging
//! - [`festival`] — Festival definitions and the per-season catalog
//! - [`season`] — The four seasons and their fixed length
//! - [`resident`] — Residents, birthdays, gift preferences, and search
//! - [`fish`] — Fish catalog with search and sorting
//! - [`view`] — Navigation state with query-string and stored-JSON mirrors
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod festival;
pub mod fish;
pub mod resident;
pub mod season;
pub mod view;

pub use calendar::{
    birthday_events, build_month_grid, festivals_for, is_bazaar_day, merge_events, month_view,
    realignment_delta, start_weekday, weekday_of, wrap_day, CombinedEvent, DayCell, EventFilter,
    EventIndex, EventKind, GridCell, MonthView, SeasonSchedule,
};
pub use error::AlmanacError;
pub use festival::{season_festivals, Festival, SeasonFestivals};
pub use fish::{fish_in_season, fish_list, search_fish, FishEntry, FishSortKey, SortDirection};
pub use resident::{
    find_resident, residents, search_residents, GroupFilter, Resident, ResidentGroup,
};
pub use season::{Season, SEASON_DAYS};
pub use view::{CalendarView, StoredState};
