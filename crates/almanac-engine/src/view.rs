//! Calendar navigation state owned by the presentation layer.
//!
//! The engine itself is stateless. A front end keeps a [`CalendarView`],
//! feeds it into [`crate::calendar::month_view`] on every render, and may
//! mirror it into a URL query string or a stored JSON document so the
//! selection survives a reload.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::calendar::{month_view, EventFilter, MonthView};
use crate::error::AlmanacError;
use crate::resident::Resident;
use crate::season::Season;

const YEAR_PARAM: &str = "year";
const SEASON_PARAM: &str = "season";

/// The currently selected year, season, and event filter.
///
/// [`CalendarView::new`], [`CalendarView::from_query`] and
/// [`CalendarView::restore`] never produce year 0; a hand-built year 0 is
/// rejected by [`CalendarView::month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub year: u32,
    pub season: Season,
    pub filter: EventFilter,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView {
            year: 1,
            season: Season::Spring,
            filter: EventFilter::All,
        }
    }
}

/// The persisted part of a [`CalendarView`].
///
/// Written with [`CalendarView::to_stored_json`] and read back field by field
/// in [`CalendarView::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoredState {
    pub year: u32,
    pub season: Season,
}

impl CalendarView {
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidYear`] if `year` is 0.
    pub fn new(year: u32, season: Season, filter: EventFilter) -> Result<Self, AlmanacError> {
        if year == 0 {
            return Err(AlmanacError::InvalidYear(year));
        }
        Ok(CalendarView {
            year,
            season,
            filter,
        })
    }

    pub fn with_filter(self, filter: EventFilter) -> Self {
        CalendarView { filter, ..self }
    }

    /// The following season, rolling Winter over into Spring of next year.
    pub fn next(self) -> Self {
        let year = if self.season == Season::Winter {
            self.year.saturating_add(1)
        } else {
            self.year
        };
        CalendarView {
            year,
            season: self.season.next(),
            ..self
        }
    }

    pub fn can_go_previous(&self) -> bool {
        !(self.year <= 1 && self.season == Season::Spring)
    }

    /// The preceding season, or `None` at Year 1 Spring.
    pub fn previous(self) -> Option<Self> {
        if !self.can_go_previous() {
            return None;
        }
        let year = if self.season == Season::Spring {
            self.year - 1
        } else {
            self.year
        };
        Some(CalendarView {
            year,
            season: self.season.previous(),
            ..self
        })
    }

    /// Compute the month view for this selection.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidYear`] if the year is 0.
    pub fn month(&self, residents: &[Resident]) -> Result<MonthView, AlmanacError> {
        month_view(self.year, self.season, self.filter, residents)
    }

    // ── Query string mirror ─────────────────────────────────────────────

    /// Encode year and season as URL query parameters, e.g. `year=2&season=Summer`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(YEAR_PARAM, &self.year.to_string())
            .append_pair(SEASON_PARAM, self.season.name())
            .finish()
    }

    /// Parse a query string strictly. Missing parameters take their defaults.
    ///
    /// A leading `?` is ignored and unrelated parameters are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidYear`] for year 0,
    /// [`AlmanacError::InvalidState`] for a year that is not a number, and
    /// [`AlmanacError::InvalidSeason`] for an unknown season.
    pub fn from_query(query: &str) -> Result<Self, AlmanacError> {
        let params = QueryParams::parse(query);
        let mut view = CalendarView::default();
        if let Some(raw) = params.year {
            view.year = parse_year(&raw)?;
        }
        if let Some(raw) = params.season {
            view.season = raw.parse()?;
        }
        Ok(view)
    }

    // ── Stored state ────────────────────────────────────────────────────

    pub fn stored_state(&self) -> StoredState {
        StoredState {
            year: self.year,
            season: self.season,
        }
    }

    /// Serialize the persisted part of this view as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidState`] if serialization fails.
    pub fn to_stored_json(&self) -> Result<String, AlmanacError> {
        serde_json::to_string(&self.stored_state())
            .map_err(|e| AlmanacError::InvalidState(e.to_string()))
    }

    /// Rebuild the selection from a query string and a stored JSON document.
    ///
    /// Each field is resolved independently: a valid query parameter wins,
    /// then a valid stored value, then the default (Year 1, Spring). Invalid
    /// values are logged and skipped, never fatal. The filter is not
    /// persisted and always starts at [`EventFilter::All`].
    pub fn restore(query: Option<&str>, stored: Option<&str>) -> Self {
        let params = query.map(QueryParams::parse).unwrap_or_default();
        let stored = stored.map(StoredFields::parse).unwrap_or_default();
        let default = CalendarView::default();

        let query_year = params.year.and_then(|raw| match parse_year(&raw) {
            Ok(year) => Some(year),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring year query parameter");
                None
            }
        });
        let query_season = params.season.and_then(|raw| match raw.parse::<Season>() {
            Ok(season) => Some(season),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring season query parameter");
                None
            }
        });

        let view = CalendarView {
            year: query_year.or(stored.year).unwrap_or(default.year),
            season: query_season.or(stored.season).unwrap_or(default.season),
            filter: EventFilter::All,
        };
        debug!(year = view.year, season = %view.season, "restored calendar view");
        view
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct QueryParams {
    year: Option<String>,
    season: Option<String>,
}

impl QueryParams {
    /// Last occurrence of each parameter wins.
    fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = QueryParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                YEAR_PARAM => params.year = Some(value.into_owned()),
                SEASON_PARAM => params.season = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

/// Stored fields that survived validation.
#[derive(Debug, Default)]
struct StoredFields {
    year: Option<u32>,
    season: Option<Season>,
}

impl StoredFields {
    fn parse(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "discarding unreadable stored calendar state");
                return StoredFields::default();
            }
        };

        let year = match &value[YEAR_PARAM] {
            Value::Null => None,
            Value::Number(n) => n.as_u64().and_then(|y| u32::try_from(y).ok()),
            Value::String(s) => parse_year(s).ok(),
            _ => None,
        }
        .filter(|&y| y >= 1);
        if year.is_none() && !value[YEAR_PARAM].is_null() {
            warn!(value = %value[YEAR_PARAM], "ignoring stored year");
        }

        let season = value[SEASON_PARAM]
            .as_str()
            .and_then(|s| s.parse::<Season>().ok());
        if season.is_none() && !value[SEASON_PARAM].is_null() {
            warn!(value = %value[SEASON_PARAM], "ignoring stored season");
        }

        StoredFields { year, season }
    }
}

fn parse_year(raw: &str) -> Result<u32, AlmanacError> {
    let year: u32 = raw
        .trim()
        .parse()
        .map_err(|_| AlmanacError::InvalidState(format!("year '{}' is not a number", raw)))?;
    if year == 0 {
        return Err(AlmanacError::InvalidYear(year));
    }
    Ok(year)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn view(year: u32, season: Season) -> CalendarView {
        CalendarView::new(year, season, EventFilter::All).unwrap()
    }

    // ── Navigation tests ────────────────────────────────────────────────

    #[test]
    fn test_default_is_year1_spring() {
        let v = CalendarView::default();
        assert_eq!((v.year, v.season, v.filter), (1, Season::Spring, EventFilter::All));
    }

    #[test]
    fn test_new_rejects_year_zero() {
        assert_eq!(
            CalendarView::new(0, Season::Spring, EventFilter::All),
            Err(AlmanacError::InvalidYear(0))
        );
    }

    #[test]
    fn test_next_rolls_over_year() {
        assert_eq!(view(1, Season::Autumn).next(), view(1, Season::Winter));
        assert_eq!(view(1, Season::Winter).next(), view(2, Season::Spring));
    }

    #[test]
    fn test_previous_rolls_back_year() {
        assert_eq!(view(2, Season::Spring).previous(), Some(view(1, Season::Winter)));
        assert_eq!(view(3, Season::Summer).previous(), Some(view(3, Season::Spring)));
    }

    #[test]
    fn test_previous_stops_at_first_season() {
        let first = CalendarView::default();
        assert!(!first.can_go_previous());
        assert_eq!(first.previous(), None);
        assert!(view(1, Season::Summer).can_go_previous());
    }

    #[test]
    fn test_navigation_keeps_filter() {
        let v = view(1, Season::Spring).with_filter(EventFilter::Birthday);
        assert_eq!(v.next().filter, EventFilter::Birthday);
        assert_eq!(v.next().previous().unwrap(), v);
    }

    #[test]
    fn test_month_uses_selection() {
        let v = view(2, Season::Winter).with_filter(EventFilter::Festival);
        let month = v.month(&[]).unwrap();
        assert_eq!(month.year, 2);
        assert_eq!(month.season, Season::Winter);
        assert_eq!(month.filter, EventFilter::Festival);
    }

    // ── Query string tests ──────────────────────────────────────────────

    #[test]
    fn test_to_query() {
        assert_eq!(view(2, Season::Summer).to_query(), "year=2&season=Summer");
    }

    #[test]
    fn test_from_query_round_trip() {
        let v = view(12, Season::Autumn);
        assert_eq!(CalendarView::from_query(&v.to_query()).unwrap(), v);
    }

    #[test]
    fn test_from_query_ignores_leading_marker_and_other_params() {
        let v = CalendarView::from_query("?resident=Maple&season=winter&year=3").unwrap();
        assert_eq!(v, view(3, Season::Winter));
    }

    #[test]
    fn test_from_query_missing_params_default() {
        assert_eq!(CalendarView::from_query("").unwrap(), CalendarView::default());
        assert_eq!(
            CalendarView::from_query("season=Summer").unwrap(),
            view(1, Season::Summer)
        );
    }

    #[test]
    fn test_from_query_rejects_bad_values() {
        assert_eq!(
            CalendarView::from_query("year=0"),
            Err(AlmanacError::InvalidYear(0))
        );
        assert!(matches!(
            CalendarView::from_query("year=abc"),
            Err(AlmanacError::InvalidState(_))
        ));
        assert!(matches!(
            CalendarView::from_query("season=Monsoon"),
            Err(AlmanacError::InvalidSeason(_))
        ));
    }

    // ── Restore tests ───────────────────────────────────────────────────

    #[test]
    fn test_stored_json_round_trip() {
        let v = view(4, Season::Autumn);
        let json = v.to_stored_json().unwrap();
        assert_eq!(json, r#"{"year":4,"season":"Autumn"}"#);
        assert_eq!(CalendarView::restore(None, Some(&json)), v);
    }

    #[test]
    fn test_restore_prefers_query_over_stored() {
        let stored = r#"{"year":4,"season":"Autumn"}"#;
        let v = CalendarView::restore(Some("year=7&season=Summer"), Some(stored));
        assert_eq!(v, view(7, Season::Summer));
    }

    #[test]
    fn test_restore_resolves_fields_independently() {
        let stored = r#"{"year":4,"season":"Autumn"}"#;
        let v = CalendarView::restore(Some("season=Winter"), Some(stored));
        assert_eq!(v, view(4, Season::Winter));
    }

    #[test]
    fn test_restore_skips_invalid_query_values() {
        let stored = r#"{"year":4,"season":"Autumn"}"#;
        let v = CalendarView::restore(Some("year=-2&season=Mud"), Some(stored));
        assert_eq!(v, view(4, Season::Autumn));
    }

    #[test]
    fn test_restore_skips_invalid_stored_values() {
        let v = CalendarView::restore(None, Some(r#"{"year":0,"season":"Mud"}"#));
        assert_eq!(v, CalendarView::default());

        let v = CalendarView::restore(None, Some(r#"{"year":"5"}"#));
        assert_eq!(v, view(5, Season::Spring));
    }

    #[test]
    fn test_restore_never_yields_year_zero() {
        let v = CalendarView::restore(Some("year=0"), Some(r#"{"year":0,"season":"Winter"}"#));
        assert_eq!(v, view(1, Season::Winter));
    }

    #[test]
    fn test_month_rejects_hand_built_year_zero() {
        let v = CalendarView {
            year: 0,
            ..CalendarView::default()
        };
        assert_eq!(v.month(&[]), Err(AlmanacError::InvalidYear(0)));
    }

    #[test]
    fn test_restore_survives_garbage() {
        assert_eq!(
            CalendarView::restore(Some("&&=="), Some("not json")),
            CalendarView::default()
        );
        assert_eq!(CalendarView::restore(None, Some("[1,2]")), CalendarView::default());
    }

    #[test]
    fn test_restore_resets_filter() {
        let v = CalendarView::restore(Some("year=2"), None);
        assert_eq!(v.filter, EventFilter::All);
    }
}
