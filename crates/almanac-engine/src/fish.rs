//! Fish catalog: where and when each fish can be caught, and what it sells for.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AlmanacError;
use crate::season::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FishSize {
    Small,
    Medium,
    Large,
    Guardian,
    Unknown,
}

impl FishSize {
    pub fn name(self) -> &'static str {
        match self {
            FishSize::Small => "Small",
            FishSize::Medium => "Medium",
            FishSize::Large => "Large",
            FishSize::Guardian => "Guardian",
            FishSize::Unknown => "Unknown",
        }
    }

    /// Sort rank: Small < Medium < Large < Guardian < Unknown.
    fn rank(self) -> u8 {
        match self {
            FishSize::Small => 0,
            FishSize::Medium => 1,
            FishSize::Large => 2,
            FishSize::Guardian => 3,
            FishSize::Unknown => 4,
        }
    }
}

/// When a fish can be caught. Unlike [`Season`], includes all-year availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FishSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
    #[serde(rename = "All-Year Round")]
    AllYearRound,
}

impl FishSeason {
    pub fn name(self) -> &'static str {
        match self {
            FishSeason::Spring => "Spring",
            FishSeason::Summer => "Summer",
            FishSeason::Autumn => "Autumn",
            FishSeason::Winter => "Winter",
            FishSeason::AllYearRound => "All-Year Round",
        }
    }

    pub fn includes(self, season: Season) -> bool {
        match self {
            FishSeason::AllYearRound => true,
            FishSeason::Spring => season == Season::Spring,
            FishSeason::Summer => season == Season::Summer,
            FishSeason::Autumn => season == Season::Autumn,
            FishSeason::Winter => season == Season::Winter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weather {
    Any,
    Sunny,
    Cloudy,
    #[serde(rename = "Non-sunny")]
    NonSunny,
    #[serde(rename = "Non-cloudy")]
    NonCloudy,
    #[serde(rename = "Non-Stormy Weather")]
    NonStormy,
    Raining,
    #[serde(rename = "Light Snow")]
    LightSnow,
    Night,
    Unknown,
}

impl Weather {
    pub fn name(self) -> &'static str {
        match self {
            Weather::Any => "Any",
            Weather::Sunny => "Sunny",
            Weather::Cloudy => "Cloudy",
            Weather::NonSunny => "Non-sunny",
            Weather::NonCloudy => "Non-cloudy",
            Weather::NonStormy => "Non-Stormy Weather",
            Weather::Raining => "Raining",
            Weather::LightSnow => "Light Snow",
            Weather::Night => "Night",
            Weather::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FishEntry {
    pub fish: &'static str,
    pub size: FishSize,
    pub seasons: &'static [FishSeason],
    pub weather: &'static [Weather],
    pub locations: &'static [&'static str],
    /// Sale price, when known.
    pub base_value: Option<u32>,
}

impl FishEntry {
    pub fn available_in(&self, season: Season) -> bool {
        self.seasons.iter().any(|s| s.includes(season))
    }

    pub fn seasons_label(&self) -> String {
        join_names(self.seasons.iter().map(|s| s.name()))
    }

    pub fn weather_label(&self) -> String {
        join_names(self.weather.iter().map(|w| w.name()))
    }

    pub fn locations_label(&self) -> String {
        join_names(self.locations.iter().copied())
    }

    /// Every searchable word of the entry, one item at a time, space separated.
    fn search_text(&self) -> String {
        let value = self.base_value.map(|v| v.to_string()).unwrap_or_default();
        let mut parts: Vec<&str> = vec![self.fish, self.size.name()];
        parts.extend(self.seasons.iter().map(|s| s.name()));
        parts.extend(self.weather.iter().map(|w| w.name()));
        parts.extend(self.locations.iter().copied());
        parts.push(&value);
        parts.join(" ").to_lowercase()
    }

    fn matches(&self, needle: &str) -> bool {
        self.search_text().contains(needle)
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

// ── Search and sort ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FishSortKey {
    #[default]
    Name,
    Size,
    Seasons,
    Weather,
    Locations,
    Value,
}

impl FromStr for FishSortKey {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FishSortKey::Name),
            "size" => Ok(FishSortKey::Size),
            "seasons" | "season" => Ok(FishSortKey::Seasons),
            "weather" => Ok(FishSortKey::Weather),
            "locations" | "location" => Ok(FishSortKey::Locations),
            "value" => Ok(FishSortKey::Value),
            _ => Err(AlmanacError::InvalidSortKey(format!("'{}'", s.trim()))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The other direction, as when a column header is clicked twice.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        })
    }
}

/// All fish, in catalog order.
pub fn fish_list() -> &'static [FishEntry] {
    FISH
}

/// Filter the catalog by a free-text query and sort it.
///
/// The query is trimmed and matched case-insensitively against the name,
/// size, seasons, weather, locations and value of each fish. Fish with an
/// unknown value sort last in both directions. Ties are broken by name,
/// ascending.
pub fn search_fish(
    query: &str,
    key: FishSortKey,
    direction: SortDirection,
) -> Vec<&'static FishEntry> {
    let needle = query.trim().to_lowercase();
    let mut found: Vec<&'static FishEntry> = FISH
        .iter()
        .filter(|f| needle.is_empty() || f.matches(&needle))
        .collect();

    found.sort_by(|a, b| {
        let ordering = match key {
            FishSortKey::Value => return compare_values(a, b, direction),
            FishSortKey::Name => collate(a.fish, b.fish),
            FishSortKey::Size => a.size.rank().cmp(&b.size.rank()),
            FishSortKey::Seasons => collate(&a.seasons_label(), &b.seasons_label()),
            FishSortKey::Weather => collate(&a.weather_label(), &b.weather_label()),
            FishSortKey::Locations => collate(&a.locations_label(), &b.locations_label()),
        };
        apply_direction(ordering, direction).then_with(|| collate(a.fish, b.fish))
    });
    found
}

/// Fish that can be caught in `season`, in catalog order.
pub fn fish_in_season(season: Season) -> Vec<&'static FishEntry> {
    FISH.iter().filter(|f| f.available_in(season)).collect()
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_values(a: &FishEntry, b: &FishEntry, direction: SortDirection) -> Ordering {
    let ordering = match (a.base_value, b.base_value) {
        (Some(x), Some(y)) => apply_direction(x.cmp(&y), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    ordering.then_with(|| collate(a.fish, b.fish))
}

/// Case-insensitive text order, with the exact text as a tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ── Fish table ──────────────────────────────────────────────────────────────

use FishSeason::{AllYearRound, Autumn, Spring, Summer, Winter};

const ZEPHYR_TOWN: &str = "Zephyr Town";
const MOUNTAINS: &str = "Mountains";
const KAGETSU_POND: &str = "Pond by Kagetsu's House in the Mountains";
const SOUTHEAST_POND: &str = "Southeast Zephyr Town Pond";
const BAZAAR_POND: &str = "Bazaar Pond";

static FISH: &[FishEntry] = &[
    FishEntry {
        fish: "Amur Minnow",
        size: FishSize::Small,
        seasons: &[Spring, Autumn, Winter],
        weather: &[Weather::NonCloudy],
        locations: &[ZEPHYR_TOWN, MOUNTAINS],
        base_value: Some(40),
    },
    FishEntry {
        fish: "Basa",
        size: FishSize::Large,
        seasons: &[AllYearRound],
        weather: &[Weather::Any],
        locations: &[MOUNTAINS],
        base_value: Some(250),
    },
    FishEntry {
        fish: "Bighead Carp",
        size: FishSize::Large,
        seasons: &[AllYearRound],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN],
        base_value: Some(350),
    },
    FishEntry {
        fish: "Bitterling",
        size: FishSize::Small,
        seasons: &[Spring],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN, MOUNTAINS],
        base_value: Some(54),
    },
    FishEntry {
        fish: "Black Bass",
        size: FishSize::Medium,
        seasons: &[Spring, Summer, Winter],
        weather: &[Weather::NonSunny],
        locations: &[MOUNTAINS],
        base_value: Some(280),
    },
    FishEntry {
        fish: "Bluegill",
        size: FishSize::Small,
        seasons: &[AllYearRound],
        weather: &[Weather::NonSunny],
        locations: &[ZEPHYR_TOWN],
        base_value: Some(90),
    },
    FishEntry {
        fish: "Brown Trout",
        size: FishSize::Medium,
        seasons: &[Spring, Summer, Autumn],
        weather: &[Weather::Any],
        locations: &[KAGETSU_POND],
        base_value: Some(265),
    },
    FishEntry {
        fish: "Dace",
        size: FishSize::Medium,
        seasons: &[AllYearRound],
        weather: &[Weather::Any],
        locations: &["North Pond east of Mayor's House"],
        base_value: Some(100),
    },
    FishEntry {
        fish: "Dark Chub",
        size: FishSize::Small,
        seasons: &[Spring, Summer],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN],
        base_value: Some(50),
    },
    FishEntry {
        fish: "Goldfish",
        size: FishSize::Small,
        seasons: &[Spring, Winter],
        weather: &[Weather::Any],
        locations: &[SOUTHEAST_POND],
        base_value: Some(122),
    },
    FishEntry {
        fish: "Grayling",
        size: FishSize::Medium,
        seasons: &[Spring, Summer],
        weather: &[Weather::NonStormy],
        locations: &[KAGETSU_POND],
        base_value: Some(255),
    },
    FishEntry {
        fish: "Killifish",
        size: FishSize::Small,
        seasons: &[Summer, Autumn],
        weather: &[Weather::Sunny, Weather::Cloudy],
        locations: &[MOUNTAINS],
        base_value: Some(102),
    },
    FishEntry {
        fish: "Loach",
        size: FishSize::Small,
        seasons: &[Spring, Summer],
        weather: &[Weather::Any],
        locations: &[MOUNTAINS],
        base_value: Some(66),
    },
    FishEntry {
        fish: "Yellow Perch",
        size: FishSize::Large,
        seasons: &[Summer, Autumn],
        weather: &[Weather::Any],
        locations: &[KAGETSU_POND],
        base_value: Some(380),
    },
    FishEntry {
        fish: "Nile Perch",
        size: FishSize::Large,
        seasons: &[Summer, Autumn],
        weather: &[Weather::Any],
        locations: &[KAGETSU_POND],
        base_value: Some(380),
    },
    FishEntry {
        fish: "Pale Chub",
        size: FishSize::Small,
        seasons: &[AllYearRound],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN, MOUNTAINS],
        base_value: Some(42),
    },
    FishEntry {
        fish: "Rainbow Trout",
        size: FishSize::Medium,
        seasons: &[Spring, Summer, Autumn],
        weather: &[Weather::Any],
        locations: &[SOUTHEAST_POND, KAGETSU_POND],
        base_value: Some(120),
    },
    FishEntry {
        fish: "Sculpin",
        size: FishSize::Small,
        seasons: &[Summer, Autumn, Winter],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN],
        base_value: Some(45),
    },
    FishEntry {
        fish: "Silver Carp",
        size: FishSize::Large,
        seasons: &[AllYearRound],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN, MOUNTAINS],
        base_value: Some(200),
    },
    FishEntry {
        fish: "Stone Moroko",
        size: FishSize::Small,
        seasons: &[Spring, Autumn, Winter],
        weather: &[Weather::Any],
        locations: &[BAZAAR_POND],
        base_value: Some(105),
    },
    FishEntry {
        fish: "Sweetfish",
        size: FishSize::Small,
        seasons: &[Summer, Autumn],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN, MOUNTAINS],
        base_value: Some(120),
    },
    FishEntry {
        fish: "Tamoroko",
        size: FishSize::Small,
        seasons: &[Spring],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN, BAZAAR_POND],
        base_value: Some(60),
    },
    FishEntry {
        fish: "Three-Lips Carp",
        size: FishSize::Medium,
        seasons: &[Summer],
        weather: &[Weather::Any],
        locations: &[ZEPHYR_TOWN],
        base_value: Some(312),
    },
    FishEntry {
        fish: "Grass Carp",
        size: FishSize::Guardian,
        seasons: &[Summer, Autumn],
        weather: &[Weather::Any],
        locations: &["Pond at middle of Zephyr Town"],
        base_value: None,
    },
    FishEntry {
        fish: "Koi",
        size: FishSize::Unknown,
        seasons: &[Winter],
        weather: &[Weather::Sunny, Weather::LightSnow],
        locations: &[ZEPHYR_TOWN],
        base_value: None,
    },
    FishEntry {
        fish: "Snakehead",
        size: FishSize::Unknown,
        seasons: &[Spring, Autumn, Winter],
        weather: &[Weather::Sunny, Weather::Cloudy],
        locations: &["Town"],
        base_value: None,
    },
    FishEntry {
        fish: "Dark Sleeper",
        size: FishSize::Unknown,
        seasons: &[Autumn, Winter],
        weather: &[Weather::Night],
        locations: &["Equestrian Park"],
        base_value: None,
    },
];

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&FishEntry]) -> Vec<&'static str> {
        entries.iter().map(|f| f.fish).collect()
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(fish_list().len(), 27);
    }

    #[test]
    fn test_default_sort_is_by_name() {
        let all = search_fish("", FishSortKey::Name, SortDirection::Ascending);
        assert_eq!(all.len(), 27);
        assert_eq!(all[0].fish, "Amur Minnow");
        assert_eq!(all[26].fish, "Yellow Perch");
    }

    #[test]
    fn test_query_matches_location_and_weather() {
        let pond = search_fish("bazaar pond", FishSortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&pond), vec!["Stone Moroko", "Tamoroko"]);

        let snow = search_fish("LIGHT SNOW", FishSortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&snow), vec!["Koi"]);
    }

    #[test]
    fn test_query_matches_value() {
        let found = search_fish("380", FishSortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&found), vec!["Nile Perch", "Yellow Perch"]);
    }

    #[test]
    fn test_value_sort_puts_unknown_last_ascending() {
        let sorted = search_fish("", FishSortKey::Value, SortDirection::Ascending);
        assert_eq!(sorted[0].fish, "Amur Minnow");
        assert_eq!(sorted[1].fish, "Pale Chub");
        let tail: Vec<_> = names(&sorted[23..]);
        assert_eq!(tail, vec!["Dark Sleeper", "Grass Carp", "Koi", "Snakehead"]);
    }

    #[test]
    fn test_value_sort_puts_unknown_last_descending() {
        let sorted = search_fish("", FishSortKey::Value, SortDirection::Descending);
        // Equal values fall back to ascending name
        assert_eq!(names(&sorted[..3]), vec!["Nile Perch", "Yellow Perch", "Bighead Carp"]);
        assert!(sorted[23..].iter().all(|f| f.base_value.is_none()));
    }

    #[test]
    fn test_size_sort_uses_size_rank() {
        let sorted = search_fish("", FishSortKey::Size, SortDirection::Ascending);
        assert_eq!(sorted[0].size, FishSize::Small);
        assert_eq!(sorted[0].fish, "Amur Minnow");
        assert_eq!(sorted[23].size, FishSize::Guardian);
        assert_eq!(sorted[26].size, FishSize::Unknown);

        let reversed = search_fish("", FishSortKey::Size, SortDirection::Descending);
        assert_eq!(names(&reversed[..3]), vec!["Dark Sleeper", "Koi", "Snakehead"]);
    }

    #[test]
    fn test_seasons_sort_compares_labels() {
        let sorted = search_fish("", FishSortKey::Seasons, SortDirection::Ascending);
        assert_eq!(sorted[0].seasons_label(), "All-Year Round");
        assert_eq!(sorted[0].fish, "Basa");
    }

    #[test]
    fn test_weather_sort_ignores_case() {
        let sorted = search_fish("", FishSortKey::Weather, SortDirection::Ascending);
        let labels: Vec<String> = sorted[19..].iter().map(|f| f.weather_label()).collect();
        assert_eq!(
            labels,
            vec![
                "Night",
                "Non-cloudy",
                "Non-Stormy Weather",
                "Non-sunny",
                "Non-sunny",
                "Sunny, Cloudy",
                "Sunny, Cloudy",
                "Sunny, Light Snow",
            ]
        );
    }

    #[test]
    fn test_collate_orders_case_insensitively() {
        assert_eq!(collate("Non-cloudy", "Non-Stormy Weather"), Ordering::Less);
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Koi", "Koi"), Ordering::Equal);
    }

    #[test]
    fn test_query_spans_adjacent_items() {
        let found = search_fish("spring autumn", FishSortKey::Name, SortDirection::Ascending);
        assert!(names(&found).contains(&"Amur Minnow"));

        let found = search_fish("zephyr town mountains", FishSortKey::Name, SortDirection::Ascending);
        assert!(names(&found).contains(&"Amur Minnow"));

        // Items are separated by a space, not a comma
        let found = search_fish("spring, autumn", FishSortKey::Name, SortDirection::Ascending);
        assert!(found.is_empty());
    }

    #[test]
    fn test_available_in_honors_all_year() {
        let winter = fish_in_season(Season::Winter);
        assert!(winter.iter().any(|f| f.fish == "Basa"));
        assert!(winter.iter().any(|f| f.fish == "Koi"));
        assert!(!winter.iter().any(|f| f.fish == "Tamoroko"));
    }

    #[test]
    fn test_labels_join_with_commas() {
        let koi = fish_list().iter().find(|f| f.fish == "Koi").unwrap();
        assert_eq!(koi.weather_label(), "Sunny, Light Snow");
        assert_eq!(koi.seasons_label(), "Winter");
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("VALUE".parse::<FishSortKey>().unwrap(), FishSortKey::Value);
        assert_eq!("location".parse::<FishSortKey>().unwrap(), FishSortKey::Locations);
        assert!(matches!(
            "price".parse::<FishSortKey>(),
            Err(AlmanacError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn test_direction_toggles() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::default().to_string(), "asc");
    }
}
