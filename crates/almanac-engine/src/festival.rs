//! Festival definitions and the per-season festival catalog.
//!
//! Festival days in this table are *canonical*: they are authored against
//! Year 1's weekday alignment (or Year 2's, for `extra_from_year2`). Use
//! [`crate::calendar::festivals_for`] to get the days a festival actually
//! falls on in a given year.

use serde::Serialize;

use crate::season::{Season, SEASON_DAYS};

/// A festival occurrence on a specific day of a season.
///
/// A festival with neither `close_at` nor `end_at` lasts all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Festival {
    /// Day of the season (1-based).
    pub day: u32,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
    /// Time at which the festival becomes available.
    pub open_at: &'static str,
    /// Time after which the festival can no longer be started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_at: Option<&'static str>,
    /// Time at which an already-started festival concludes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<&'static str>,
}

impl Festival {
    pub fn is_all_day(&self) -> bool {
        self.close_at.is_none() && self.end_at.is_none()
    }

    /// Opening window for display, e.g. `"12:00 PM - 4:00 PM"`.
    pub fn time_label(&self) -> String {
        match self.close_at {
            Some(close) => format!("{} - {}", self.open_at, close),
            None => self.open_at.to_string(),
        }
    }

    /// The same festival placed on a different day.
    pub fn with_day(&self, day: u32) -> Festival {
        Festival { day, ..*self }
    }
}

/// The festival catalog of one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonFestivals {
    pub season: Season,
    pub days: u32,
    /// Festivals held from Year 1 onward, at Year-1 canonical days.
    pub base: &'static [Festival],
    /// Festivals that first appear in Year 2, at Year-2 canonical days.
    pub extra_from_year2: &'static [Festival],
}

/// Look up the catalog entry for a season.
pub fn season_festivals(season: Season) -> &'static SeasonFestivals {
    &SEASON_FESTIVALS[season.index()]
}

// ── Festival definitions ────────────────────────────────────────────────────

const fn festival(
    day: u32,
    title: &'static str,
    open_at: &'static str,
    close_at: Option<&'static str>,
    notes: &'static str,
) -> Festival {
    Festival {
        day,
        title,
        notes: Some(notes),
        open_at,
        close_at,
        end_at: None,
    }
}

const fn flower_festival(day: u32) -> Festival {
    festival(
        day,
        "Flower Festival",
        "12:00 PM until the next day",
        None,
        "Give flowers to as many townsfolk as possible. Winner gets a trophy. Festival ends at noon on Wednesday.",
    )
}

const fn honey_day(day: u32) -> Festival {
    festival(
        day,
        "Honey Day",
        "12:00 PM",
        None,
        "Give honey or honey cake to villagers for friendship points. Honey counts as unique gift, allowing additional gifts.",
    )
}

const fn tea_party(day: u32) -> Festival {
    festival(
        day,
        "Tea Party",
        "12:00 PM",
        Some("4:00 PM"),
        "Bring any type of tea (leaves, cans, or cooked tea) to receive a gift in return. Skips time to 4pm.",
    )
}

const fn crops_show(day: u32) -> Festival {
    festival(
        day,
        "Crops Show",
        "12:00 PM",
        Some("4:00 PM"),
        "Enter your best harvested crop. Giant crops of highest quality win. Fresh crops only. Three tiers per crop type.",
    )
}

const fn pet_show(day: u32) -> Festival {
    festival(
        day,
        "Pet Show",
        "12:00 PM",
        Some("4:00 PM"),
        "Press command buttons in order to direct your pet. Success depends on pet bond level. Trophy for first place.",
    )
}

const fn animal_show(day: u32) -> Festival {
    festival(
        day,
        "Animal Show",
        "12:00 PM",
        Some("4:00 PM"),
        "Enter your barn animal with highest bond. Winning buffs all animals of that type and unlocks higher quality items.",
    )
}

const fn horse_derby(day: u32) -> Festival {
    festival(
        day,
        "Horse Derby",
        "12:00 PM",
        Some("4:00 PM"),
        "Race your horse through obstacles while collecting carrots for stamina. High bond required for higher tiers.",
    )
}

const fn cook_off(day: u32) -> Festival {
    festival(
        day,
        "Cook off",
        "12:00 PM",
        Some("4:00 PM"),
        "Make the most complicated dish with multiple ingredients and cooking tiers. Add unique ingredients for victory.",
    )
}

const fn bake_off(day: u32) -> Festival {
    festival(
        day,
        "Bake off",
        "12:00 PM",
        Some("4:00 PM"),
        "Make the most complicated baked dish with multiple ingredients and cooking tiers. Add unique ingredients for victory.",
    )
}

const fn juice_festival(day: u32) -> Festival {
    festival(
        day,
        "Juice Festival",
        "12:00 PM",
        Some("4:00 PM"),
        "Bring any type of juice to receive a gift in return. Free friendship points with all town members.",
    )
}

const fn pumpkin_festival(day: u32) -> Festival {
    festival(
        day,
        "Pumpkin Festival",
        "12:00 PM",
        Some("4:00 PM"),
        "Give treats to children visiting your home. Cookies (Egg + Wheat Flour) are simple treats. Stay at farm in afternoon.",
    )
}

const fn hearth_day(day: u32) -> Festival {
    festival(
        day,
        "Hearth Day",
        "9:00 AM",
        Some("4:00 PM"),
        "Give warm recipes to any person in town. Acts as special gift allowing additional normal gifts. Herb Soup recommended.",
    )
}

const fn starlight_night(day: u32) -> Festival {
    festival(
        day,
        "Starlight Night",
        "6:00 PM",
        Some("11:59 PM"),
        "Go on a date with romanceable character. Accept invitation day before. Cutscene brings you closer and gives heart points.",
    )
}

const fn new_year_countdown(day: u32) -> Festival {
    festival(
        day,
        "New Year Countdown",
        "10:00 PM",
        Some("12:00 AM"),
        "Meet everyone at town plaza for countdown cutscene. Starts the next year. Goes straight to bed after.",
    )
}

// ── Season catalog ──────────────────────────────────────────────────────────

/// Indexed by [`Season::index`].
static SEASON_FESTIVALS: [SeasonFestivals; 4] = [
    SeasonFestivals {
        season: Season::Spring,
        days: SEASON_DAYS,
        base: &[
            flower_festival(11),
            flower_festival(12),
            honey_day(21),
            tea_party(27),
        ],
        extra_from_year2: &[crops_show(26)],
    },
    SeasonFestivals {
        season: Season::Summer,
        days: SEASON_DAYS,
        base: &[pet_show(3), animal_show(11), horse_derby(16), crops_show(21)],
        extra_from_year2: &[],
    },
    SeasonFestivals {
        season: Season::Autumn,
        days: SEASON_DAYS,
        base: &[
            cook_off(4),
            bake_off(5),
            animal_show(15),
            juice_festival(21),
            crops_show(25),
            pumpkin_festival(28),
        ],
        extra_from_year2: &[],
    },
    SeasonFestivals {
        season: Season::Winter,
        days: SEASON_DAYS,
        base: &[
            pet_show(4),
            hearth_day(9),
            animal_show(12),
            horse_derby(17),
            crops_show(22),
            starlight_night(25),
            new_year_countdown(31),
        ],
        extra_from_year2: &[],
    },
];

// ── Tests ───────────────────────────────────────────────────────────────────
