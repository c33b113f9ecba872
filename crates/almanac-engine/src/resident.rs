//! Town residents: gift preferences, birthdays, and search.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AlmanacError;
use crate::season::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResidentGroup {
    Bachelors,
    Bachelorettes,
    Villagers,
}

impl ResidentGroup {
    pub fn name(self) -> &'static str {
        match self {
            ResidentGroup::Bachelors => "Bachelors",
            ResidentGroup::Bachelorettes => "Bachelorettes",
            ResidentGroup::Villagers => "Villagers",
        }
    }
}

impl fmt::Display for ResidentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which residents a search should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Group(ResidentGroup),
}

impl GroupFilter {
    pub fn admits(self, group: ResidentGroup) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Group(g) => g == group,
        }
    }
}

impl FromStr for GroupFilter {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(GroupFilter::All),
            "bachelors" | "bachelor" => Ok(GroupFilter::Group(ResidentGroup::Bachelors)),
            "bachelorettes" | "bachelorette" => {
                Ok(GroupFilter::Group(ResidentGroup::Bachelorettes))
            }
            "villagers" | "villager" => Ok(GroupFilter::Group(ResidentGroup::Villagers)),
            _ => Err(AlmanacError::InvalidGroup(format!("'{}'", s.trim()))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Birthday {
    pub season: Season,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resident {
    pub name: &'static str,
    pub group: ResidentGroup,
    pub favorite: &'static [&'static str],
    pub likes: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
    pub external_doc: &'static str,
}

impl Resident {
    /// Whether the lowercase `needle` occurs in any searchable field.
    fn matches(&self, needle: &str) -> bool {
        let haystack = std::iter::once(self.name)
            .chain(self.favorite.iter().copied())
            .chain(self.likes.iter().copied())
            .chain(std::iter::once(self.group.name()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        haystack.contains(needle)
    }
}

/// All residents, in display order.
pub fn residents() -> &'static [Resident] {
    RESIDENTS
}

/// Find a resident by exact name.
pub fn find_resident(name: &str) -> Option<&'static Resident> {
    RESIDENTS.iter().find(|r| r.name == name)
}

/// Filter residents by group and a free-text query.
///
/// The query is trimmed and matched case-insensitively as a substring of
/// the resident's name, favorites, likes, and group. An empty query matches
/// every resident in the group. Table order is preserved.
pub fn search_residents(query: &str, group: GroupFilter) -> Vec<&'static Resident> {
    let needle = query.trim().to_lowercase();
    RESIDENTS
        .iter()
        .filter(|r| group.admits(r.group))
        .filter(|r| needle.is_empty() || r.matches(&needle))
        .collect()
}

/// Step a selection index through a list of `len` items, wrapping at both ends.
///
/// Returns `None` when the list is empty. An out-of-range `current` is
/// treated as the first item.
pub fn cycle_selection(len: usize, current: usize, step: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = if current < len { current } else { 0 };
    let len = len as isize;
    Some((current as isize + step).rem_euclid(len) as usize)
}

/// Avatar image file name for a resident.
pub fn avatar_file(name: &str) -> String {
    format!("{}.webp", name.to_lowercase())
}

// ── Resident table ──────────────────────────────────────────────────────────

const fn born(season: Season, day: u32) -> Option<Birthday> {
    Some(Birthday { season, day })
}

macro_rules! doc {
    ($id:literal) => {
        concat!(
            "https://game8.co/games/Story-of-Seasons-Grand-Bazaar/archives/",
            $id
        )
    };
}

static RESIDENTS: &[Resident] = &[
    // Bachelors
    Resident {
        name: "Jules",
        group: ResidentGroup::Bachelors,
        favorite: &["Herbal Perfume"],
        likes: &["Herbs", "Perfumes", "Salads", "Chamomile", "Mint", "Floral Perfume"],
        birthday: born(Season::Autumn, 20),
        external_doc: doc!("543450"),
    },
    Resident {
        name: "Derek",
        group: ResidentGroup::Bachelors,
        favorite: &[
            "Cream Croquettes",
            "Rhinoceros Beetle",
            "Elephant Beetle",
            "Hercules Beetle",
            "Hot Pot",
        ],
        likes: &["Stag Beetles", "Curries", "Ricebowl Dishes", "Tea Leaves"],
        birthday: born(Season::Summer, 12),
        external_doc: doc!("543500"),
    },
    Resident {
        name: "Lloyd",
        group: ResidentGroup::Bachelors,
        favorite: &["Gold Medal", "Diamond", "Boullabaisse", "Paella"],
        likes: &["Fondues", "Bugs", "Juices", "Magic Blue Flower", "Smallheaded Locusts"],
        birthday: born(Season::Autumn, 3),
        external_doc: doc!("543501"),
    },
    Resident {
        name: "Gabriel",
        group: ResidentGroup::Bachelors,
        favorite: &["Omelet Rice", "Tofu"],
        likes: &["Gratin", "Fruit Dishes", "Ice Cream", "Pizza", "Sweets"],
        birthday: born(Season::Winter, 28),
        external_doc: doc!("543502"),
    },
    Resident {
        name: "Samir",
        group: ResidentGroup::Bachelors,
        favorite: &["Cooked Rice", "Chocolate-Covered Banana", "Cookies", "Stew"],
        likes: &["Rice", "Rice Dishes", "Grilled Fish", "Stag Beetles"],
        birthday: born(Season::Winter, 26),
        external_doc: doc!("543503"),
    },
    Resident {
        name: "Arata",
        group: ResidentGroup::Bachelors,
        favorite: &["Unadon", "Warm Milk", "Rainbow Curry"],
        likes: &["Milk", "Sashimi", "Onigiri", "Omelet", "Fishes", "Curries"],
        birthday: born(Season::Winter, 17),
        external_doc: doc!("543504"),
    },
    // Bachelorettes
    Resident {
        name: "Sophie",
        group: ResidentGroup::Bachelorettes,
        favorite: &["Herb Salad"],
        likes: &["Pickles", "Salads", "Moondrop Flower", "Rice Porridge"],
        birthday: born(Season::Spring, 16),
        external_doc: doc!("543485"),
    },
    Resident {
        name: "June",
        group: ResidentGroup::Bachelorettes,
        favorite: &["Cherry Tea"],
        likes: &["Accessories", "Teas", "Frogs"],
        birthday: born(Season::Winter, 12),
        external_doc: doc!("543486"),
    },
    Resident {
        name: "Freya",
        group: ResidentGroup::Bachelorettes,
        favorite: &[
            "Pizza",
            "Citrus Perfume",
            "Moonstone",
            "Peridot",
            "Topaz",
            "Sandstone",
            "Any Gem",
        ],
        likes: &["Accessories", "Jewels", "Swallowtail Butterfly", "Warm Milk"],
        birthday: born(Season::Autumn, 25),
        external_doc: doc!("543487"),
    },
    Resident {
        name: "Maple",
        group: ResidentGroup::Bachelorettes,
        favorite: &["Engadiner Nusstorte", "Cookies", "Pancakes", "Churros"],
        likes: &["Sweets", "Flowers", "Butterflies", "Honey Juice", "Walnut Juice"],
        birthday: born(Season::Autumn, 14),
        external_doc: doc!("543488"),
    },
    Resident {
        name: "Kagetsu",
        group: ResidentGroup::Bachelorettes,
        favorite: &["Soy Milk Pudding"],
        likes: &["Soy Milk", "Tofu Dishes", "Vegetable Dishes", "Crops"],
        birthday: born(Season::Spring, 5),
        external_doc: doc!("543489"),
    },
    Resident {
        name: "Diana",
        group: ResidentGroup::Bachelorettes,
        favorite: &["Apple Pie", "Apple Jam", "Apple Juice"],
        likes: &["Apples", "Teas", "Butterflies", "Cookies", "Pancakes", "Ice Cream"],
        birthday: born(Season::Autumn, 22),
        external_doc: doc!("543490"),
    },
    // Villagers
    Resident {
        name: "Felix",
        group: ResidentGroup::Villagers,
        favorite: &["Spicy Curry", "Bouillabaisse", "Rainbow Curry", "Rice Gratin"],
        likes: &["Curries", "Stag Beetles", "Magic Red Grass", "Cheese", "Risotto"],
        birthday: born(Season::Summer, 1),
        external_doc: doc!("543871"),
    },
    Resident {
        name: "Erik",
        group: ResidentGroup::Villagers,
        favorite: &["Black Tea", "Chamomile Tea", "Any Spring Blend Tea"],
        likes: &[
            "Teas",
            "Juices",
            "Salads",
            "Pancakes",
            "Onion Salad",
            "Cafe au Lait",
            "Green Tea",
        ],
        birthday: born(Season::Spring, 20),
        external_doc: doc!("543873"),
    },
    Resident {
        name: "Stuart",
        group: ResidentGroup::Villagers,
        favorite: &["Mont Blanc Cake", "Pasta", "Spring Tea"],
        likes: &["Noodles", "Teas", "Pickles", "Honey Juice", "Fried Egg"],
        birthday: born(Season::Autumn, 11),
        external_doc: doc!("543874"),
    },
    Resident {
        name: "Sonia",
        group: ResidentGroup::Villagers,
        favorite: &[
            "Strawberry Juice",
            "Tomato Juice",
            "Any fruit juice",
            "Strawberry Pie",
            "Cherry Tea",
        ],
        likes: &["Juices", "Teas", "Wild Herbs", "Poached Egg", "Toy Flower"],
        birthday: born(Season::Spring, 25),
        external_doc: doc!("543875"),
    },
    Resident {
        name: "Madeleine",
        group: ResidentGroup::Villagers,
        favorite: &["Fruit Sandwich", "Strawberry Pie"],
        likes: &["Pies", "Wild Herbs", "Fruits Dishes", "Strawberry", "Rice Flour"],
        birthday: born(Season::Spring, 18),
        external_doc: doc!("543876"),
    },
    Resident {
        name: "Mina",
        group: ResidentGroup::Villagers,
        favorite: &["Herb Pasta", "Mushroom Pasta"],
        likes: &["Herbs", "Herbs Dishes", "Wild Herbs", "Cookies", "Pansy"],
        birthday: born(Season::Winter, 4),
        external_doc: doc!("543877"),
    },
    Resident {
        name: "Wilbur",
        group: ResidentGroup::Villagers,
        favorite: &["Steamed Mushroom"],
        likes: &["Eggplant Dishes", "Fishes", "Beetles", "Cooked Rice"],
        birthday: born(Season::Summer, 3),
        external_doc: doc!("543878"),
    },
    Resident {
        name: "Clara",
        group: ResidentGroup::Villagers,
        favorite: &["Pickled Broccoli", "Pickled Onion", "Any Pickles"],
        likes: &["Pickles", "Homemade Dishes", "Mushrooms", "Soy Milk", "Chamomile"],
        birthday: born(Season::Autumn, 29),
        external_doc: doc!("543879"),
    },
    Resident {
        name: "Kevin",
        group: ResidentGroup::Villagers,
        favorite: &[
            "Giant Stag Beetle",
            "Smallheaded Locust",
            "Ruby Ladybug",
            "Swallowtail Butterfly",
            "Tree Frog",
            "Opal Cicada",
            "Seven-Spotted Ladybug",
        ],
        likes: &[
            "Bugs",
            "Sweets",
            "Curries",
            "Dumplings (Stone, Wood)",
            "Butterfly Sticker",
        ],
        birthday: born(Season::Summer, 25),
        external_doc: doc!("543880"),
    },
    Resident {
        name: "Isaac",
        group: ResidentGroup::Villagers,
        favorite: &["Jam-Filled Bun", "Sandwich"],
        likes: &["Sandwiches", "Sweets", "Cicadas"],
        birthday: born(Season::Autumn, 6),
        external_doc: doc!("543881"),
    },
    Resident {
        name: "Nadine",
        group: ResidentGroup::Villagers,
        favorite: &["Milk+", "Floral Perfume", "Milk Rice Porridge", "Herb Soup"],
        likes: &["Soups", "Warm Milk", "Pickles", "Pale Chub"],
        birthday: born(Season::Summer, 30),
        external_doc: doc!("543882"),
    },
    Resident {
        name: "Sylvia",
        group: ResidentGroup::Villagers,
        favorite: &["Donuts", "Baked Sweet Potato", "Omelet"],
        likes: &["Sweets", "Egg Dishes", "Fishes", "Pasta"],
        birthday: born(Season::Autumn, 18),
        external_doc: doc!("543883"),
    },
    Resident {
        name: "Laurie",
        group: ResidentGroup::Villagers,
        favorite: &["Sweet Potato Cakes", "Baked Sweet Potato", "Omelet"],
        likes: &["Sweets", "Herbs", "Fireflies", "Popcorn"],
        birthday: born(Season::Autumn, 18),
        external_doc: doc!("543884"),
    },
    Resident {
        name: "Harold",
        group: ResidentGroup::Villagers,
        favorite: &["Supreme Curry", "Soy Milk Pudding"],
        likes: &["Puddings", "Teas", "Beetles"],
        birthday: born(Season::Summer, 7),
        external_doc: doc!("547034"),
    },
    Resident {
        name: "Sherene",
        group: ResidentGroup::Villagers,
        favorite: &["Seaweed Curry"],
        likes: &["Chocolate Dishes", "Marigold", "Wild Herbs"],
        birthday: None,
        external_doc: doc!("547035"),
    },
    Resident {
        name: "Miguel",
        group: ResidentGroup::Villagers,
        favorite: &[
            "Croquettes",
            "Black Necklace",
            "Chartreuse Brooch",
            "Black Firefly",
            "French Fries",
        ],
        likes: &["Accessories", "Fireflies", "Magic Red Grass", "Medal", "Bread"],
        birthday: born(Season::Summer, 21),
        external_doc: doc!("543872"),
    },
];

// ── Tests ───────────────────────────────────────────────────────────────────
