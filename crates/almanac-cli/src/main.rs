//! CLI for the in-game calendar, resident directory, and fish catalog.

mod render;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use almanac_engine::calendar::{weekday_index, weekday_of};
use almanac_engine::{
    festivals_for, is_bazaar_day, residents, search_fish, search_residents, start_weekday,
    AlmanacError, CalendarView, EventFilter, FishSortKey, GroupFilter, Season, SortDirection,
};
use anyhow::{bail, Context, Result};
use chrono::Weekday;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "almanac")]
#[command(about = "Browse the in-game calendar, residents, and fish", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid and events of a season
    Calendar {
        #[command(flatten)]
        date: DateArgs,

        /// Which events to show: all, festival, birthday
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        show: EventFilter,

        /// URL-style selection, e.g. "year=2&season=Summer"
        #[arg(long)]
        query: Option<String>,

        /// JSON file remembering the last selected year and season
        #[arg(long)]
        state: Option<PathBuf>,

        /// Move one season forward before rendering
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Move one season back before rendering
        #[arg(long)]
        prev: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List a season's festivals on their days for a given year
    Festivals {
        #[command(flatten)]
        date: DateArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the weekday a season starts on, or of a specific day
    Weekday {
        #[command(flatten)]
        date: DateArgs,

        /// Day of the season (1-31)
        #[arg(short, long)]
        day: Option<u32>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search residents by name, gifts, or group
    Residents {
        /// Case-insensitive text to look for
        #[arg(short, long, default_value = "")]
        query: String,

        /// all, bachelors, bachelorettes, villagers
        #[arg(short, long, default_value = "all", value_parser = parse_group)]
        group: GroupFilter,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search and sort the fish catalog
    Fish {
        /// Case-insensitive text to look for
        #[arg(short, long, default_value = "")]
        query: String,

        /// name, size, seasons, weather, locations, value
        #[arg(short, long, default_value = "name", value_parser = parse_sort_key)]
        sort: FishSortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Only fish catchable in this season
        #[arg(long, value_parser = parse_season)]
        season: Option<Season>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct DateArgs {
    /// In-game year (starts at 1)
    #[arg(short, long)]
    year: Option<u32>,

    /// Spring, Summer, Autumn, or Winter
    #[arg(short, long, value_parser = parse_season)]
    season: Option<Season>,
}

impl DateArgs {
    fn or_default(&self) -> (u32, Season) {
        (self.year.unwrap_or(1), self.season.unwrap_or(Season::Spring))
    }
}

fn parse_season(s: &str) -> Result<Season, AlmanacError> {
    s.parse()
}

fn parse_filter(s: &str) -> Result<EventFilter, AlmanacError> {
    s.parse()
}

fn parse_group(s: &str) -> Result<GroupFilter, AlmanacError> {
    s.parse()
}

fn parse_sort_key(s: &str) -> Result<FishSortKey, AlmanacError> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Calendar {
            date,
            show,
            query,
            state,
            next,
            prev,
            json,
        } => calendar(&date, show, query.as_deref(), state.as_deref(), next, prev, json),
        Commands::Festivals { date, json } => festivals(&date, json),
        Commands::Weekday { date, day, json } => weekday(&date, day, json),
        Commands::Residents { query, group, json } => {
            let found = search_residents(&query, group);
            if json {
                print_json(&found)
            } else {
                print!("{}", render::residents(&found));
                Ok(())
            }
        }
        Commands::Fish {
            query,
            sort,
            desc,
            season,
            json,
        } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let mut found = search_fish(&query, sort, direction);
            if let Some(season) = season {
                found.retain(|f| f.available_in(season));
            }
            if json {
                print_json(&found)
            } else {
                print!("{}", render::fish(&found));
                Ok(())
            }
        }
    }
}

/// Logs go to stderr so that stdout stays parseable.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("almanac=debug,almanac_engine=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn calendar(
    date: &DateArgs,
    show: EventFilter,
    query: Option<&str>,
    state: Option<&Path>,
    next: bool,
    prev: bool,
    json: bool,
) -> Result<()> {
    let stored = match state {
        Some(path) => read_state(path)?,
        None => None,
    };

    let mut view = CalendarView::restore(query, stored.as_deref()).with_filter(show);
    if let Some(year) = date.year {
        view = CalendarView::new(year, view.season, show)?;
    }
    if let Some(season) = date.season {
        view.season = season;
    }
    if next {
        view = view.next();
    }
    if prev {
        view = match view.previous() {
            Some(previous) => previous,
            None => bail!("already at the first season (Year 1 Spring)"),
        };
    }
    debug!(query = %view.to_query(), filter = %view.filter, "rendering calendar");

    if let Some(path) = state {
        let contents = view.to_stored_json()?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write state file {}", path.display()))?;
    }

    let month = view.month(residents())?;
    if json {
        print_json(&month)
    } else {
        print!("{}", render::month(&month));
        Ok(())
    }
}

/// A missing state file is not an error: it is created on first write.
fn read_state(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no stored calendar state yet");
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to read state file {}", path.display()))
        }
    }
}

fn festivals(date: &DateArgs, json: bool) -> Result<()> {
    let (year, season) = date.or_default();
    let schedule = festivals_for(year, season)?;
    if json {
        return print_json(&schedule);
    }

    let weekdays = schedule
        .events
        .iter()
        .map(|f| weekday_of(year, season, f.day).map(weekday_name))
        .collect::<Result<Vec<_>, _>>()?;
    print!("{}", render::schedule(&schedule, &weekdays));
    Ok(())
}

#[derive(Serialize)]
struct WeekdayReport {
    year: u32,
    season: Season,
    day: u32,
    /// 0 = Sunday … 6 = Saturday.
    weekday_index: u32,
    weekday: Weekday,
    bazaar_day: bool,
}

fn weekday(date: &DateArgs, day: Option<u32>, json: bool) -> Result<()> {
    let (year, season) = date.or_default();
    let day = day.unwrap_or(1);
    let index = weekday_index(year, season, day)?;
    let report = WeekdayReport {
        year,
        season,
        day,
        weekday_index: index,
        weekday: weekday_of(year, season, day)?,
        bazaar_day: is_bazaar_day(year, season, day)?,
    };
    debug!(start = start_weekday(year, season)?, "season start weekday");

    if json {
        return print_json(&report);
    }
    let bazaar = if report.bazaar_day { " (Bazaar Day)" } else { "" };
    println!(
        "{} {}, Year {}: {}{}",
        season,
        day,
        year,
        weekday_name(report.weekday),
        bazaar
    );
    Ok(())
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
