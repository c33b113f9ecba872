//! Plain-text rendering for terminal output.

use std::fmt::Write;

use almanac_engine::{
    CombinedEvent, EventKind, FishEntry, GridCell, MonthView, Resident, SeasonSchedule,
};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 6;

/// Render a month as a 7-column grid followed by its event list.
///
/// Days with festivals are marked `F`, days with birthdays `B`, and the
/// bazaar column (Saturday) is flagged in the header.
pub fn month(view: &MonthView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Year {} - {}", view.year, view.season);

    for (i, header) in WEEKDAY_HEADERS.iter().enumerate() {
        let label = if i == 6 { "Sat*" } else { header };
        let _ = write!(out, "{:>width$}", label, width = CELL_WIDTH);
    }
    out.push('\n');

    for week in view.cells.chunks(7) {
        for cell in week {
            let text = match cell {
                GridCell::Empty => String::new(),
                GridCell::Day(day) => format!("{}{}", day.day, markers(view.events_on(day.day))),
            };
            let _ = write!(out, "{:>width$}", text, width = CELL_WIDTH);
        }
        out.push('\n');
    }
    out.push_str("  * Bazaar Day\n");

    if view.events.is_empty() {
        out.push_str("\nNo events this season.\n");
        return out;
    }

    out.push_str("\nEvents:\n");
    for events in view.events.values() {
        for event in events {
            let _ = writeln!(out, "{}", event_line(event));
        }
    }
    out
}

fn markers(events: &[CombinedEvent]) -> String {
    let mut marks = String::new();
    if events.iter().any(|e| e.kind == EventKind::Festival) {
        marks.push('F');
    }
    if events.iter().any(|e| e.kind == EventKind::Birthday) {
        marks.push('B');
    }
    marks
}

fn event_line(event: &CombinedEvent) -> String {
    match &event.festival {
        Some(festival) => {
            let all_day = if festival.is_all_day() { ", all day" } else { "" };
            format!(
                "  {:>2}  {}  ({}{})",
                event.day,
                event.title,
                festival.time_label(),
                all_day
            )
        }
        None => format!("  {:>2}  {}", event.day, event.title),
    }
}

/// Render a season's festival schedule, one festival per block.
pub fn schedule(schedule: &SeasonSchedule, weekdays: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Year {} - {} festivals", schedule.year, schedule.season);
    for (festival, weekday) in schedule.events.iter().zip(weekdays) {
        let _ = writeln!(
            out,
            "  {:>2} {:<9} {}  ({})",
            festival.day,
            weekday,
            festival.title,
            festival.time_label()
        );
        if let Some(end) = festival.end_at {
            let _ = writeln!(out, "               Ends at: {}", end);
        }
        if let Some(notes) = festival.notes {
            let _ = writeln!(out, "               {}", notes);
        }
    }
    out
}

pub fn residents(found: &[&Resident]) -> String {
    let mut out = String::new();
    for r in found {
        let birthday = r
            .birthday
            .map(|b| format!("{} {}", b.season, b.day))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<10} {:<13} {:<10} {}",
            r.name,
            r.group,
            birthday,
            r.favorite.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "{} resident{}",
        found.len(),
        if found.len() == 1 { "" } else { "s" }
    );
    out
}

pub fn fish(found: &[&FishEntry]) -> String {
    let mut out = String::new();
    for f in found {
        let value = f
            .base_value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        let _ = writeln!(
            out,
            "{:<16} {:<9} {:>5}  {}  |  {}  |  {}",
            f.fish,
            f.size.name(),
            value,
            f.seasons_label(),
            f.weather_label(),
            f.locations_label()
        );
    }
    let _ = writeln!(out, "{} fish", found.len());
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_engine::{month_view, residents as all_residents, EventFilter, Season};

    #[test]
    fn test_month_grid_has_header_and_six_weeks() {
        let view = month_view(1, Season::Spring, EventFilter::All, &[]).unwrap();
        let text = month(&view);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Year 1 - Spring");
        assert!(lines[1].ends_with("Sat*"));
        // Year 1 Spring starts on Saturday: day 1 is the last cell of week one
        assert!(lines[2].trim_end().ends_with('1'));
        assert_eq!(lines[2].trim(), "1");
        assert!(text.contains("  11  Flower Festival  (12:00 PM until the next day, all day)"));
    }

    #[test]
    fn test_month_marks_event_days() {
        let view = month_view(1, Season::Spring, EventFilter::All, all_residents()).unwrap();
        let text = month(&view);
        assert!(text.contains("11F"));
        // Kagetsu's birthday on Spring 5
        assert!(text.contains("5B"));
        assert!(text.contains("   5  Kagetsu's Birthday"));
    }

    #[test]
    fn test_month_without_events() {
        let view = month_view(1, Season::Spring, EventFilter::Birthday, &[]).unwrap();
        assert!(month(&view).contains("No events this season."));
    }

    #[test]
    fn test_resident_count_pluralizes() {
        let one: Vec<_> = all_residents().iter().take(1).collect();
        assert!(residents(&one).ends_with("1 resident\n"));
        let two: Vec<_> = all_residents().iter().take(2).collect();
        assert!(residents(&two).ends_with("2 residents\n"));
    }
}
