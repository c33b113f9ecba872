use assert_cmd::Command;
use predicates::prelude::*;

fn almanac() -> Command {
    Command::cargo_bin("almanac").unwrap()
}

// ── calendar ────────────────────────────────────────────────────────────────

#[test]
fn test_calendar_defaults_to_year1_spring() {
    almanac()
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year 1 - Spring\n"))
        .stdout(predicate::str::contains("Flower Festival"))
        .stdout(predicate::str::contains("Kagetsu's Birthday"));
}

#[test]
fn test_calendar_json_has_events_by_day() {
    let output = almanac()
        .args(["calendar", "--year", "2", "--season", "spring", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["year"], 2);
    assert_eq!(json["season"], "Spring");
    assert_eq!(json["start_weekday"], 4);
    assert_eq!(json["events"]["13"][0]["title"], "Flower Festival");
    assert_eq!(json["events"]["26"][0]["title"], "Crops Show");
    assert_eq!(json["cells"].as_array().unwrap().len() % 7, 0);
}

#[test]
fn test_calendar_show_filter() {
    let output = almanac()
        .args(["calendar", "--show", "birthday", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for events in json["events"].as_object().unwrap().values() {
        for event in events.as_array().unwrap() {
            assert_eq!(event["type"], "birthday");
        }
    }
}

#[test]
fn test_calendar_query_selects_season() {
    almanac()
        .args(["calendar", "--query", "year=3&season=Winter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year 3 - Winter\n"));
}

#[test]
fn test_calendar_next_rolls_into_new_year() {
    almanac()
        .args(["calendar", "--year", "1", "--season", "winter", "--next"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year 2 - Spring\n"));
}

#[test]
fn test_calendar_prev_at_first_season_fails() {
    almanac()
        .args(["calendar", "--prev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already at the first season"));
}

#[test]
fn test_calendar_rejects_year_zero() {
    almanac()
        .args(["calendar", "--year", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid year"));
}

#[test]
fn test_calendar_rejects_unknown_season() {
    almanac()
        .args(["calendar", "--season", "monsoon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid season"));
}

#[test]
fn test_calendar_state_file_is_written_and_reused() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("calendar.json");

    almanac()
        .args(["calendar", "--year", "5", "--season", "autumn", "--state"])
        .arg(&state)
        .assert()
        .success();
    let saved = std::fs::read_to_string(&state).unwrap();
    assert_eq!(saved, r#"{"year":5,"season":"Autumn"}"#);

    almanac()
        .args(["calendar", "--next", "--state"])
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year 5 - Winter\n"));
    let saved = std::fs::read_to_string(&state).unwrap();
    assert_eq!(saved, r#"{"year":5,"season":"Winter"}"#);
}

#[test]
fn test_calendar_ignores_corrupt_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("calendar.json");
    std::fs::write(&state, "{ not json").unwrap();

    almanac()
        .args(["calendar", "--state"])
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year 1 - Spring\n"));
}

// ── festivals / weekday ─────────────────────────────────────────────────────

#[test]
fn test_festivals_year1_spring() {
    almanac()
        .args(["festivals", "--season", "spring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 Tuesday   Flower Festival"))
        .stdout(predicate::str::contains("Crops Show").not());
}

#[test]
fn test_festivals_json_shifted_days() {
    let output = almanac()
        .args(["festivals", "--year", "2", "--season", "winter", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days"], 31);
    let countdown = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["title"] == "New Year Countdown")
        .unwrap();
    assert_eq!(countdown["day"], 26);
}

#[test]
fn test_weekday_of_first_day() {
    almanac()
        .args(["weekday", "--year", "1", "--season", "spring"])
        .assert()
        .success()
        .stdout("Spring 1, Year 1: Saturday (Bazaar Day)\n");
}

#[test]
fn test_weekday_json() {
    let output = almanac()
        .args(["weekday", "-y", "1", "-s", "summer", "-d", "3", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["weekday_index"], 4);
    assert_eq!(json["weekday"], "Thu");
    assert_eq!(json["bazaar_day"], false);
}

#[test]
fn test_weekday_rejects_day_out_of_season() {
    almanac()
        .args(["weekday", "--day", "32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day"));
}

// ── residents / fish ────────────────────────────────────────────────────────

#[test]
fn test_residents_search() {
    almanac()
        .args(["residents", "--query", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diana"))
        .stdout(predicate::str::ends_with("1 resident\n"));
}

#[test]
fn test_residents_group_json() {
    let output = almanac()
        .args(["residents", "--group", "bachelors", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert!(list.iter().all(|r| r["group"] == "Bachelors"));
}

#[test]
fn test_residents_rejects_unknown_group() {
    almanac()
        .args(["residents", "--group", "wizards"])
        .assert()
        .failure();
}

#[test]
fn test_fish_sorted_by_value_descending() {
    let output = almanac()
        .args(["fish", "--sort", "value", "--desc", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list[0]["fish"], "Nile Perch");
    assert!(list.last().unwrap()["base_value"].is_null());
}

#[test]
fn test_fish_season_filter() {
    almanac()
        .args(["fish", "--season", "winter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Koi"))
        .stdout(predicate::str::contains("Tamoroko").not());
}
