use chrono::{Duration, NaiveDate, NaiveDateTime};
use dasha_overview::core::{period_table, resolve_active, Hierarchy};
use dasha_overview::error::DashaError;
use dasha_overview::time::{format_instant, is_active, stringify_timestamp, check_interval};
use dasha_overview::{normalize_response, parse_timestamp, DashaLevel, DisplayDate, PeriodRecord};
use serde_json::json;

fn at(raw: &str) -> NaiveDateTime {
    parse_timestamp(raw).unwrap()
}

fn year_2020(planet: &str) -> PeriodRecord {
    PeriodRecord::new(planet, "1-1-2020  0:0", "31-12-2020  23:59")
}

fn year_2019(planet: &str) -> PeriodRecord {
    PeriodRecord::new(planet, "1-1-2019  0:0", "31-12-2019  23:59")
}

#[test]
fn parse_format_round_trip_at_minute_precision() {
    let mut instant = NaiveDate::from_ymd_opt(1999, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 42)
        .unwrap();
    for _ in 0..40 {
        let reparsed = parse_timestamp(&stringify_timestamp(&instant).unwrap()).unwrap();
        assert_eq!(format_instant(Some(reparsed)), format_instant(Some(instant)));
        assert_eq!(reparsed.date(), instant.date());
        instant += Duration::days(211) + Duration::minutes(97);
    }
}

#[test]
fn boundaries_inclusive_and_outside_false() {
    let start = at("1-1-2020  0:0");
    let end = at("31-12-2020  23:59");
    assert!(is_active(start, start, end));
    assert!(is_active(end, start, end));
    assert!(is_active(at("15-6-2020  12:0"), start, end));
    assert!(!is_active(start - Duration::minutes(1), start, end));
    assert!(!is_active(end + Duration::minutes(1), start, end));
}

#[test]
fn end_before_start_is_inactive_and_flagged() {
    let start = at("1-1-2020  0:0");
    let end = at("31-12-2019  23:59");
    assert!(!is_active(at("15-6-2020  12:0"), start, end));
    assert!(matches!(
        check_interval(start, start, end),
        Err(DashaError::InvalidInterval { .. })
    ));
}

#[test]
fn malformed_raw_string_fails_and_resolver_continues() {
    assert!(matches!(
        parse_timestamp("2020-01-01"),
        Err(DashaError::MalformedTimestamp { .. })
    ));

    let h = Hierarchy::new()
        .with_level(
            DashaLevel::Major,
            vec![PeriodRecord::new("Sun", "2020-01-01", "31-12-2020  23:59")],
        )
        .with_level(DashaLevel::Minor, vec![year_2020("Moon")]);
    let resolution = resolve_active(&h, at("15-6-2020  12:0"));
    assert_eq!(resolution.skipped, 1);
    assert_eq!(resolution.entries.len(), 1);
    assert_eq!(resolution.entries[0].level(), DashaLevel::Minor);
}

#[test]
fn first_match_wins_for_overlapping_periods() {
    let h = Hierarchy::new().with_level(
        DashaLevel::SubMinor,
        vec![year_2019("Mars"), year_2020("Jupiter"), year_2020("Saturn")],
    );
    let resolution = resolve_active(&h, at("15-6-2020  12:0"));
    assert_eq!(resolution.entries[0].period.planet, "Jupiter");
}

#[test]
fn unsorted_list_still_matches() {
    let h = Hierarchy::new().with_level(
        DashaLevel::Major,
        vec![year_2020("Venus"), year_2019("Mercury")],
    );
    let resolution = resolve_active(&h, at("1-3-2019  0:0"));
    assert_eq!(resolution.entries[0].period.planet, "Mercury");
}

#[test]
fn shape_agnostic_equivalence() {
    let period = json!({"planet": "Sun", "start": "1-1-2020  0:0", "end": "31-12-2020  23:59"});
    let current = normalize_response(&json!({ "MahaDasha": period }).to_string()).unwrap();
    let legacy = normalize_response(
        &json!({ "dasha_period": { "MahaDasha": [ {"planet": "Mars", "start": "1-1-2010  0:0", "end": "31-12-2019  23:59"}, period ] } })
            .to_string(),
    )
    .unwrap();

    let now = at("15-6-2020  12:0");
    let a = resolve_active(&current, now);
    let b = resolve_active(&legacy, now);
    assert_eq!(a.rows(), b.rows());
    assert_eq!(a.entries[0].period, b.entries[0].period);
}

#[test]
fn level_order_preserved_with_gaps() {
    let h = Hierarchy::new()
        .with_level(DashaLevel::SubSubSubMinor, vec![year_2019("Ketu")])
        .with_level(DashaLevel::SubMinor, vec![year_2020("Rahu")])
        .with_level(DashaLevel::SubSubMinor, vec![year_2019("Moon")])
        .with_level(DashaLevel::Minor, vec![year_2019("Venus")])
        .with_level(DashaLevel::Major, vec![year_2020("Sun")]);
    let resolution = resolve_active(&h, at("15-6-2020  12:0"));
    let levels: Vec<String> = resolution.rows().into_iter().map(|r| r.level).collect();
    assert_eq!(levels, vec!["Major", "Sub-minor"]);
}

#[test]
fn only_major_in_new_shape_gives_single_entry() {
    let h = normalize_response(
        r#"{"MahaDasha": {"planet": "Saturn", "start": "6-6-2020  0:0", "end": "6-6-2039  0:0"}}"#,
    )
    .unwrap();
    let rows = resolve_active(&h, at("15-6-2020  12:0")).rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].level, "Major");
    assert_eq!(rows[0].planet, "Saturn");
    assert_eq!(rows[0].start_display.as_str(), "Jun 6, 2020");
    assert_eq!(rows[0].end_display.as_str(), "Jun 6, 2039");
}

#[test]
fn empty_hierarchy_gives_empty_list() {
    let h = normalize_response("{}").unwrap();
    let resolution = resolve_active(&h, at("15-6-2020  12:0"));
    assert!(resolution.rows().is_empty());
    assert_eq!(resolution.skipped, 0);
}

#[test]
fn rows_serialize_with_camel_case_keys() {
    let h = Hierarchy::new().with_level(DashaLevel::Minor, vec![year_2020("Moon")]);
    let rows = resolve_active(&h, at("15-6-2020  12:0")).rows();
    let value = serde_json::to_value(&rows).unwrap();
    assert_eq!(
        value,
        json!([{"level": "Minor", "planet": "Moon", "startDisplay": "Jan 1, 2020", "endDisplay": "Dec 31, 2020"}])
    );
}

#[test]
fn table_row_highlight_matches_overview() {
    let h = Hierarchy::new().with_level(
        DashaLevel::Major,
        vec![year_2019("Mars"), year_2020("Rahu")],
    );
    let now = at("15-6-2020  12:0");
    let table = period_table(&h, DashaLevel::Major, now);
    let active_index = resolve_active(&h, now).entries[0].index;
    assert!(table[active_index].is_active);
    assert_eq!(table.iter().filter(|r| r.is_active).count(), 1);
    assert_eq!(table[0].end_display, DisplayDate::from(at("31-12-2019  23:59")));
}

#[test]
fn null_boundary_in_one_record_leaves_other_levels_resolving() {
    let body = json!({
        "dasha_period": {
            "MahaDasha": [
                {"planet": null, "start": null, "end": "1-1-2016  0:0"},
                {"planet": "Sun", "start": "1-1-2016  0:0", "end": "1-1-2026  0:0"}
            ],
            "AntarDasha": [{"planet": "Moon", "start": "1-1-2020  0:0", "end": "31-12-2020  23:59"}]
        }
    })
    .to_string();
    let hierarchy = normalize_response(&body).unwrap();
    let resolution = resolve_active(&hierarchy, at("15-6-2020  12:0"));

    let planets: Vec<&str> = resolution.entries.iter().map(|e| e.period.planet.as_str()).collect();
    assert_eq!(planets, ["Sun", "Moon"]);
    assert_eq!(resolution.skipped, 1);
    assert!(matches!(
        resolution.diagnostics[0],
        DashaError::MalformedTimestamp { .. }
    ));
}
