use chrono::NaiveDate;
use plwordle_server::game::format::{
    age_in_years, height_display, jersey_display, team_abbreviation, team_label,
};

#[test]
fn abbreviation_strips_lowercase_and_whitespace() {
    assert_eq!(team_abbreviation("Arsenal"), "A");
    assert_eq!(team_abbreviation("Manchester United"), "MU");
    assert_eq!(team_abbreviation("AFC Bournemouth"), "AFCB");
    assert_eq!(team_abbreviation("Tottenham Hotspur"), "TH");
}

#[test]
fn age_on_exact_birthday() {
    let dob = NaiveDate::from_ymd_opt(2006, 8, 7).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(age_in_years(dob, today), 20);
}

#[test]
fn age_day_before_birthday() {
    let dob = NaiveDate::from_ymd_opt(2006, 8, 8).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(age_in_years(dob, today), 19);
}

#[test]
fn height_formats_feet_and_inches() {
    // 183 cm → 72 in → 6'0"
    assert_eq!(height_display(183.0), "6'0\"");
    // 170 cm → 66 in → 5'6"
    assert_eq!(height_display(170.0), "5'6\"");
    // 195 cm → 76 in → 6'4"
    assert_eq!(height_display(195.0), "6'4\"");
}

#[test]
fn jersey_gets_hash_prefix() {
    assert_eq!(jersey_display(7), "#7");
    assert_eq!(jersey_display(41), "#41");
}

#[test]
fn team_label_carries_badge_when_affiliated() {
    let label = team_label("Arsenal", Some("/badges/arsenal.png".into()));
    assert_eq!(label.name, "Arsenal");
    assert_eq!(label.abbrev, "A");
    assert_eq!(label.img_url.as_deref(), Some("/badges/arsenal.png"));
}

#[test]
fn team_label_placeholder_without_badge() {
    // No affiliated team matched the recorded current-team string.
    let label = team_label("Signed Yesterday FC", None);
    assert_eq!(label.name, "Signed Yesterday FC");
    assert!(label.img_url.is_none());
}
