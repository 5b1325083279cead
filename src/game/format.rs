//! Display derivations for revealed guesses. Pure, no persistence.

use chrono::NaiveDate;
use serde::Serialize;

/// Team cell of the reveal table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamLabel {
    pub name: String,
    pub abbrev: String,
    /// Badge of the matching affiliated team; `None` for the placeholder.
    pub img_url: Option<String>,
}

/// Crude acronym: keep everything that is not an ASCII lowercase letter or
/// whitespace. "Manchester United" → "MU", "AFC Bournemouth" → "AFCB".
pub fn team_abbreviation(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_lowercase() && !c.is_whitespace())
        .collect()
}

pub fn team_label(current_team: &str, badge: Option<String>) -> TeamLabel {
    TeamLabel {
        name: current_team.to_owned(),
        abbrev: team_abbreviation(current_team),
        img_url: badge,
    }
}

/// Whole years between `dob` and `today`, using a 365.25-day year.
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let days = (today - dob).num_days();
    (days as f64 / 365.25).floor() as i32
}

/// Height rendered as feet'inches", converting from centimetres.
pub fn height_display(height_cm: f64) -> String {
    let inches = (height_cm * 0.3937008).floor() as i64;
    format!("{}'{}\"", inches / 12, inches % 12)
}

pub fn jersey_display(number: i32) -> String {
    format!("#{number}")
}
