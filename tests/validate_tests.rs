use plwordle_server::cache::PlayerName;
use plwordle_server::game::validate::{resolve_guess, GuessError};

fn catalog() -> Vec<PlayerName> {
    vec![
        PlayerName {
            id: 1,
            name: "Bukayo Saka".into(),
            img_url: String::new(),
        },
        PlayerName {
            id: 2,
            name: "Erling Haaland".into(),
            img_url: String::new(),
        },
        PlayerName {
            id: 3,
            name: "Son Heung-min".into(),
            img_url: String::new(),
        },
    ]
}

#[test]
fn integer_id_is_trusted_without_lookup() {
    // The id need not exist in the catalogue; the foreign key catches
    // fabricated ids at write time.
    assert_eq!(resolve_guess(Some("999"), None, &catalog()), Ok(999));
}

#[test]
fn id_bypasses_name() {
    // A usable id wins even when the name would resolve differently.
    assert_eq!(
        resolve_guess(Some("2"), Some("Bukayo Saka"), &catalog()),
        Ok(2)
    );
}

#[test]
fn negative_id_falls_back_to_name() {
    assert_eq!(
        resolve_guess(Some("-1"), Some("erling haaland"), &catalog()),
        Ok(2)
    );
}

#[test]
fn unparseable_id_falls_back_to_name() {
    assert_eq!(
        resolve_guess(Some("abc"), Some("SON HEUNG-MIN"), &catalog()),
        Ok(3)
    );
}

#[test]
fn name_match_is_exact_not_substring() {
    assert_eq!(
        resolve_guess(None, Some("Saka"), &catalog()),
        Err(GuessError::UnknownPlayer)
    );
}

#[test]
fn unknown_name_is_rejected() {
    assert_eq!(
        resolve_guess(None, Some("Lionel Messi"), &catalog()),
        Err(GuessError::UnknownPlayer)
    );
}

#[test]
fn empty_submission_is_rejected() {
    assert_eq!(
        resolve_guess(None, None, &catalog()),
        Err(GuessError::UnknownPlayer)
    );
    assert_eq!(
        resolve_guess(Some(""), Some("   "), &catalog()),
        Err(GuessError::UnknownPlayer)
    );
}
