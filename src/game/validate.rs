//! Mapping a submitted guess onto a catalogue player.

use crate::cache::PlayerName;

#[derive(Debug, PartialEq, Eq)]
pub enum GuessError {
    /// Neither a usable id nor a name matching any catalogue player.
    UnknownPlayer,
}

/// Resolve a submitted guess to a player id.
///
/// A non-negative integer id is trusted as-is; existence is enforced by
/// the foreign key when the guess row is written. Otherwise the name is
/// matched exactly (case-insensitively) against the full catalogue, first
/// match wins. The name fallback covers clients whose autocomplete never
/// populated the hidden id field (slow connection, scripting disabled).
pub fn resolve_guess(
    id: Option<&str>,
    name: Option<&str>,
    catalog: &[PlayerName],
) -> Result<i32, GuessError> {
    if let Some(raw) = id {
        if let Ok(parsed) = raw.trim().parse::<i32>() {
            if parsed >= 0 {
                return Ok(parsed);
            }
        }
    }

    let wanted = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(GuessError::UnknownPlayer)?
        .to_lowercase();

    catalog
        .iter()
        .find(|p| p.name.to_lowercase() == wanted)
        .map(|p| p.id)
        .ok_or(GuessError::UnknownPlayer)
}
