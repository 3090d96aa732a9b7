//! Saving and restoring game state.
//!
//! JSON is the save-file and relay format; bincode is the compact snapshot
//! format. Both carry the whole `GameState`, including the RNG position and
//! move history, so a restored game continues exactly where it left off.

use thiserror::Error;

use crate::core::GameState;

/// Failure to encode or decode a saved game.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

/// Encode a game as JSON.
///
/// # Errors
///
/// `PersistError::Json` if serialization fails.
pub fn to_json(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a game saved with `to_json`.
///
/// # Errors
///
/// `PersistError::Json` if the text isn't a valid saved game.
pub fn from_json(json: &str) -> Result<GameState, PersistError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a game as a bincode snapshot.
///
/// # Errors
///
/// `PersistError::Binary` if serialization fails.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>, PersistError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a snapshot made with `to_bytes`.
///
/// # Errors
///
/// `PersistError::Binary` if the bytes aren't a valid snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState, PersistError> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AiDifficulty, CardSource, Move};
    use crate::rules::{apply_move, setup_game};

    fn played_game() -> GameState {
        let mut state = setup_game(3, &[], AiDifficulty::Hard, 17).unwrap();
        for _ in 0..6 {
            let mv = state
                .legal_center_moves()
                .into_iter()
                .next()
                .unwrap_or(Move::hand_to_storage(0, 0));
            state = apply_move(&state, mv);
        }
        state
    }

    #[test]
    fn test_json_round_trip() {
        let state = played_game();
        let json = to_json(&state).unwrap();
        assert_eq!(from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_bytes_round_trip() {
        let state = played_game();
        let bytes = to_bytes(&state).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn test_restored_game_continues_identically() {
        let state = played_game();
        let restored = from_json(&to_json(&state).unwrap()).unwrap();

        let mv = Move::to_center(CardSource::Hand, 0, 0);
        assert_eq!(apply_move(&restored, mv), apply_move(&state, mv));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(from_json("{not json"), Err(PersistError::Json(_))));
        assert!(matches!(from_bytes(&[1, 2, 3]), Err(PersistError::Binary(_))));
    }
}
