//! Clockwise turn order by seat.
//!
//! Turn order follows where players sit, not their index: with four players
//! index 1 sits across from index 0, so play goes 0 → 2 → 1 → 3. The tables
//! are written out per player count and must not be replaced by `(i + 1) % n`.

/// Next index for 2 players: Bottom ⇄ Top.
const NEXT_OF_TWO: [usize; 2] = [1, 0];

/// Next index for 3 players: Bottom → Top → Right → Bottom.
const NEXT_OF_THREE: [usize; 3] = [2, 0, 1];

/// Next index for 4 players: Bottom → Left → Top → Right → Bottom.
const NEXT_OF_FOUR: [usize; 4] = [2, 3, 1, 0];

/// The player index that plays after `current`.
///
/// Falls back to player 0 for an unsupported count or index.
#[must_use]
pub fn next_player_index(player_count: usize, current: usize) -> usize {
    let table: &[usize] = match player_count {
        2 => &NEXT_OF_TWO,
        3 => &NEXT_OF_THREE,
        4 => &NEXT_OF_FOUR,
        _ => &[],
    };
    table.get(current).copied().unwrap_or(0)
}
