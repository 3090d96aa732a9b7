//! Turn operations: center plays, storage plays, ending turns, refills.
//!
//! Each operation clones the incoming state (cheap, `im`-backed), applies the
//! change to the clone and returns it. A rejected move returns the input
//! unchanged apart from `last_event`.

use tracing::debug;

use super::turn_order::next_player_index;
use crate::core::config::{CENTER_PILES, STORAGE_STACKS};
use crate::core::{
    CardSource, Destination, GameEvent, GameRng, GameState, InvalidMoveReason, Move, MoveRecord,
};

/// Apply any `Move`. Human input, the AI and replays all go through here.
#[must_use]
pub fn apply_move(state: &GameState, mv: Move) -> GameState {
    match mv {
        Move::PlayToCenter {
            source,
            source_index,
            pile_index,
        } => play_to_center(state, source, source_index, pile_index),
        Move::PlayToStorage {
            source,
            source_index,
            storage_index,
        } => play_to_storage(state, source, source_index, storage_index),
        Move::EndTurn => end_turn(state),
        Move::ForceEndTurn => force_end_turn_on_timeout(state),
    }
}

/// Play a card from the current player's hand, personal pile or a storage
/// top onto a center pile.
///
/// A no-op on a game that isn't in progress. On success the turn continues:
/// a completed pile is shuffled back into the stock, an emptied personal
/// pile wins the game, and an emptied hand is refilled immediately.
#[must_use]
pub fn play_to_center(
    state: &GameState,
    source: CardSource,
    source_index: usize,
    pile_index: usize,
) -> GameState {
    if !state.is_in_progress() {
        return state.clone();
    }

    let player_index = state.current_player;
    let Some(player) = state.current() else {
        return reject(state, InvalidMoveReason::GameNotInProgress);
    };

    let taken = match source {
        CardSource::Hand => player.remove_from_hand(source_index),
        CardSource::PersonalPile => player.pop_personal_pile(),
        CardSource::Storage => player.pop_storage(source_index),
    };
    let Some((card, player_after)) = taken else {
        return reject(
            state,
            InvalidMoveReason::NoCardAtSource {
                from: source,
                index: source_index,
            },
        );
    };

    let Some(pile) = state.center_piles.get(pile_index) else {
        return reject(state, InvalidMoveReason::InvalidPileIndex { index: pile_index });
    };
    let placement = pile.place(card);
    if !placement.placed {
        return reject(
            state,
            InvalidMoveReason::IllegalPlacement {
                card,
                expected: pile.expected_next(),
            },
        );
    }

    let mut next = state.clone();
    next.players.set(player_index, player_after);
    next.center_piles[pile_index] = placement.pile;
    record(
        &mut next,
        Move::to_center(source, source_index, pile_index),
    );
    next.cards_played_this_turn += 1;
    next.played_to_center_this_turn = true;
    next.last_event = GameEvent::CardPlayed {
        player: player_index,
        card,
        source,
        destination: Destination::Center(pile_index),
    };
    debug!(player = player_index, %card, %source, pile = pile_index, "card played to center");

    if next.center_piles[pile_index].is_complete() {
        complete_pile(&mut next, pile_index);
    }

    let (won, hand_empty) = next
        .players
        .get(player_index)
        .map_or((false, false), |p| (p.has_won(), p.is_hand_empty()));
    if won {
        declare_winner(&mut next, player_index);
    } else if hand_empty {
        refill_hand(&mut next, player_index);
    }

    next
}

/// Bury a hand card in one of the current player's storage stacks.
///
/// Always ends the turn on success. After a center play this is only
/// allowed while the hand is full.
#[must_use]
pub fn play_to_storage(
    state: &GameState,
    source: CardSource,
    source_index: usize,
    storage_index: usize,
) -> GameState {
    if !state.is_in_progress() {
        return reject(state, InvalidMoveReason::GameNotInProgress);
    }
    store_card(state, source, source_index, storage_index, true)
}

/// End the current turn.
///
/// Requires at least one card played this turn and a hand that isn't full.
#[must_use]
pub fn end_turn(state: &GameState) -> GameState {
    if !state.is_in_progress() {
        return reject(state, InvalidMoveReason::GameNotInProgress);
    }
    if state.cards_played_this_turn == 0 {
        return reject(state, InvalidMoveReason::NothingPlayed);
    }
    if state.current().is_some_and(|p| p.is_hand_full()) {
        return reject(state, InvalidMoveReason::HandFull);
    }

    let mut next = state.clone();
    record(&mut next, Move::EndTurn);
    advance_turn(&mut next);
    next
}

/// Called when the turn timer runs out.
///
/// Ends the turn normally if that's legal; otherwise buries the first hand
/// card in the first empty storage stack (or stack 0), skipping the
/// after-center-play restriction; with no hand cards at all the turn is
/// advanced unconditionally.
#[must_use]
pub fn force_end_turn_on_timeout(state: &GameState) -> GameState {
    if !state.is_in_progress() {
        return state.clone();
    }
    if state.can_end_turn() {
        return end_turn(state);
    }

    if let Some(player) = state.current().filter(|p| !p.is_hand_empty()) {
        let slot = player.first_empty_storage().unwrap_or(0);
        debug!(player = state.current_player, slot, "turn timed out, forcing storage play");
        return store_card(state, CardSource::Hand, 0, slot, false);
    }

    debug!(player = state.current_player, "turn timed out with no cards, advancing");
    let mut next = state.clone();
    record(&mut next, Move::ForceEndTurn);
    advance_turn(&mut next);
    next
}

/// Top up a player's hand to five from the stock.
///
/// Deliberately separate from turn advancement so callers can run a deal
/// animation first. A no-op when the hand is already full, the stock is
/// empty, the index is unknown, or the game isn't in progress.
#[must_use]
pub fn draw_card_from_stock_delayed(state: &GameState, player_index: usize) -> GameState {
    if !state.is_in_progress() {
        return state.clone();
    }
    let needed = state
        .player(player_index)
        .map_or(0, |p| p.cards_needed_to_fill());
    if needed == 0 || state.stock.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    refill_hand(&mut next, player_index);
    next
}

// === Internal transitions ===

fn reject(state: &GameState, reason: InvalidMoveReason) -> GameState {
    debug!(player = state.current_player, %reason, "move rejected");
    let mut next = state.clone();
    next.last_event = GameEvent::invalid(reason);
    next
}

fn record(next: &mut GameState, mv: Move) {
    let entry = MoveRecord::new(
        next.current_player,
        mv,
        next.turn_number,
        next.cards_played_this_turn,
    );
    next.history.push_back(entry);
}

fn store_card(
    state: &GameState,
    source: CardSource,
    source_index: usize,
    storage_index: usize,
    enforce_center_lock: bool,
) -> GameState {
    let player_index = state.current_player;
    let Some(player) = state.current() else {
        return reject(state, InvalidMoveReason::GameNotInProgress);
    };

    if enforce_center_lock && state.played_to_center_this_turn && !player.is_hand_full() {
        return reject(state, InvalidMoveReason::StorageLocked);
    }
    match source {
        CardSource::Storage => return reject(state, InvalidMoveReason::StorageToStorage),
        CardSource::PersonalPile => {
            return reject(state, InvalidMoveReason::PersonalPileToStorage)
        }
        CardSource::Hand => {}
    }
    if storage_index >= STORAGE_STACKS {
        return reject(state, InvalidMoveReason::InvalidStorageIndex { index: storage_index });
    }

    let stored = player
        .remove_from_hand(source_index)
        .and_then(|(card, rest)| rest.push_storage(storage_index, card).map(|p| (card, p)));
    let Some((card, player_after)) = stored else {
        return reject(
            state,
            InvalidMoveReason::NoCardAtSource {
                from: source,
                index: source_index,
            },
        );
    };

    let mut next = state.clone();
    next.players.set(player_index, player_after);
    record(
        &mut next,
        Move::PlayToStorage {
            source,
            source_index,
            storage_index,
        },
    );
    next.cards_played_this_turn += 1;
    next.last_event = GameEvent::CardPlayed {
        player: player_index,
        card,
        source,
        destination: Destination::Storage(storage_index),
    };
    debug!(player = player_index, %card, storage = storage_index, "card stored");

    if next.players.get(player_index).is_some_and(|p| p.has_won()) {
        declare_winner(&mut next, player_index);
        return next;
    }

    advance_turn(&mut next);
    next
}

fn complete_pile(next: &mut GameState, pile_index: usize) {
    if pile_index >= CENTER_PILES {
        return;
    }
    let (cards, fresh) = next.center_piles[pile_index].collect_and_clear();
    let cards_returned = cards.len();

    let mut rng = GameRng::from_state(&next.rng);
    next.stock = next.stock.add_cards(cards).shuffled(&mut rng);
    next.rng = rng.state();
    next.center_piles[pile_index] = fresh;
    next.last_event = GameEvent::PileCompleted {
        pile_index,
        cards_returned,
    };
    debug!(pile = pile_index, cards_returned, stock = next.stock.len(), "pile completed");
}

fn refill_hand(next: &mut GameState, player_index: usize) {
    let Some(player) = next.players.get(player_index) else {
        return;
    };
    let (drawn, stock) = next.stock.draw(player.cards_needed_to_fill());
    if drawn.is_empty() {
        return;
    }
    let cards_drawn = drawn.len();
    let refilled = player.add_to_hand(drawn);

    next.players.set(player_index, refilled);
    next.stock = stock;
    next.last_event = GameEvent::HandRefilled {
        player: player_index,
        cards_drawn,
    };
    debug!(player = player_index, cards_drawn, "hand refilled");
}

fn declare_winner(next: &mut GameState, player_index: usize) {
    next.game_over = true;
    next.winner = Some(player_index);
    next.last_event = GameEvent::GameWon {
        winner: player_index,
    };
    debug!(winner = player_index, turn = next.turn_number, "game won");
}

fn advance_turn(next: &mut GameState) {
    let player = next.current_player;
    let next_player = next_player_index(next.player_count(), player);

    next.current_player = next_player;
    next.cards_played_this_turn = 0;
    next.played_to_center_this_turn = false;
    next.turn_number += 1;
    next.last_event = GameEvent::TurnEnded {
        player,
        next_player,
    };
    debug!(player, next_player, turn = next.turn_number, "turn ended");
}
