//! Game setup: build the stock, deal, pick the starting player.

use im::Vector;
use tracing::info;

use crate::core::config::{
    DECKS_IN_STOCK, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, PERSONAL_PILE_SIZE,
};
use crate::core::{
    AiDifficulty, Deck, GameEvent, GameRng, GameState, Player, PlayerConfig,
    SetupError,
};

/// Start a new game.
///
/// Seats without a config (or with fields left `None`) get a default name
/// and avatar. The stock is three shuffled decks; each player is dealt a
/// hand of five and a personal pile of 21, in seat order. The first card
/// dealt to a personal pile ends up on top.
///
/// # Errors
///
/// `SetupError` if `num_players` is outside `2..=4` or more configs than
/// players are given.
pub fn setup_game(
    num_players: usize,
    configs: &[PlayerConfig],
    ai_difficulty: AiDifficulty,
    seed: u64,
) -> Result<GameState, SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(SetupError::InvalidPlayerCount { count: num_players });
    }
    if configs.len() > num_players {
        return Err(SetupError::TooManyPlayerConfigs {
            given: configs.len(),
            count: num_players,
        });
    }

    let mut rng = GameRng::new(seed);
    let mut stock = Deck::standard(DECKS_IN_STOCK).shuffled(&mut rng);

    let mut players = Vector::new();
    for index in 0..num_players {
        let config = configs.get(index).cloned().unwrap_or_default();
        let number = index as u8 + 1;

        let (hand, rest) = stock.draw(HAND_SIZE);
        let (pile, rest) = rest.draw(PERSONAL_PILE_SIZE);
        stock = rest;

        let player = Player::new(
            config.name.unwrap_or_else(|| format!("Player {number}")),
            number,
        )
        .with_avatar(Some(
            config.avatar.unwrap_or_else(|| format!("avatar-{number}")),
        ))
        .with_ai(config.is_ai)
        .with_hand(hand)
        .with_personal_pile(pile.into_iter().rev());

        players.push_back(player);
    }

    let starting_player = starting_player(&players);
    info!(
        players = num_players,
        seed,
        starting_player,
        stock = stock.len(),
        "game set up"
    );

    Ok(GameState {
        players,
        center_piles: Default::default(),
        stock,
        current_player: starting_player,
        game_started: true,
        game_over: false,
        winner: None,
        turn_number: 1,
        cards_played_this_turn: 0,
        played_to_center_this_turn: false,
        last_event: GameEvent::GameStarted { starting_player },
        ai_difficulty,
        rng: rng.state(),
        history: Vector::new(),
    })
}

/// The player whose personal-pile top card ranks highest.
///
/// Kings are wild and don't compete; ties go to the earlier seat; if every
/// top card is a King, player 0 starts.
fn starting_player(players: &Vector<Player>) -> usize {
    players
        .iter()
        .enumerate()
        .filter_map(|(index, player)| {
            player
                .personal_pile_top()
                .filter(|card| !card.is_wild())
                .map(|card| (index, card.value()))
        })
        .fold(None, |best: Option<(usize, u8)>, (index, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((index, value)),
        })
        .map_or(0, |(index, _)| index)
}
