//! Scoring and end-of-game settlement.

use crate::player::{PlayerId, Players};
use crate::result::{BONUS_POINTS, GameResult, ScoreBoard};
use crate::table::Table;

/// Computes the running score from the won piles, without bonus points.
#[must_use]
pub fn scoreboard(players: &Players) -> ScoreBoard {
    ScoreBoard {
        human_points: players.human.won.points(),
        computer_points: players.computer.won.points(),
        human_cards: players.human.won.len(),
        computer_cards: players.computer.won.len(),
    }
}

/// Returns who receives the bonus: the player with more won cards, or the
/// starting player on a tie.
#[must_use]
pub fn bonus_player(score: &ScoreBoard, starting: PlayerId) -> PlayerId {
    match score.human_cards.cmp(&score.computer_cards) {
        core::cmp::Ordering::Greater => PlayerId::Human,
        core::cmp::Ordering::Less => PlayerId::Computer,
        core::cmp::Ordering::Equal => starting,
    }
}

/// Settles a finished game.
///
/// Cards left on the table go to the last player who captured, or to the
/// starting player if nobody ever did. The bonus is then awarded on the
/// final won-card counts.
pub fn settle(table: &mut Table, players: &mut Players, starting: PlayerId) -> GameResult {
    let leftover_to = table.last_capture().unwrap_or(starting);
    let leftover = table.take_all();
    let leftover_cards = leftover.len();
    players.get_mut(leftover_to).won.extend(leftover);

    let mut score = scoreboard(players);
    let bonus = bonus_player(&score, starting);
    match bonus {
        PlayerId::Human => score.human_points += BONUS_POINTS,
        PlayerId::Computer => score.computer_points += BONUS_POINTS,
    }

    GameResult {
        score,
        bonus,
        leftover_to,
        leftover_cards,
        starting_player: starting,
    }
}
