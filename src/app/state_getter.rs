//! Builds the render-state snapshot a UI draws from, and its JSON form.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::components::card::Suit;
use crate::components::game_state::GameStatus;
use crate::components::stack::{Pile, StackType};
use crate::game::Game;
use crate::logic::moves::Move;
use crate::protocol::CardData;

/// 組札1つ分の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoundationView {
    pub suit: Suit,
    pub cards: Vec<CardData>,
}

/// Everything a UI needs to draw one frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub columns: Vec<Vec<CardData>>,
    pub foundations: Vec<FoundationView>,
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub move_count: u32,
    pub started_at: u64,
    pub available_moves: Vec<Move>,
    pub status: GameStatus,
}

fn cards_of(pile: &Pile) -> Vec<CardData> {
    pile.cards().iter().map(CardData::from).collect()
}

/// Reads the whole board without changing it.
pub fn snapshot(game: &Game) -> BoardSnapshot {
    let available_moves = game.available_moves();
    let status = game.status_with(&available_moves);

    BoardSnapshot {
        columns: game.columns().iter().map(cards_of).collect(),
        foundations: game
            .foundations()
            .iter()
            .filter_map(|pile| match pile.stack_type() {
                StackType::Foundation(suit) => Some(FoundationView { suit, cards: cards_of(pile) }),
                _ => None,
            })
            .collect(),
        stock: cards_of(game.stock()),
        waste: cards_of(game.waste()),
        move_count: game.move_count(),
        started_at: game.started_at(),
        available_moves,
        status,
    }
}

/// Snapshot serialized to JSON, for UIs that live outside the process.
pub fn snapshot_json(game: &Game) -> Result<String, String> {
    debug!("Getting board snapshot...");
    serde_json::to_string(&snapshot(game)).map_err(|e| {
        let error_msg = format!("Failed to serialize board snapshot: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_mirrors_the_board() {
        let mut game = Game::with_seed(21);
        game.draw();
        let snap = snapshot(&game);

        assert_eq!(snap.columns.len(), 7);
        assert_eq!(snap.foundations.len(), 4);
        assert_eq!(snap.waste.len(), 1);
        assert!(snap.waste[0].face_up);
        assert_eq!(snap.stock.len(), game.stock().len());
        assert!(snap.stock.iter().all(|c| !c.face_up));
        assert_eq!(snap.move_count, 1);
        assert_eq!(snap.available_moves.len(), game.count_available_moves());
        assert_eq!(snap.status, game.status());
        for (i, column) in snap.columns.iter().enumerate() {
            assert_eq!(column.len(), i + 1);
            assert!(column.last().unwrap().face_up);
        }
    }

    #[test]
    fn snapshot_json_is_parseable() {
        let game = Game::with_seed(2);
        let json = snapshot_json(&game).unwrap();
        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot(&game));
    }
}
