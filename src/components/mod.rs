// src/components/mod.rs

// ゲームのデータ部品たち！
pub mod card;
pub mod stack;
pub mod game_state;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use stack::{Pile, StackType};
