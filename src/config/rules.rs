// src/config/rules.rs
//! クロンダイクの盤面の大きさに関する定数を定義するよ！

pub const TABLEAU_COLUMNS: usize = 7; // 場札の列の数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートごとに1つ)
pub const RANKS_PER_SUIT: usize = 13; // 1スートあたりの枚数 (A..K)
pub const DECK_SIZE: usize = FOUNDATION_COUNT * RANKS_PER_SUIT; // 52枚

// 最初に配る場札の枚数は 1+2+...+7 = 28 枚。残り 24 枚が山札になる。
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;
pub const INITIAL_STOCK_CARDS: usize = DECK_SIZE - INITIAL_TABLEAU_CARDS;
