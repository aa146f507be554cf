// src/logic/mod.rs
//! ゲームのルールや手の数え上げなど、盤面を読むロジックをまとめるモジュール。

pub mod deck;
pub mod moves;
pub mod rules;

pub use moves::Move;
