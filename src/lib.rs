// src/lib.rs
//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! 配る・めくる・動かす・勝ち/詰みの判定と、ゲームの保存/読み込みを提供する。
//! 画面の描画やキー入力は外側の UI の仕事で、UI は `app::GameApp` の
//! コマンドとクエリだけを呼び出す想定。
//!
//! ログは `log` クレートのマクロで出すだけなので、ロガーの設定は使う側でしてね。

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod protocol;

pub use app::{BoardSnapshot, GameApp, SaveDirectory, SaveSummary};
pub use components::{Card, CardColor, GameStatus, Pile, Rank, StackType, Suit};
pub use config::SaveConfig;
pub use error::{ParseMoveError, PersistenceError};
pub use game::Game;
pub use logic::Move;
pub use protocol::StateDocument;
