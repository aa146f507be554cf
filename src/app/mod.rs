// src/app/mod.rs
//! GameApp と、その内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod game_app;
pub mod save_store;
pub mod state_getter;

pub use game_app::GameApp;
pub use save_store::{SaveDirectory, SaveSummary};
pub use state_getter::BoardSnapshot;
