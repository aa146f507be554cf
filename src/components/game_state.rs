// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の状態だよ！🏆
///
/// 盤面から毎回計算するもので、どこにも保存しないよ。
/// (どの手を指しても変わるから、覚えておくと古くなっちゃう)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだ遊べる
    InProgress,
    /// 4つの組札が全部 K まで揃った！
    Won,
    /// 勝ってないのに、もう動かせる手がない
    Stalemated,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
