//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::rules::RANKS_PER_SUIT;

/// 組札ごとの枚数から、クリアしたかどうかを判定する。
/// 4つ全部が13枚 (A..K) そろっていればクリア！
pub fn check_win_condition(foundation_sizes: &[usize]) -> bool {
    !foundation_sizes.is_empty() && foundation_sizes.iter().all(|&size| size == RANKS_PER_SUIT)
}
