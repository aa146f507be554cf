//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

/// カードが、一番上が `target_top` の場札の列に置けるかチェックする。
///
/// - 列が空なら K だけ置ける。
/// - そうでなければ、一番上より1つ小さいランクで、色が違うカードだけ置ける。
pub fn can_move_to_tableau(target_top: Option<&Card>, card_to_move: &Card) -> bool {
    match target_top {
        Some(top) => {
            let colors_different = top.color() != card_to_move.color();
            let rank_is_one_less = card_to_move.rank.value() + 1 == top.rank.value();
            trace!(
                "[Rule Check] {:?}({:?}) onto {:?}({:?}): colors different {}, rank one less {}",
                card_to_move.rank,
                card_to_move.color(),
                top.rank,
                top.color(),
                colors_different,
                rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            trace!("[Rule Check] {:?} onto empty Tableau: is King {}", card_to_move.rank, is_king);
            is_king
        }
    }
}
