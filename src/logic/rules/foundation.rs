//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank, Suit};

/// カードが、担当スート `foundation_suit` で一番上が `target_top` の組札に置けるかチェックする。
///
/// スートが違えば絶対にダメ。空なら A だけ、そうでなければ一番上の次のランクだけ。
pub fn can_move_to_foundation(
    foundation_suit: Suit,
    target_top: Option<&Card>,
    card_to_move: &Card,
) -> bool {
    if card_to_move.suit != foundation_suit {
        trace!(
            "[Foundation Rule] suit mismatch: {:?} onto {:?} foundation",
            card_to_move.suit,
            foundation_suit
        );
        return false;
    }

    let result = match target_top {
        None => card_to_move.rank == Rank::Ace,
        Some(top) => card_to_move.rank.value() == top.rank.value() + 1,
    };
    trace!(
        "[Foundation Rule] {:?} of {:?} onto {:?}: {}",
        card_to_move.rank,
        card_to_move.suit,
        target_top.map(|top| top.rank),
        result
    );
    result
}
