// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::trace;

use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};

/// カードを移動先の山に置けるか検証する。
/// 山札・捨て札への直接移動は許可しないよ。
pub fn is_move_valid(card_to_move: &Card, target: &Pile) -> bool {
    match target.stack_type() {
        StackType::Tableau(_) | StackType::Foundation(_) => target.can_accept(card_to_move),
        StackType::Stock | StackType::Waste => {
            trace!("[Rules Validation] Moving to {:?} is not allowed.", target.stack_type());
            false
        }
    }
}

/// 移動元の山の一番上のカードを、移動先に動かせるか。
/// 移動元が空なら当然ダメ。
pub fn is_top_move_valid(source: &Pile, target: &Pile) -> bool {
    match source.peek() {
        Some(card) => is_move_valid(card, target),
        None => {
            trace!("[Rules Validation] {:?} is empty, nothing to move.", source.stack_type());
            false
        }
    }
}
