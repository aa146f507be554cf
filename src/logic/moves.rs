// src/logic/moves.rs
//! 「手」を表す型と、今の盤面で指せる手を全部数え上げるロジックだよ！🪄
//!
//! 数え上げは盤面を一切変更しないし、結果を覚えておくこともしない。
//! どの手を指しても結果が変わるから、聞かれるたびに計算し直すよ。

use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;
use crate::config::rules::TABLEAU_COLUMNS;
use crate::error::ParseMoveError;
use crate::game::Game;
use crate::logic::rules;

/// プレイヤーが指せる手。列番号は 0 始まりだよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// 山札をめくる (空なら捨て札を山札に戻す)
    Draw,
    /// 場札の一番上を別の列へ
    ColumnToColumn { src: usize, dst: usize },
    /// 捨て札の一番上を場札の列へ
    WasteToColumn { dst: usize },
    /// 場札の一番上を、そのスートの組札へ
    ColumnToFoundation { src: usize },
    /// 捨て札の一番上を、そのスートの組札へ
    WasteToFoundation,
}

impl fmt::Display for Move {
    /// `FromStr` で読める形 (列は 1 始まり) で書き出す。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Draw => write!(f, "d"),
            Move::ColumnToColumn { src, dst } => write!(f, "{}{}", src + 1, dst + 1),
            Move::WasteToColumn { dst } => write!(f, "w{}", dst + 1),
            Move::ColumnToFoundation { src } => write!(f, "f{}", src + 1),
            Move::WasteToFoundation => write!(f, "wf"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// テキストコマンドを読む。
    ///
    /// - `d` : めくる
    /// - `12` : 1列目から2列目へ
    /// - `w3` : 捨て札から3列目へ
    /// - `f2` : 2列目から組札へ
    /// - `wf` : 捨て札から組札へ
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = s.trim().to_ascii_lowercase();
        let chars: Vec<char> = command.chars().collect();
        match chars.as_slice() {
            [] => Err(ParseMoveError::Empty),
            ['d'] => Ok(Move::Draw),
            ['w', 'f'] => Ok(Move::WasteToFoundation),
            ['w', dst] => Ok(Move::WasteToColumn { dst: parse_column(*dst)? }),
            ['f', src] => Ok(Move::ColumnToFoundation { src: parse_column(*src)? }),
            [src, dst] if src.is_ascii_digit() && dst.is_ascii_digit() => Ok(Move::ColumnToColumn {
                src: parse_column(*src)?,
                dst: parse_column(*dst)?,
            }),
            _ => Err(ParseMoveError::Unrecognized(s.to_string())),
        }
    }
}

/// 1 始まりの列番号 (1 文字) を 0 始まりに直す。
fn parse_column(c: char) -> Result<usize, ParseMoveError> {
    match c.to_digit(10) {
        Some(n) if (1..=TABLEAU_COLUMNS as u32).contains(&n) => Ok(n as usize - 1),
        Some(_) => Err(ParseMoveError::ColumnOutOfRange(c)),
        None => Err(ParseMoveError::Unrecognized(c.to_string())),
    }
}

/// 今の盤面で指せる手を全部集める。
///
/// 数え方:
/// 1. 場札の列どうし (別の列、移動元の一番上が表向き)
/// 2. 捨て札の一番上 → 各列
/// 3. 各列の一番上 → そのスートの組札
/// 4. 捨て札の一番上 → そのスートの組札
/// 5. 山札か捨て札にカードがあれば「めくる」が1手
pub fn available_moves(game: &Game) -> Vec<Move> {
    let columns = game.columns();
    let mut moves = Vec::new();

    for (src, dst) in iproduct!(0..columns.len(), 0..columns.len()) {
        if src == dst {
            continue;
        }
        if let Some(card) = columns[src].peek() {
            if card.is_face_up && columns[dst].can_accept(card) {
                moves.push(Move::ColumnToColumn { src, dst });
            }
        }
    }

    if let Some(card) = game.waste().peek() {
        moves.extend(
            columns
                .iter()
                .enumerate()
                .filter(|(_, column)| column.can_accept(card))
                .map(|(dst, _)| Move::WasteToColumn { dst }),
        );
    }

    for (src, column) in columns.iter().enumerate() {
        if let Some(card) = column.peek() {
            if card.is_face_up && find_foundation_move(game, card).is_some() {
                moves.push(Move::ColumnToFoundation { src });
            }
        }
    }

    if let Some(card) = game.waste().peek() {
        if find_foundation_move(game, card).is_some() {
            moves.push(Move::WasteToFoundation);
        }
    }

    if rules::can_cycle_stock(game.stock().is_empty(), game.waste().is_empty()) {
        moves.push(Move::Draw);
    }

    trace!("[Moves] {} available: {:?}", moves.len(), moves);
    moves
}

/// カードを受け入れてくれる組札を探して、そのスートを返す。
/// 組札は担当スートごとに1つなので、候補は多くても1つだよ。
pub fn find_foundation_move(game: &Game, card: &Card) -> Option<Suit> {
    game.foundations()
        .iter()
        .find(|foundation| rules::is_move_valid(card, foundation))
        .and_then(|foundation| match foundation.stack_type() {
            StackType::Foundation(suit) => Some(suit),
            _ => None,
        })
}

/// 空いた列に置ける K が見えているか。
/// 捨て札の一番上か、どこかの列の表向きの一番上が K なら true。
pub fn king_available_for_empty_column(game: &Game) -> bool {
    let is_visible_king = |card: &Card| card.is_face_up && card.rank == Rank::King;
    game.waste().peek().map_or(false, is_visible_king)
        || game.columns().iter().filter_map(|column| column.peek()).any(is_visible_king)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_commands() {
        assert_eq!("d".parse::<Move>(), Ok(Move::Draw));
        assert_eq!(" D ".parse::<Move>(), Ok(Move::Draw));
        assert_eq!("12".parse::<Move>(), Ok(Move::ColumnToColumn { src: 0, dst: 1 }));
        assert_eq!("71".parse::<Move>(), Ok(Move::ColumnToColumn { src: 6, dst: 0 }));
        assert_eq!("w3".parse::<Move>(), Ok(Move::WasteToColumn { dst: 2 }));
        assert_eq!("F2".parse::<Move>(), Ok(Move::ColumnToFoundation { src: 1 }));
        assert_eq!("wf".parse::<Move>(), Ok(Move::WasteToFoundation));
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("18".parse::<Move>(), Err(ParseMoveError::ColumnOutOfRange('8')));
        assert_eq!("09".parse::<Move>(), Err(ParseMoveError::ColumnOutOfRange('0')));
        assert!(matches!("x".parse::<Move>(), Err(ParseMoveError::Unrecognized(_))));
        assert!(matches!("123".parse::<Move>(), Err(ParseMoveError::Unrecognized(_))));
    }

    #[test]
    fn display_round_trips_through_parser() {
        let moves = [
            Move::Draw,
            Move::ColumnToColumn { src: 3, dst: 5 },
            Move::WasteToColumn { dst: 6 },
            Move::ColumnToFoundation { src: 0 },
            Move::WasteToFoundation,
        ];
        for m in moves {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }
}
