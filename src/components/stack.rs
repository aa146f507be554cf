// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::logic::rules;

/// カードの山 (Pile) の種類を示す Enum だよ。
///
/// 種類は固定で、これ以上増えないから、継承じゃなくてタグで区別するよ。
/// 組札は作るときに担当スートが決まるので、タグにスートを持たせてる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。担当スートのカードだけを A から K まで積む。
    Foundation(Suit),
    /// 山札 (Stock)。裏向きのカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

/// カードの山そのもの。`cards` の最後の要素が「一番上」だよ。
///
/// `push` はルールを見ないので、置いていいかどうかは呼び出し側 (`Game`) が
/// `can_accept` で確認してね。
#[derive(Debug, Clone)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    /// カード列つきで作る。セーブデータからの復元用。
    pub fn with_cards(stack_type: StackType, cards: Vec<Card>) -> Self {
        Self { stack_type, cards }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上のカードを取り出す。空なら None。
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 一番上のカードを覗く。空なら None。
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 下から順のカード列。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// この山に `card` を置けるかチェックする。
    /// 山札と捨て札は自動でしかカードが動かないので、いつも false だよ。
    pub fn can_accept(&self, card: &Card) -> bool {
        match self.stack_type {
            StackType::Tableau(_) => rules::can_move_to_tableau(self.peek(), card),
            StackType::Foundation(suit) => rules::can_move_to_foundation(suit, self.peek(), card),
            StackType::Stock | StackType::Waste => false,
        }
    }

    /// 新しい一番上のカードを表向きにする (auto-reveal)。
    /// 表向きにしたら true。
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }
}
