// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート × ランクの全組み合わせで、全部裏向き (`is_face_up: false`)。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は外から渡すので、テストではシード付きの `StdRng` で
/// 毎回同じ並びを再現できるよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();
        assert_eq!(deck.len(), 52, "デッキのカード数が52枚じゃない！");

        let unique: HashSet<_> = deck.iter().cloned().collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        assert!(deck.iter().all(|card| !card.is_face_up), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut first = create_standard_deck();
        let mut second = create_standard_deck();
        shuffle_deck(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_deck(&mut second, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second, "同じシードなら同じ並びになるはず");
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let initial = create_standard_deck();
        let mut shuffled = initial.clone();
        shuffle_deck(&mut shuffled, &mut StdRng::seed_from_u64(7));

        // 52! 通りの中で元と同じ並びになることはまず無い
        assert_ne!(initial, shuffled, "シャッフルしても順番が変わってない");
        let a: HashSet<_> = initial.into_iter().collect();
        let b: HashSet<_> = shuffled.into_iter().collect();
        assert_eq!(a, b, "シャッフルでカードが入れ替わった！");
    }
}
