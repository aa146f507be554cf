// src/protocol.rs

// このファイルは、セーブデータの形式（スキーマ）を定義するよ！💾
// `Game` をまるごと `StateDocument` に変換して、serde で JSON にする。
// スートやランクは記号じゃなくて識別子 ("Heart", "Ace") で書くので、
// 読み書きしても同じ値に戻るよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::error::PersistenceError;
use crate::game::{unix_timestamp, Game};

/// カード1枚分のデータ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

/// 山1つ分のカード列 (下から順)。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PileData {
    pub cards: Vec<CardData>,
}

/// 組札1つ分。担当スートも一緒に保存して、読み込むときは中身から推測しないよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoundationData {
    pub suit: Suit,
    pub cards: Vec<CardData>,
}

/// ゲーム全体の保存データ。1ファイルに1つ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateDocument {
    /// ゲームを始めた時刻 (Unix 秒)
    pub started_at: u64,
    /// 保存した時刻 (Unix 秒)
    pub saved_at: u64,
    pub move_count: u32,
    pub columns: Vec<PileData>,
    pub foundations: Vec<FoundationData>,
    pub stock: PileData,
    pub waste: PileData,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self { suit: card.suit, rank: card.rank, face_up: card.is_face_up }
    }
}

impl From<&CardData> for Card {
    fn from(data: &CardData) -> Self {
        Card { suit: data.suit, rank: data.rank, is_face_up: data.face_up }
    }
}

impl From<&Pile> for PileData {
    fn from(pile: &Pile) -> Self {
        Self { cards: card_data(pile) }
    }
}

fn card_data(pile: &Pile) -> Vec<CardData> {
    pile.cards().iter().map(CardData::from).collect()
}

fn cards(data: &[CardData]) -> Vec<Card> {
    data.iter().map(Card::from).collect()
}

/// 組札の担当スートを取り出す。
fn foundation_suit(pile: &Pile) -> Option<Suit> {
    match pile.stack_type() {
        StackType::Foundation(suit) => Some(suit),
        _ => None,
    }
}

/// `Game` を保存データに変換する。`saved_at` は今の時刻。
pub fn serialize(game: &Game) -> StateDocument {
    StateDocument {
        started_at: game.started_at(),
        saved_at: unix_timestamp(),
        move_count: game.move_count(),
        columns: game.columns().iter().map(PileData::from).collect(),
        foundations: game
            .foundations()
            .iter()
            .filter_map(|pile| {
                foundation_suit(pile).map(|suit| FoundationData { suit, cards: card_data(pile) })
            })
            .collect(),
        stock: PileData::from(game.stock()),
        waste: PileData::from(game.waste()),
    }
}

/// 保存データから `Game` を組み立て直す。
///
/// 山の中身は保存された順番のまま戻すだけで、ルールのチェックはしない (信頼できる入力)。
/// 列や組札の数が合わないときだけ `PersistenceError::Shape` を返すよ。
pub fn deserialize(doc: &StateDocument) -> Result<Game, PersistenceError> {
    if doc.columns.len() != TABLEAU_COLUMNS {
        return Err(PersistenceError::Shape {
            what: "columns",
            expected: TABLEAU_COLUMNS,
            found: doc.columns.len(),
        });
    }
    if doc.foundations.len() != FOUNDATION_COUNT {
        return Err(PersistenceError::Shape {
            what: "foundations",
            expected: FOUNDATION_COUNT,
            found: doc.foundations.len(),
        });
    }

    let columns: [Pile; TABLEAU_COLUMNS] = std::array::from_fn(|i| {
        Pile::with_cards(StackType::Tableau(i as u8), cards(&doc.columns[i].cards))
    });
    let foundations: [Pile; FOUNDATION_COUNT] = std::array::from_fn(|i| {
        let data = &doc.foundations[i];
        Pile::with_cards(StackType::Foundation(data.suit), cards(&data.cards))
    });

    Ok(Game::from_parts(
        columns,
        foundations,
        Pile::with_cards(StackType::Stock, cards(&doc.stock.cards)),
        Pile::with_cards(StackType::Waste, cards(&doc.waste.cards)),
        doc.move_count,
        doc.started_at,
    ))
}

/// 保存データを JSON 文字列にする (人が読めるように整形)。
pub fn to_json(doc: &StateDocument) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

pub fn from_json(json: &str) -> Result<StateDocument, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}
