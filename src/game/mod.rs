// src/game/mod.rs
//! クロンダイクの盤面全体 (`Game`) だよ！🃏
//!
//! 場札7列・組札4つ・山札・捨て札を持っていて、配る・めくる・動かす・
//! 勝ち/詰みの判定をぜんぶここでやる。
//!
//! どの操作が終わった後でも、次のことが成り立つようにしてるよ:
//! - 52枚のカードがどこか1つの山にだけある (重複も欠けもなし)
//! - 組札は担当スートの A から順番に並んでる
//! - 場札の表向き部分は1つずつ下がって色が交互
//! - 空でない場札の一番上は必ず表向き (auto-reveal)

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, Suit, ALL_SUITS};
use crate::components::game_state::GameStatus;
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::moves::{self, Move};
use crate::logic::rules;


/// 今の時刻 (Unix 秒)。時計がおかしければ 0。
pub(crate) fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct Game {
    columns: [Pile; TABLEAU_COLUMNS],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    waste: Pile,
    move_count: u32,
    started_at: u64,
}

impl Game {
    /// OS の乱数でシャッフルして新しいゲームを配る。
    pub fn new() -> Self {
        Self::deal(&mut rand::thread_rng())
    }

    /// シード付きで配る。同じシードなら同じ盤面になるよ。
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(&mut StdRng::seed_from_u64(seed))
    }

    /// 52枚のデッキを作ってシャッフルし、場札に三角形に配る。
    ///
    /// i 列目 (0 始まり) には i+1 枚、最後の1枚だけ表向き。
    /// 残りは全部裏向きのまま山札になる。
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);

        let mut game = Self::empty();
        for (i, column) in game.columns.iter_mut().enumerate() {
            for j in 0..=i {
                if let Some(mut card) = deck.pop() {
                    card.is_face_up = j == i;
                    column.push(card);
                }
            }
        }
        game.stock = Pile::with_cards(StackType::Stock, deck);

        info!(
            "New game dealt: {} cards in tableau, {} in stock",
            game.columns.iter().map(Pile::len).sum::<usize>(),
            game.stock.len()
        );
        game
    }

    /// カードが1枚もない盤面。組札は ALL_SUITS の順に1つずつ。
    pub(crate) fn empty() -> Self {
        Self {
            columns: std::array::from_fn(|i| Pile::new(StackType::Tableau(i as u8))),
            foundations: ALL_SUITS.map(|suit| Pile::new(StackType::Foundation(suit))),
            stock: Pile::new(StackType::Stock),
            waste: Pile::new(StackType::Waste),
            move_count: 0,
            started_at: unix_timestamp(),
        }
    }

    /// 保存されていた山からそのまま組み立てる。中身のルールチェックはしないよ。
    pub(crate) fn from_parts(
        columns: [Pile; TABLEAU_COLUMNS],
        foundations: [Pile; FOUNDATION_COUNT],
        stock: Pile,
        waste: Pile,
        move_count: u32,
        started_at: u64,
    ) -> Self {
        Self { columns, foundations, stock, waste, move_count, started_at }
    }

    // --- 読み取り ---

    pub fn columns(&self) -> &[Pile] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Pile> {
        self.columns.get(index)
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    /// 担当スートが `suit` の組札。
    pub fn foundation(&self, suit: Suit) -> Option<&Pile> {
        self.foundations.iter().find(|f| f.stack_type() == StackType::Foundation(suit))
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// ゲームを始めた時刻 (Unix 秒)。
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    // --- 操作 ---

    /// 手を1つ指す。成功したら true。失敗したら盤面は何も変わらない。
    pub fn apply(&mut self, mv: Move) -> bool {
        match mv {
            Move::Draw => {
                self.draw();
                true
            }
            Move::ColumnToColumn { src, dst } => self.move_column_to_column(src, dst),
            Move::WasteToColumn { dst } => self.move_waste_to_column(dst),
            Move::ColumnToFoundation { src } => self.move_column_to_foundation(src),
            Move::WasteToFoundation => self.move_waste_to_foundation(),
        }
    }

    /// 山札を1枚めくって捨て札へ。山札が空なら、捨て札を全部裏返して山札に戻す。
    ///
    /// 捨て札の上から順に山札へ積むので、次の周も同じ順番でめくれるよ。
    /// 両方空っぽでも手数は1つ増える (何も起きない「めくる」も1手)。
    pub fn draw(&mut self) {
        if rules::can_deal_from_stock(self.stock.is_empty()) {
            if let Some(mut card) = self.stock.pop() {
                card.is_face_up = true;
                debug!("Drew {} from stock", card);
                self.waste.push(card);
            }
        } else if rules::can_reset_stock_from_waste(self.stock.is_empty(), self.waste.is_empty()) {
            debug!("Recycling {} cards from waste to stock", self.waste.len());
            while let Some(mut card) = self.waste.pop() {
                card.is_face_up = false;
                self.stock.push(card);
            }
        } else {
            debug!("Draw with empty stock and waste");
        }
        self.bump_moves();
    }

    /// 場札 `src` の一番上を場札 `dst` へ。
    pub fn move_column_to_column(&mut self, src: usize, dst: usize) -> bool {
        if src == dst {
            return false;
        }
        let (Some(source), Some(target)) = (self.columns.get(src), self.columns.get(dst)) else {
            debug!("Column move {} -> {} rejected: no such column", src, dst);
            return false;
        };
        if !rules::is_top_move_valid(source, target) {
            debug!("Column move {} -> {} rejected", src, dst);
            return false;
        }
        let Some(card) = self.columns[src].pop() else {
            return false;
        };
        debug!("Moved {} from column {} to column {}", card, src, dst);
        self.columns[dst].push(card);
        self.columns[src].reveal_top();
        self.bump_moves();
        true
    }

    /// 捨て札の一番上を場札 `dst` へ。
    pub fn move_waste_to_column(&mut self, dst: usize) -> bool {
        let Some(target) = self.columns.get(dst) else {
            return false;
        };
        if !rules::is_top_move_valid(&self.waste, target) {
            debug!("Waste -> column {} rejected", dst);
            return false;
        }
        let Some(card) = self.waste.pop() else {
            return false;
        };
        debug!("Moved {} from waste to column {}", card, dst);
        self.columns[dst].push(card);
        self.bump_moves();
        true
    }

    /// 場札 `src` の一番上を、そのスートの組札へ。裏向きのカードは動かせないよ。
    pub fn move_column_to_foundation(&mut self, src: usize) -> bool {
        let Some(card) = self.columns.get(src).and_then(Pile::peek) else {
            return false;
        };
        if !card.is_face_up {
            return false;
        }
        let Some(index) = self.accepting_foundation(card) else {
            debug!("Column {} -> foundation rejected for {}", src, card);
            return false;
        };
        let Some(card) = self.columns[src].pop() else {
            return false;
        };
        debug!("Moved {} from column {} to foundation", card, src);
        self.foundations[index].push(card);
        self.columns[src].reveal_top();
        self.bump_moves();
        true
    }

    /// 捨て札の一番上を、そのスートの組札へ。
    pub fn move_waste_to_foundation(&mut self) -> bool {
        let Some(card) = self.waste.peek() else {
            return false;
        };
        let Some(index) = self.accepting_foundation(card) else {
            debug!("Waste -> foundation rejected for {}", card);
            return false;
        };
        let Some(card) = self.waste.pop() else {
            return false;
        };
        debug!("Moved {} from waste to foundation", card);
        self.foundations[index].push(card);
        self.bump_moves();
        true
    }

    /// 手数を1つ増やす。読み込んだセーブの手数が上限でも溢れさせない。
    fn bump_moves(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }

    fn accepting_foundation(&self, card: &Card) -> Option<usize> {
        self.foundations.iter().position(|foundation| rules::is_move_valid(card, foundation))
    }

    // --- 判定 ---

    /// 4つの組札が全部13枚になったら勝ち！🏆
    pub fn is_won(&self) -> bool {
        let sizes: Vec<usize> = self.foundations.iter().map(Pile::len).collect();
        rules::check_win_condition(&sizes)
    }

    /// 今指せる手のリスト。
    pub fn available_moves(&self) -> Vec<Move> {
        moves::available_moves(self)
    }

    /// 今指せる手の数。毎回数え直すよ。
    pub fn count_available_moves(&self) -> usize {
        self.available_moves().len()
    }

    /// 勝ってないのに指せる手が1つもない。
    pub fn is_stalemated(&self) -> bool {
        self.count_available_moves() == 0 && !self.is_won()
    }

    pub fn status(&self) -> GameStatus {
        self.status_with(&self.available_moves())
    }

    /// もう数え上げた手のリストを使って状態を決める。
    pub(crate) fn status_with(&self, available: &[Move]) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if available.is_empty() {
            GameStatus::Stalemated
        } else {
            GameStatus::InProgress
        }
    }

    /// カードを受け入れてくれる組札のスート。
    pub fn foundation_for(&self, card: &Card) -> Option<Suit> {
        moves::find_foundation_move(self, card)
    }

    /// 空いた列に動かせる K が見えているか。
    pub fn king_available_for_empty_column(&self) -> bool {
        moves::king_available_for_empty_column(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
