// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::stack::{Pile, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 4 つの組札が全部 K まで積み上がった！
    Won,
}

/// 盤面のスナップショット。
///
/// 変更があるたびにエンジンから丸ごとコピーされて配られるよ。
/// 中身は読み取り専用のアクセサしか無いので、受け取った側がいじっても
/// エンジンの状態には一切影響しないんだ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableaus: [Pile; TABLEAU_COUNT],
    status: GameStatus,
}

impl GameState {
    pub(crate) fn new(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_COUNT],
        tableaus: [Pile; TABLEAU_COUNT],
        status: GameStatus,
    ) -> Self {
        Self { stock, waste, foundations, tableaus, status }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableaus
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// 指定した場所の山を取り出す。インデックスが範囲外なら `None`。
    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(index) => self.foundations.get(usize::from(index)),
            StackType::Tableau(index) => self.tableaus.get(usize::from(index)),
        }
    }

    /// 全ての山を 山札 → 捨て札 → 組札 → 場札 の順に並べる。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    /// 盤面にある全カード。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.piles().flat_map(|pile| pile.cards().iter())
    }
}
