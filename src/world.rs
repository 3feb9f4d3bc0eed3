// src/world.rs

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム世界の全ての山と状態を持つ、中心的な構造体だよ！🌍
///
/// 盤面の「本物」はここにしか無い。外に出ていくのは `snapshot()` で作ったコピーだけで、
/// 中身を書き換えられるのはエンジンのシステムたちだけなんだ。
#[derive(Debug, Clone)]
pub struct World {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableaus: [Pile; TABLEAU_COUNT],
    status: GameStatus,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 全部空っぽの World を作るよ。
    pub fn new() -> Self {
        Self {
            stock: Pile::new(StackType::Stock),
            waste: Pile::new(StackType::Waste),
            foundations: std::array::from_fn(|i| Pile::new(StackType::Foundation(i as u8))),
            tableaus: std::array::from_fn(|i| Pile::new(StackType::Tableau(i as u8))),
            status: GameStatus::Playing,
        }
    }

    /// 全ての山を空にして、状態をプレイ中に戻す。
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(index) => self.foundations.get(usize::from(index)),
            StackType::Tableau(index) => self.tableaus.get(usize::from(index)),
        }
    }

    pub(crate) fn pile_mut(&mut self, stack_type: StackType) -> Option<&mut Pile> {
        match stack_type {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(index) => self.foundations.get_mut(usize::from(index)),
            StackType::Tableau(index) => self.tableaus.get_mut(usize::from(index)),
        }
    }

    /// 指定した山の中身を丸ごと差し替える。盤面を手で組み立てる時用。
    ///
    /// インデックスが範囲外なら何もせず `false` を返すよ。
    pub fn set_cards(&mut self, stack_type: StackType, cards: Vec<Card>) -> bool {
        match self.pile_mut(stack_type) {
            Some(pile) => {
                pile.set_cards(cards);
                true
            }
            None => false,
        }
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

    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// 盤面にあるカードの総数 (52 枚のはず)。
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.tableaus.iter().map(Pile::len).sum::<usize>()
    }

    /// 今の盤面の完全なコピーを作るよ。📸
    pub fn snapshot(&self) -> GameState {
        GameState::new(
            self.stock.clone(),
            self.waste.clone(),
            self.foundations.clone(),
            self.tableaus.clone(),
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn new_world_is_empty() {
        let world = World::new();
        assert_eq!(world.card_count(), 0);
        assert_eq!(world.status(), GameStatus::Playing);
        for (i, pile) in world.tableaus().iter().enumerate() {
            assert_eq!(pile.stack_type(), StackType::Tableau(i as u8));
        }
        for (i, pile) in world.foundations().iter().enumerate() {
            assert_eq!(pile.stack_type(), StackType::Foundation(i as u8));
        }
    }

    #[test]
    fn out_of_range_piles_are_none() {
        let mut world = World::new();
        assert!(world.pile(StackType::Tableau(7)).is_none());
        assert!(world.pile(StackType::Foundation(4)).is_none());
        assert!(!world.set_cards(StackType::Tableau(9), vec![Card::new(Suit::Hearts, Rank::Ace)]));
        assert_eq!(world.card_count(), 0);
    }

    #[test]
    fn snapshot_is_independent_of_the_world() {
        let mut world = World::new();
        world.set_cards(StackType::Waste, vec![Card::new(Suit::Hearts, Rank::Ace).with_face_up(true)]);
        let before = world.snapshot();

        if let Some(pile) = world.pile_mut(StackType::Waste) {
            pile.pop();
        }

        assert_eq!(before.waste().len(), 1, "スナップショットは後の変更に影響されないはず");
        assert!(world.waste().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut world = World::new();
        world.set_cards(StackType::Stock, vec![Card::new(Suit::Clubs, Rank::Two)]);
        world.set_status(GameStatus::Won);
        world.clear();
        assert_eq!(world.card_count(), 0);
        assert_eq!(world.status(), GameStatus::Playing);
    }
}
