// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札が全部埋まっていれば `Won`、そうでなければ `Playing` に World の状態を合わせる。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        let status = if check_win_condition(world.foundations()) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };

        if status != world.status() {
            if status == GameStatus::Won {
                info!("WinConditionSystem: 勝利条件達成！🏆");
            }
            world.set_status(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
    use crate::components::stack::StackType;

    fn fill_foundations(world: &mut World) {
        for (i, &suit) in ALL_SUITS.iter().enumerate() {
            let cards = ALL_RANKS.iter().map(|&rank| Card::new(suit, rank).with_face_up(true)).collect();
            world.set_cards(StackType::Foundation(i as u8), cards);
        }
    }

    #[test]
    fn marks_full_foundations_as_won() {
        let mut world = World::new();
        fill_foundations(&mut world);

        WinConditionSystem::new().run(&mut world);
        assert_eq!(world.status(), GameStatus::Won);
    }

    #[test]
    fn stays_playing_when_a_card_is_missing() {
        let mut world = World::new();
        fill_foundations(&mut world);
        if let Some(pile) = world.pile_mut(StackType::Foundation(2)) {
            pile.pop();
        }

        WinConditionSystem::new().run(&mut world);
        assert_eq!(world.status(), GameStatus::Playing);
    }
}
