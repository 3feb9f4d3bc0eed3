// src/systems/deal_system.rs

use log::info;

use crate::components::stack::StackType;
use crate::config::rules::TABLEAU_COUNT;
use crate::logic::deck::{create_standard_deck, Shuffler};
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Debug, Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 新しいカードデッキ (52枚、全部裏向き) を作ってシャッフルする。
    /// 2. World の山を全部空にする (前のゲームのお掃除🧹)。
    /// 3. 場札の列 i (0-6) に、デッキの一番上 (末尾) から i+1 枚ずつ配る。
    ///    最後に配った 1 枚だけ表向き。
    /// 4. 残りの 24 枚は、そのままの順番で裏向きの山札になる。
    pub fn execute(&self, world: &mut World, shuffler: &mut dyn Shuffler) {
        let mut deck = create_standard_deck();
        shuffler.shuffle(&mut deck);
        info!("🃏 デッキ作成完了！ ({}枚)", deck.len());

        world.clear();

        for tableau_index in 0..TABLEAU_COUNT {
            let stack_type = StackType::Tableau(tableau_index as u8);
            for card_in_tableau in 0..=tableau_index {
                let Some(mut card) = deck.pop() else {
                    return;
                };
                if card_in_tableau == tableau_index {
                    card.set_face_up(true);
                }
                if let Some(pile) = world.pile_mut(stack_type) {
                    pile.push(card);
                }
            }
        }

        info!("山札 (Stock) に残り {} 枚を配置します。", deck.len());
        world.set_cards(StackType::Stock, deck);
    }
}
