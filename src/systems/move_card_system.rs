// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::error::MoveError;
use crate::logic::auto_move::{find_automatic_tableau_move, find_foundation_candidate};
use crate::logic::rules::validate_move;
use crate::world::World;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードをどこに動かすか」を受け取って、ルール上可能かチェックし、
/// 可能な時だけ World の状態を更新するよ。チェックが全部終わるまで World には触らないので、
/// 失敗した時に盤面が中途半端に変わることは無いんだ。
#[derive(Debug, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `card` とその上に乗っているカードをまとめて `source` から `target` へ動かす。
    pub fn execute(
        &self,
        world: &mut World,
        card: CardId,
        source: StackType,
        target: StackType,
    ) -> Result<(), MoveError> {
        let index = validate_move(world, card, source, target)?;
        self.apply_move(world, index, source, target);
        Ok(())
    }

    /// カードを送れる組札を探して動かす。動かした先の組札を返すよ。
    pub fn move_to_foundation(
        &self,
        world: &mut World,
        card: CardId,
        source: StackType,
    ) -> Result<StackType, MoveError> {
        let target = find_foundation_candidate(world, card).ok_or(MoveError::NoFoundationCandidate(card))?;
        self.execute(world, card, source, target)?;
        Ok(target)
    }

    /// 捨て札の一番上を組札へ。
    pub fn move_waste_to_foundation(&self, world: &mut World) -> Result<StackType, MoveError> {
        let card = world.waste().top().map(|card| card.id()).ok_or(MoveError::EmptyWaste)?;
        self.move_to_foundation(world, card, StackType::Waste)
    }

    /// ダブルクリック用。まず組札、ダメなら左の列から順に場札を試すよ。
    pub fn auto_move(
        &self,
        world: &mut World,
        card: CardId,
        source: StackType,
    ) -> Result<StackType, MoveError> {
        let foundation_error = match self.move_to_foundation(world, card, source) {
            Ok(target) => return Ok(target),
            Err(err) => err,
        };
        debug!("  組札には送れなかった ({}), 場札を探します。", foundation_error);

        match find_automatic_tableau_move(world, card, source) {
            Some(target) => {
                self.execute(world, card, source, target)?;
                Ok(target)
            }
            None => Err(foundation_error),
        }
    }

    /// 実際に World の状態を更新する関数 (チェック済みの移動だけが来る)
    fn apply_move(&self, world: &mut World, index: usize, source: StackType, target: StackType) {
        let Some(source_pile) = world.pile_mut(source) else {
            return;
        };
        let moving = source_pile.split_off(index);
        // 場札と捨て札は、残った一番上のカードを表向きにする
        if matches!(source, StackType::Tableau(_) | StackType::Waste) {
            source_pile.reveal_top();
        }

        info!("  {} 枚のカードを {:?} から {:?} へ移動します！", moving.len(), source, target);
        if let Some(target_pile) = world.pile_mut(target) {
            target_pile.extend(moving);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).with_face_up(true)
    }

    fn down(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn moves_run_and_reveals_source() {
        let mut world = World::new();
        world.set_cards(StackType::Tableau(0), vec![up(Suit::Clubs, Rank::Seven)]);
        world.set_cards(
            StackType::Tableau(1),
            vec![down(Suit::Spades, Rank::Two), up(Suit::Hearts, Rank::Six), up(Suit::Spades, Rank::Five)],
        );

        let six = CardId::new(Suit::Hearts, Rank::Six);
        MoveCardSystem::new()
            .execute(&mut world, six, StackType::Tableau(1), StackType::Tableau(0))
            .unwrap();

        let target: Vec<_> = world.tableaus()[0].cards().iter().map(Card::id).collect();
        assert_eq!(
            target,
            vec![
                CardId::new(Suit::Clubs, Rank::Seven),
                CardId::new(Suit::Hearts, Rank::Six),
                CardId::new(Suit::Spades, Rank::Five)
            ]
        );
        assert_eq!(world.tableaus()[1].len(), 1);
        assert!(world.tableaus()[1].cards()[0].is_face_up(), "残ったカードはめくられるはず");
    }

    #[test]
    fn failed_move_changes_nothing() {
        let mut world = World::new();
        world.set_cards(StackType::Tableau(0), vec![up(Suit::Clubs, Rank::Seven)]);
        world.set_cards(StackType::Tableau(1), vec![down(Suit::Hearts, Rank::Two), up(Suit::Spades, Rank::Six)]);
        let before = world.snapshot();

        let six = CardId::new(Suit::Spades, Rank::Six);
        let result = MoveCardSystem::new().execute(&mut world, six, StackType::Tableau(1), StackType::Tableau(0));

        assert!(result.is_err());
        assert_eq!(world.snapshot(), before);
    }

    #[test]
    fn waste_reveals_next_card() {
        let mut world = World::new();
        world.set_cards(StackType::Waste, vec![down(Suit::Clubs, Rank::Nine), up(Suit::Hearts, Rank::Ace)]);

        let target = MoveCardSystem::new().move_waste_to_foundation(&mut world).unwrap();

        assert_eq!(target, StackType::Foundation(0));
        assert_eq!(world.waste().len(), 1);
        assert!(world.waste().cards()[0].is_face_up());
    }

    #[test]
    fn empty_waste_is_an_error() {
        let mut world = World::new();
        assert_eq!(MoveCardSystem::new().move_waste_to_foundation(&mut world), Err(MoveError::EmptyWaste));
    }

    #[test]
    fn auto_move_prefers_foundation() {
        let mut world = World::new();
        world.set_cards(StackType::Foundation(3), vec![up(Suit::Hearts, Rank::Ace)]);
        world.set_cards(StackType::Tableau(0), vec![up(Suit::Spades, Rank::Three)]);
        world.set_cards(StackType::Tableau(4), vec![down(Suit::Clubs, Rank::Four), up(Suit::Hearts, Rank::Two)]);

        let two = CardId::new(Suit::Hearts, Rank::Two);
        let target = MoveCardSystem::new().auto_move(&mut world, two, StackType::Tableau(4)).unwrap();

        assert_eq!(target, StackType::Foundation(3));
        assert!(world.tableaus()[4].cards()[0].is_face_up());
    }

    #[test]
    fn auto_move_falls_back_to_tableau() {
        let mut world = World::new();
        world.set_cards(StackType::Tableau(2), vec![up(Suit::Clubs, Rank::Eight)]);
        world.set_cards(StackType::Tableau(6), vec![up(Suit::Hearts, Rank::Seven)]);

        let seven = CardId::new(Suit::Hearts, Rank::Seven);
        let target = MoveCardSystem::new().auto_move(&mut world, seven, StackType::Tableau(6)).unwrap();

        assert_eq!(target, StackType::Tableau(2));
        assert!(world.tableaus()[6].is_empty());
    }

    #[test]
    fn auto_move_without_target_fails() {
        let mut world = World::new();
        world.set_cards(StackType::Tableau(0), vec![up(Suit::Clubs, Rank::Eight)]);
        world.set_cards(StackType::Tableau(1), vec![up(Suit::Diamonds, Rank::Four)]);
        let before = world.snapshot();

        let four = CardId::new(Suit::Diamonds, Rank::Four);
        assert!(MoveCardSystem::new().auto_move(&mut world, four, StackType::Tableau(1)).is_err());
        assert_eq!(world.snapshot(), before);
    }
}
