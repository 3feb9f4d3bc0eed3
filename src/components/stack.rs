// src/components/stack.rs

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが置かれる場所の種類を示す Enum だよ。
///
/// 山札と捨て札は 1 つずつ、組札は 4 つ (0-3)、場札は 7 列 (0-6)。
/// JSON では `{"type": "tableau", "index": 3}` や `{"type": "stock"}` の形になるよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "index", rename_all = "lowercase")]
pub enum StackType {
    /// 山札 (Stock)。裏向きで、プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。A から K まで同じスートで積み上げる。
    Foundation(u8),
    /// 場札 (Tableau)。色違いで 1 つずつ小さくなるように積む。
    Tableau(u8),
}

impl StackType {
    /// インデックスが範囲内かチェックする。範囲外の参照は呼び出し側のバグだよ。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(index) => usize::from(index) < FOUNDATION_COUNT,
            StackType::Tableau(index) => usize::from(index) < TABLEAU_COUNT,
        }
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }
}

/// カードの山 1 つ分。
///
/// `cards` の最後の要素が一番上 (top) のカードだよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn with_cards(stack_type: StackType, cards: Vec<Card>) -> Self {
        Self { stack_type, cards }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// ID でカードを探して、下から何枚目かを返すよ。表裏は見ない！
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `index` から上のカードをまとめて取り外す (移動用)。
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    pub(crate) fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// 中身を全部取り出して空にする。
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub(crate) fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// 一番上のカードを表向きにする。空なら何もしない。
    pub(crate) fn reveal_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.set_face_up(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn stack_type_ranges() {
        assert!(StackType::Foundation(3).is_valid());
        assert!(!StackType::Foundation(4).is_valid());
        assert!(StackType::Tableau(6).is_valid());
        assert!(!StackType::Tableau(7).is_valid());
        assert!(StackType::Stock.is_valid());
    }

    #[test]
    fn stack_type_json_shape() {
        let json = serde_json::to_string(&StackType::Tableau(2)).unwrap();
        assert_eq!(json, r#"{"type":"tableau","index":2}"#);

        let stock: StackType = serde_json::from_str(r#"{"type":"stock"}"#).unwrap();
        assert_eq!(stock, StackType::Stock);
        let foundation: StackType = serde_json::from_str(r#"{"type":"foundation","index":1}"#).unwrap();
        assert_eq!(foundation, StackType::Foundation(1));
    }

    #[test]
    fn find_card_ignores_face_state() {
        let pile = Pile::with_cards(
            StackType::Tableau(0),
            vec![
                Card::new(Suit::Clubs, Rank::Nine),
                Card::new(Suit::Hearts, Rank::Four).with_face_up(true),
            ],
        );
        assert_eq!(pile.position_of(CardId::new(Suit::Hearts, Rank::Four)), Some(1));
        assert_eq!(pile.position_of(CardId::new(Suit::Clubs, Rank::Nine)), Some(0));
        assert_eq!(pile.position_of(CardId::new(Suit::Spades, Rank::Nine)), None);
        assert_eq!(pile.top().map(Card::id), Some(CardId::new(Suit::Hearts, Rank::Four)));
    }

    #[test]
    fn reveal_top_flips_only_the_top() {
        let mut pile = Pile::with_cards(
            StackType::Tableau(1),
            vec![Card::new(Suit::Clubs, Rank::Nine), Card::new(Suit::Clubs, Rank::Two)],
        );
        pile.reveal_top();
        assert!(!pile.cards()[0].is_face_up());
        assert!(pile.cards()[1].is_face_up());
    }
}
