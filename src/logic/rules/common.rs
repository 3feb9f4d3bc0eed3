//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }
}

/// `upper` を `lower` の上に場札として重ねられる並びかどうか。
///
/// 色が違って、ランクがちょうど 1 小さい時だけ true。表裏は見ないよ。
pub fn is_descending_alternate(lower: &Card, upper: &Card) -> bool {
    let colors_different = CardColor::from_suit(lower.suit()) != CardColor::from_suit(upper.suit());
    let rank_is_one_less = upper.rank().value() + 1 == lower.rank().value();
    colors_different && rank_is_one_less
}
