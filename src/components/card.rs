// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にして JS 側へ渡す時に使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::rules::RANK_COUNT;
use crate::error::ProtocolError;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// JSON では `"hearts"` みたいな小文字の文字列になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// デッキを作る時の並び順でのインデックス (0-3)。
    pub fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// JSON では 1〜13 の数字としてやり取りするよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1 つ上のランク。King の上は無いので `None`。
    pub fn successor(self) -> Option<Rank> {
        Rank::try_from(self.value() + 1).ok()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_RANKS
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(ProtocolError::InvalidRank(value))
    }
}

/// デッキを作る時に使う、全スートの並び。
pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// 全ランクの並び (A から K まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カード 1 枚を特定するための ID だよ！🆔
///
/// 52 枚の組み合わせ (スート × ランク) に 0〜51 の番号を振ったもの。
/// 表向きか裏向きかには一切依存しないので、ドラッグ中に表裏の情報が古くなっても
/// 同じカードを確実に見つけられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u8);

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        // 52 未満に収まるので u8 で十分
        Self((suit.index() * RANK_COUNT) as u8 + rank.value() - 1)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn suit(self) -> Suit {
        ALL_SUITS[self.index() / RANK_COUNT]
    }

    pub fn rank(self) -> Rank {
        ALL_RANKS[self.index() % RANK_COUNT]
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().label(), self.suit().symbol())
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `id`: スートとランクから決まる固定の ID
/// - `suit` / `rank`: カードの中身
/// - `is_face_up`: 表向きなら true。エンジンのルールを通してしか変わらない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::new(suit, rank),
            suit,
            rank,
            is_face_up: false,
        }
    }

    /// 表裏を指定したコピーを返す。盤面を組み立てる時に便利！
    pub fn with_face_up(mut self, is_face_up: bool) -> Self {
        self.is_face_up = is_face_up;
        self
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub(crate) fn set_face_up(&mut self, is_face_up: bool) {
        self.is_face_up = is_face_up;
    }
}

impl From<&Card> for CardId {
    fn from(card: &Card) -> Self {
        card.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{}", self.id)
        } else {
            write!(f, "[{}]", self.id)
        }
    }
}
