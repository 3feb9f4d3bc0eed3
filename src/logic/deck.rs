// src/logic/deck.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// ハート → ダイヤ → クラブ → スペードの順に、それぞれ A から K まで並ぶ。
/// 生成された時点では、すべてのカードは裏向きだよ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// デッキの並べ替え方を差し替えられるようにするトレイト。
///
/// 本番は `FisherYatesShuffler`、テストでは `IdentityShuffler` を使って
/// 配り方を固定できるよ。
pub trait Shuffler {
    fn shuffle(&mut self, deck: &mut [Card]);
}

/// Fisher–Yates でデッキを一様ランダムに並べ替えるシャッフラー。🎲
///
/// 最後のインデックスから 1 まで下りながら、`[0, i]` の中から選んだ位置と入れ替える。
pub struct FisherYatesShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> FisherYatesShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FisherYatesShuffler<StdRng> {
    /// OS の乱数でシードする。毎回違う配り方になるよ。
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// 固定シード。同じシードなら同じ配り方になる。
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for FisherYatesShuffler<R> {
    fn shuffle(&mut self, deck: &mut [Card]) {
        for i in (1..deck.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            deck.swap(i, j);
        }
    }
}

/// 何もしないシャッフラー。デッキは作った順番のまま配られる。
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _deck: &mut [Card]) {}
}
