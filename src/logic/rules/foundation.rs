//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

/// 指定されたカードが、組札の一番上に置けるかチェックする。
///
/// - 裏向きのカードは置けない
/// - 空の組札には A だけ
/// - それ以外は、一番上と同じスートで、ランクがちょうど 1 大きいカードだけ
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    if !card.is_face_up() {
        debug!("[Foundation Rule] {} is face down.", card);
        return false;
    }

    let result = match foundation.top() {
        None => card.rank() == Rank::Ace,
        Some(top) => card.suit() == top.suit() && top.rank().successor() == Some(card.rank()),
    };
    debug!(
        "[Foundation Rule] {} onto {:?} (top: {:?}) -> {}",
        card,
        foundation.stack_type(),
        foundation.top().map(Card::id),
        result
    );
    result
}

/// 組札の中身が「A から始まる同じスートの連番」になっているかチェックする。
pub fn is_valid_foundation(foundation: &Pile) -> bool {
    let cards = foundation.cards();
    let starts_with_ace = cards.first().map_or(true, |card| card.rank() == Rank::Ace);
    starts_with_ace
        && cards.iter().tuple_windows().all(|(lower, upper)| {
            lower.suit() == upper.suit() && lower.rank().successor() == Some(upper.rank())
        })
}
