//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::debug;

use super::common::is_descending_alternate;
use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

/// 指定されたカードが、場札の一番上に置けるかチェックする。
///
/// - 裏向きのカードは置けない
/// - 空の場札には K だけ
/// - それ以外は、一番上が表向きで、色違いでランクがちょうど 1 小さいカードだけ
pub fn can_move_to_tableau(card: &Card, tableau: &Pile) -> bool {
    if !card.is_face_up() {
        debug!("[Tableau Rule] {} is face down.", card);
        return false;
    }

    let result = match tableau.top() {
        None => card.rank() == Rank::King,
        Some(top) => top.is_face_up() && is_descending_alternate(top, card),
    };
    debug!(
        "[Tableau Rule] {} onto {:?} (top: {:?}) -> {}",
        card,
        tableau.stack_type(),
        tableau.top(),
        result
    );
    result
}

/// 場札のうち、まとめて動かせる一番上の表向きの並びが何枚目から始まるか。
///
/// 一番上が裏向き (または空) なら `None`。
pub fn movable_run_start(tableau: &Pile) -> Option<usize> {
    let cards = tableau.cards();
    let face_up = cards.iter().rev().take_while(|card| card.is_face_up()).count();
    if face_up == 0 {
        None
    } else {
        Some(cards.len() - face_up)
    }
}

/// 並びが「表向きで、色違いで 1 ずつ小さくなる」列になっているかチェックする。
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.iter().all(Card::is_face_up)
        && cards
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| is_descending_alternate(lower, upper))
}

/// 場札全体が「裏向きの山の上に、正しい表向きの列が乗っている」形かチェックする。
pub fn is_valid_tableau(tableau: &Pile) -> bool {
    match movable_run_start(tableau) {
        Some(start) => is_valid_run(&tableau.cards()[start..]),
        None => tableau.is_empty(),
    }
}
