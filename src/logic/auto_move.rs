// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! クリックやダブルクリックされたカードを、どこに送ればいいかを探すんだ。
//!
//! ここで見つけた移動先はあくまで「候補」。実際に動かす時は必ず
//! `validate_move` でもう一度チェックされるよ。

use log::debug;

use crate::components::card::{CardId, Rank};
use crate::components::stack::StackType;
use crate::logic::rules::validate_move;
use crate::world::World;

/// カードを送る組札の候補を探すよ。
///
/// 空の組札 (カードが A の場合) か、一番上が同じスートの組札のうち、最初に見つかったもの。
/// ランクの連続はここでは見ないので、移動時のチェックで弾かれることもある。
pub fn find_foundation_candidate(world: &World, card: CardId) -> Option<StackType> {
    let candidate = world
        .foundations()
        .iter()
        .find(|pile| match pile.top() {
            None => card.rank() == Rank::Ace,
            Some(top) => top.suit() == card.suit(),
        })
        .map(|pile| pile.stack_type());
    debug!("[AutoMove] Foundation candidate for {}: {:?}", card, candidate);
    candidate
}

/// カード (とその上の束) を受け入れてくれる場札を、左の列から順に探すよ。
///
/// 移動元の列は飛ばす。見つからなければ `None`。
pub fn find_automatic_tableau_move(world: &World, card: CardId, source: StackType) -> Option<StackType> {
    let target = world
        .tableaus()
        .iter()
        .map(|pile| pile.stack_type())
        .filter(|&target| target != source)
        .find(|&target| validate_move(world, card, source, target).is_ok());
    debug!("[AutoMove] Tableau target for {} from {:?}: {:?}", card, source, target);
    target
}
