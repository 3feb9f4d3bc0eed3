// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! ここでは World を一切書き換えない。OK なら動かすカードの位置を返すので、
//! 呼び出し側はその後で初めて盤面を変更する (チェックと変更を混ぜない)。

use log::debug;

use super::{foundation, tableau};
use crate::components::card::CardId;
use crate::components::stack::{Pile, StackType};
use crate::error::MoveError;
use crate::world::World;

/// `card` とその上に乗っているカードを `source` から `target` へ動かせるか検証する。
///
/// 成功したら、`source` の中で `card` が下から何枚目にあるかを返すよ。
pub fn validate_move(
    world: &World,
    card: CardId,
    source: StackType,
    target: StackType,
) -> Result<usize, MoveError> {
    let source_pile = match source {
        StackType::Stock => None,
        _ => world.pile(source),
    }
    .ok_or(MoveError::InvalidSource(source))?;

    let target_pile = Some(target)
        .filter(|t| t.is_foundation() || t.is_tableau())
        .and_then(|t| world.pile(t))
        .ok_or(MoveError::InvalidTarget(target))?;

    if source == target {
        return Err(MoveError::SamePile(source));
    }

    let index = source_pile
        .position_of(card)
        .ok_or(MoveError::CardNotFound { card, pile: source })?;

    // 捨て札と組札は一番上の 1 枚しか取れない
    if !source.is_tableau() && index + 1 != source_pile.len() {
        return Err(MoveError::NotTopCard { card, pile: source });
    }

    check_placement(source_pile, index, target_pile)?;
    debug!("[Move Validation] {} from {:?} to {:?} is valid.", card, source, target);
    Ok(index)
}

/// 動かす束 (`index` から上) が移動先に置けるかどうか。
fn check_placement(source_pile: &Pile, index: usize, target_pile: &Pile) -> Result<(), MoveError> {
    let move_set = &source_pile.cards()[index..];
    let bottom = &move_set[0];
    let target = target_pile.stack_type();

    let allowed = match target {
        StackType::Foundation(_) => {
            if move_set.len() != 1 {
                return Err(MoveError::MultipleCardsToFoundation(move_set.len()));
            }
            foundation::can_move_to_foundation(bottom, target_pile)
        }
        // 束の中身は今までの正しい移動でしか作られないので、一番下だけ見れば十分
        StackType::Tableau(_) => tableau::can_move_to_tableau(bottom, target_pile),
        StackType::Stock | StackType::Waste => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(MoveError::IllegalPlacement { card: bottom.id(), target })
    }
}
