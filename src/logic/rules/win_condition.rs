//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::Pile;
use crate::config::rules::{FOUNDATION_COUNT, RANK_COUNT};

/// ゲームのクリア条件（4 つの組札が全部 13 枚）を判定する。
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    foundations.len() == FOUNDATION_COUNT && foundations.iter().all(|pile| pile.len() == RANK_COUNT)
}
