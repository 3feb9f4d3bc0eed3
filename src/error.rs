// src/error.rs
//! エンジンの中で使うエラー型をまとめておくよ。
//!
//! 外向きのコマンドは `bool` を返すだけだけど、中では「なぜダメだったか」を
//! この enum で持ち回って、ログに出してから捨てるんだ。

use thiserror::Error;

use crate::components::card::CardId;
use crate::components::stack::StackType;

/// カード移動が拒否された理由。
///
/// どの理由でも、盤面は一切変更されていないことが保証されるよ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot move cards out of {0:?}")]
    InvalidSource(StackType),

    #[error("cannot move cards onto {0:?}")]
    InvalidTarget(StackType),

    #[error("source and target are the same pile ({0:?})")]
    SamePile(StackType),

    #[error("{card} is not in {pile:?}")]
    CardNotFound { card: CardId, pile: StackType },

    #[error("only the top card of {pile:?} can move, {card} is covered")]
    NotTopCard { card: CardId, pile: StackType },

    #[error("a foundation takes exactly one card, got {0}")]
    MultipleCardsToFoundation(usize),

    #[error("{card} cannot be placed on {target:?}")]
    IllegalPlacement { card: CardId, target: StackType },

    #[error("no foundation can take {0}")]
    NoFoundationCandidate(CardId),

    #[error("waste pile is empty")]
    EmptyWaste,
}

/// JS から受け取った JSON を解釈できなかった時のエラー。
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rank must be between 1 and 13, got {0}")]
    InvalidRank(u8),
}
