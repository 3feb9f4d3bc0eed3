// src/protocol.rs

// このファイルは、JS (画面側) とエンジンの間でやり取りするデータの形を定義するよ！💌
// 山は StackType (`{"type": "tableau", "index": 3}`)、カードは CardRef で指定する。
use serde::{Deserialize, Serialize};

use crate::components::card::{CardId, Rank, Suit};
use crate::components::stack::StackType;
use crate::error::ProtocolError;

/// JS 側から「このカード」と指定する時の形。
///
/// スナップショットに入っているカードの JSON をそのまま渡しても OK。
/// `id` や `is_face_up` みたいな他のフィールドは無視されるので、
/// 表裏の情報が古くてもちゃんと同じカードを指せるよ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardRef {
    pub fn id(self) -> CardId {
        CardId::new(self.suit, self.rank)
    }
}

pub fn parse_card_ref(json: &str) -> Result<CardId, ProtocolError> {
    let card: CardRef = serde_json::from_str(json)?;
    Ok(card.id())
}

pub fn parse_stack_type(json: &str) -> Result<StackType, ProtocolError> {
    Ok(serde_json::from_str(json)?)
}
