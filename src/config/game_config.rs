// src/config/game_config.rs
//! JS 側から渡される設定 (JSON) を受け取る構造体だよ。

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// ゲームエンジンの設定。
///
/// 省略されたフィールドは `Default` の値になるので、`{}` だけでも OK！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルのシード。`None` なら OS の乱数で毎回違う配り方になる。
    pub seed: Option<u64>,
    /// コンソールに出すログのレベル。
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込むよ。
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }
}
