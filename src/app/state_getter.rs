//! Converts a game state snapshot to JSON for the JS side.

use log::{debug, error};

use crate::components::game_state::GameState;
use crate::error::ProtocolError;

/// スナップショットを JSON 文字列にするよ。
pub fn game_state_to_json(state: &GameState) -> Result<String, ProtocolError> {
    match serde_json::to_string(state) {
        Ok(json_string) => {
            debug!("Successfully serialized game state to JSON ({} bytes).", json_string.len());
            Ok(json_string)
        }
        Err(e) => {
            error!("Failed to serialize game state: {}", e);
            Err(e.into())
        }
    }
}
