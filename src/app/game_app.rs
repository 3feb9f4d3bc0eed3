// src/app/game_app.rs

use js_sys::Error;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use super::game_engine::GameEngine;
use super::init_handler;
use super::state_getter;
use super::state_publisher::SubscriptionId;
use crate::components::card::CardId;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::GameConfig;
use crate::logging;
use crate::protocol;

/// JavaScript から使うソリティアのアプリ本体だよ！
///
/// カードと山は JSON 文字列で受け取る。
/// - カード: `{"suit": "hearts", "rank": 1}` (スナップショットのカードをそのまま渡しても OK)
/// - 山: `{"type": "tableau", "index": 3}` / `{"type": "waste"}`
///
/// 盤面を返すメソッドは、スナップショットの JSON 文字列を返すよ。
#[wasm_bindgen]
pub struct GameApp {
    engine: GameEngine,
}

#[wasm_bindgen]
impl GameApp {
    /// 新しいゲームを配った状態で作る。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 作成します。");
        Self { engine: GameEngine::new() }
    }

    /// シード固定で作る。テストやリプレイ用。
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Self {
        Self { engine: GameEngine::with_seed(seed) }
    }

    /// 設定 JSON (`{"seed": 42, "log_level": "debug"}`) から作る。
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            error!("GameApp: 設定を読めませんでした: {}", e);
            JsValue::from(Error::new(&format!("Invalid config: {}", e)))
        })?;
        logging::init(config.log_level);
        Ok(Self { engine: init_handler::initialize_engine(&config) })
    }

    /// 新しいゲームを配り直して、その盤面を返す。
    #[wasm_bindgen]
    pub fn init(&mut self) -> Result<JsValue, JsValue> {
        let state = self.engine.init();
        to_js(&state)
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.state())
    }

    /// 山札をクリックした時。
    #[wasm_bindgen(js_name = drawFromStock)]
    pub fn draw_from_stock(&mut self) -> Result<JsValue, JsValue> {
        let state = self.engine.draw_from_stock();
        to_js(&state)
    }

    #[wasm_bindgen(js_name = moveCard)]
    pub fn move_card(&mut self, card_json: &str, source_json: &str, target_json: &str) -> bool {
        let (Some(card), Some(source), Some(target)) =
            (parse_card(card_json), parse_stack(source_json), parse_stack(target_json))
        else {
            return false;
        };
        self.engine.move_card(card, source, target)
    }

    #[wasm_bindgen(js_name = moveCardToFoundation)]
    pub fn move_card_to_foundation(&mut self, card_json: &str, source_json: &str) -> bool {
        let (Some(card), Some(source)) = (parse_card(card_json), parse_stack(source_json)) else {
            return false;
        };
        self.engine.move_card_to_foundation(card, source)
    }

    #[wasm_bindgen(js_name = moveWasteToFoundation)]
    pub fn move_waste_to_foundation(&mut self) -> bool {
        self.engine.move_waste_to_foundation()
    }

    /// ダブルクリックされたカードを置ける場所へ自動で動かす。
    #[wasm_bindgen(js_name = autoMoveCard)]
    pub fn auto_move_card(&mut self, card_json: &str, source_json: &str) -> bool {
        let (Some(card), Some(source)) = (parse_card(card_json), parse_stack(source_json)) else {
            return false;
        };
        self.engine.auto_move_card(card, source)
    }

    #[wasm_bindgen(js_name = cycleWastePile)]
    pub fn cycle_waste_pile(&mut self) {
        self.engine.cycle_waste_pile();
    }

    #[wasm_bindgen(js_name = isGameWon)]
    pub fn is_game_won(&self) -> bool {
        self.engine.is_game_won()
    }

    /// 盤面が変わるたびに `callback(stateJson)` を呼んでもらう。
    /// 登録した直後にも今の盤面で 1 回呼ばれるよ。戻り値は解除用の番号。
    ///
    /// コールバックの中から GameApp のメソッドを呼んではダメ (まだ借用中なので例外になる)。
    /// 勝敗 (`status`) も含めて、必要な情報は渡された JSON から読んでね。
    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u32 {
        let SubscriptionId(id) = self.engine.subscribe(Box::new(move |state: &GameState| {
            let json = match state_getter::game_state_to_json(state) {
                Ok(json) => json,
                Err(_) => return,
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                error!("GameApp: subscriber threw: {:?}", e);
            }
        }));
        id
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&mut self, id: u32) -> bool {
        self.engine.unsubscribe(SubscriptionId(id))
    }
}

#[cfg(test)]
impl GameApp {
    pub(crate) fn from_engine(engine: GameEngine) -> Self {
        Self { engine }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(state: &GameState) -> Result<JsValue, JsValue> {
    state_getter::game_state_to_json(state)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from(Error::new(&format!("Failed to serialize game state: {}", e))))
}

fn parse_card(json: &str) -> Option<CardId> {
    protocol::parse_card_ref(json)
        .map_err(|e| warn!("GameApp: カード指定を読めませんでした: {}. Input: {}", e, json))
        .ok()
}

fn parse_stack(json: &str) -> Option<StackType> {
    protocol::parse_stack_type(json)
        .map_err(|e| warn!("GameApp: 山の指定を読めませんでした: {}. Input: {}", e, json))
        .ok()
}
