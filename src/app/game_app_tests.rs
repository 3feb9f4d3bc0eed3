// src/app/game_app_tests.rs
// GameApp (JS との境目) のテスト！ wasm-pack test で動かすよ。

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use super::game_app::GameApp;
use super::game_engine::GameEngine;
use crate::logic::deck::IdentityShuffler;

fn state_of(app: &GameApp) -> serde_json::Value {
    let json = app.get_state_json().unwrap().as_string().unwrap();
    serde_json::from_str(&json).unwrap()
}

#[wasm_bindgen_test]
fn seeded_apps_deal_the_same_game() {
    let a = GameApp::with_seed(7);
    let b = GameApp::with_seed(7);
    assert_eq!(state_of(&a), state_of(&b));
    assert_eq!(state_of(&a)["stock"]["cards"].as_array().unwrap().len(), 24);
}

#[wasm_bindgen_test]
fn with_config_reads_seed() {
    let a = GameApp::with_config(r#"{"seed": 3}"#).unwrap();
    let b = GameApp::with_seed(3);
    assert_eq!(state_of(&a), state_of(&b));
    assert!(GameApp::with_config("not json").is_err());
}

#[wasm_bindgen_test]
fn draw_returns_the_new_state() {
    let mut app = GameApp::with_seed(1);
    let json = app.draw_from_stock().unwrap().as_string().unwrap();
    let state: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(state["waste"]["cards"].as_array().unwrap().len(), 1);
    assert_eq!(state["waste"]["cards"][0]["is_face_up"], true);
}

#[wasm_bindgen_test]
fn bad_json_is_rejected_without_changes() {
    let mut app = GameApp::with_seed(2);
    let before = state_of(&app);
    assert!(!app.move_card("{", r#"{"type":"waste"}"#, r#"{"type":"tableau","index":0}"#));
    assert!(!app.move_card(r#"{"suit":"hearts","rank":1}"#, r#"{"type":"pile"}"#, r#"{"type":"waste"}"#));
    assert!(!app.auto_move_card(r#"{"suit":"hearts","rank":99}"#, r#"{"type":"waste"}"#));
    assert!(!app.move_waste_to_foundation());
    assert_eq!(state_of(&app), before);
}

#[wasm_bindgen_test]
fn snapshot_cards_can_be_passed_back() {
    // 並べ替え無しで配ると、場札 0 の一番上が K♠、場札 6 の一番上が Q♦ になる
    let mut app = GameApp::from_engine(GameEngine::with_shuffler(Box::new(IdentityShuffler)));
    let state = state_of(&app);
    let card = state["tableaus"][6]["cards"][6].to_string();
    let source = state["tableaus"][6]["stack_type"].to_string();
    assert_eq!(state["tableaus"][6]["cards"][6]["rank"], 12);

    // スナップショットのカード JSON をそのまま渡す
    assert!(app.auto_move_card(&card, &source));

    let after = state_of(&app);
    assert_eq!(after["tableaus"][0]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(after["tableaus"][6]["cards"].as_array().unwrap().len(), 6);
    assert_eq!(after["tableaus"][6]["cards"][5]["is_face_up"], true);
}

#[wasm_bindgen_test]
fn subscribers_get_json_snapshots() {
    let mut app = GameApp::with_seed(5);
    let received = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&received);
    let closure = Closure::wrap(Box::new(move |json: String| sink.borrow_mut().push(json)) as Box<dyn FnMut(String)>);
    let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();

    let id = app.subscribe(callback);
    app.draw_from_stock().unwrap();
    assert!(app.unsubscribe(id));
    app.draw_from_stock().unwrap();

    assert_eq!(received.borrow().len(), 2);
    let last: serde_json::Value = serde_json::from_str(&received.borrow()[1]).unwrap();
    assert_eq!(last["status"], "playing");
    drop(closure);
}
