// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;
pub mod world;

// よく使う型は crate のルートからも使えるようにしておくよ。
pub use app::game_app::GameApp;
pub use app::game_engine::GameEngine;
pub use app::state_publisher::SubscriptionId;
pub use components::{Card, CardId, GameState, GameStatus, Pile, Rank, StackType, Suit};
pub use config::GameConfig;
pub use error::{MoveError, ProtocolError};
pub use logic::deck::{FisherYatesShuffler, IdentityShuffler, Shuffler};
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(GameConfig::default().log_level);
    log::info!("Panic hook and console logger set!");
}
