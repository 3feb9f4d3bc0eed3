// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod game_app;
pub mod game_engine;
pub mod init_handler;
pub mod state_getter;
pub mod state_publisher;
pub mod stock_handler;


#[cfg(all(test, target_arch = "wasm32"))]
mod game_app_tests;
