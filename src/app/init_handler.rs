// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。

use log::info;

use super::game_engine::GameEngine;
use crate::config::GameConfig;

/// 設定からエンジンを作る。シードがあれば配り方が固定されるよ。
pub(crate) fn initialize_engine(config: &GameConfig) -> GameEngine {
    match config.seed {
        Some(seed) => {
            info!("App::Init: seeded engine (seed = {}).", seed);
            GameEngine::with_seed(seed)
        }
        None => {
            info!("App::Init: engine seeded from entropy.");
            GameEngine::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_deals_the_same_game() {
        let config = GameConfig { seed: Some(99), ..GameConfig::default() };
        let a = initialize_engine(&config);
        let b = initialize_engine(&config);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.state().cards().count(), 52);
    }
}
