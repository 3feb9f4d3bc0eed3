// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod game_state;
pub mod stack;

pub use card::{Card, CardId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::{GameState, GameStatus};
pub use stack::{Pile, StackType};
