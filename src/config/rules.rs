// src/config/rules.rs
//! クロンダイクの盤面サイズに関する定数を定義するよ！
//! デッキの枚数や、組札・場札の数など。

pub const SUIT_COUNT: usize = 4; // スートの数 ❤️♦️♣️♠️
pub const RANK_COUNT: usize = 13; // 1スートあたりのランク数 (A〜K)
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT; // 52枚

pub const FOUNDATION_COUNT: usize = 4; // 組札 (Foundation) の数
pub const TABLEAU_COUNT: usize = 7; // 場札 (Tableau) の列数

// 場札に配る枚数は 1 + 2 + ... + 7 = 28 枚
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
// 残りが山札 (Stock) になる
pub const STOCK_DEAL_SIZE: usize = DECK_SIZE - TABLEAU_DEAL_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_sizes_add_up() {
        assert_eq!(DECK_SIZE, 52);
        assert_eq!(TABLEAU_DEAL_SIZE, 28);
        assert_eq!(STOCK_DEAL_SIZE, 24);
    }
}
