// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// 盤面が変わった後に毎回動かしたい処理 (勝利判定とか) をまとめる。
/// `&mut World` を受け取るので、World の中身を読んだり更新したりできるよ。
pub trait System {
    fn run(&mut self, world: &mut World);
}
