// src/app/game_engine.rs

use log::{info, warn};

use super::state_publisher::{StatePublisher, SubscriptionId};
use super::stock_handler;
use crate::components::card::{Card, CardId};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::MoveError;
use crate::logic::deck::{FisherYatesShuffler, Shuffler};
use crate::logic::rules::{can_move_to_foundation, can_move_to_tableau, check_win_condition};
use crate::system::System;
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, WinConditionSystem};
use crate::world::World;

/// ソリティアのゲームエンジン本体だよ！🃏
///
/// 盤面 (World) を 1 つだけ持っていて、全部のコマンドはここを通る。
/// 盤面が変わるたびに、変更が全部終わった後のスナップショットを購読者に 1 回ずつ配るよ。
pub struct GameEngine {
    world: World,
    shuffler: Box<dyn Shuffler>,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    win_condition_system: WinConditionSystem,
    publisher: StatePublisher,
}

impl GameEngine {
    /// OS の乱数でシャッフルするエンジンを作って、最初のゲームを配るよ。
    pub fn new() -> Self {
        Self::with_shuffler(Box::new(FisherYatesShuffler::from_entropy()))
    }

    /// 固定シードのエンジン。同じシードなら毎回同じ配り方になる。
    pub fn with_seed(seed: u64) -> Self {
        Self::with_shuffler(Box::new(FisherYatesShuffler::seeded(seed)))
    }

    pub fn with_shuffler(shuffler: Box<dyn Shuffler>) -> Self {
        let mut engine = Self::from_world(World::new(), shuffler);
        engine.init();
        engine
    }

    /// 手で組み立てた盤面からエンジンを作る。配り直しはしないよ。
    pub fn from_world(world: World, shuffler: Box<dyn Shuffler>) -> Self {
        let mut engine = Self {
            world,
            shuffler,
            deal_system: DealInitialCardsSystem,
            move_system: MoveCardSystem::new(),
            win_condition_system: WinConditionSystem::new(),
            publisher: StatePublisher::new(),
        };
        engine.win_condition_system.run(&mut engine.world);
        engine
    }

    // --- 購読 ---

    /// スナップショットの購読を始める。登録した直後に今の状態が 1 回届くよ。
    pub fn subscribe(&mut self, subscriber: Box<dyn FnMut(&GameState)>) -> SubscriptionId {
        let id = self.publisher.subscribe(subscriber);
        let state = self.world.snapshot();
        self.publisher.publish_to(id, &state);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.publisher.unsubscribe(id)
    }

    /// 今の盤面のコピー。
    pub fn state(&self) -> GameState {
        self.world.snapshot()
    }

    // --- コマンド ---

    /// 新しいゲームを配る。
    pub fn init(&mut self) -> GameState {
        info!("GameEngine: 新しいゲームを配ります。");
        self.deal_system.execute(&mut self.world, self.shuffler.as_mut());
        self.commit()
    }

    /// 山札をクリックした時の処理。山札が空なら捨て札を山札に戻す。
    pub fn draw_from_stock(&mut self) -> GameState {
        stock_handler::draw_from_stock(&mut self.world);
        self.commit()
    }

    /// `card` とその上のカードを `source` から `target` へ動かす。
    pub fn move_card(&mut self, card: CardId, source: StackType, target: StackType) -> bool {
        let result = self.move_system.execute(&mut self.world, card, source, target);
        self.finish_move(result.map(|_| target))
    }

    /// カードを受け入れてくれる組札を探して動かす。
    pub fn move_card_to_foundation(&mut self, card: CardId, source: StackType) -> bool {
        let result = self.move_system.move_to_foundation(&mut self.world, card, source);
        self.finish_move(result)
    }

    /// 捨て札の一番上を組札へ。
    pub fn move_waste_to_foundation(&mut self) -> bool {
        let result = self.move_system.move_waste_to_foundation(&mut self.world);
        self.finish_move(result)
    }

    /// ダブルクリック用: 組札 → 場札 (左から) の順に置ける場所を探して動かす。
    pub fn auto_move_card(&mut self, card: CardId, source: StackType) -> bool {
        let result = self.move_system.auto_move(&mut self.world, card, source);
        self.finish_move(result)
    }

    /// 捨て札の一番上を一番下へ回す。2 枚未満なら何もしない (配信も無し)。
    pub fn cycle_waste_pile(&mut self) {
        if stock_handler::cycle_waste_pile(&mut self.world) {
            self.commit();
        }
    }

    // --- 問い合わせ ---

    pub fn is_game_won(&self) -> bool {
        check_win_condition(self.world.foundations())
    }

    /// 今の盤面で `card` 1 枚を `target` の上に置けるか (ドロップ先のハイライト用)。
    pub fn can_move_to(&self, card: &Card, target: StackType) -> bool {
        match (target, self.world.pile(target)) {
            (StackType::Foundation(_), Some(pile)) => can_move_to_foundation(card, pile),
            (StackType::Tableau(_), Some(pile)) => can_move_to_tableau(card, pile),
            _ => false,
        }
    }

    fn finish_move(&mut self, result: Result<StackType, MoveError>) -> bool {
        match result {
            Ok(target) => {
                info!("GameEngine: moved to {:?}.", target);
                self.commit();
                true
            }
            Err(err) => {
                warn!("GameEngine: move rejected: {}", err);
                false
            }
        }
    }

    /// 変更を確定して、勝利判定をしてからスナップショットを配る。
    fn commit(&mut self) -> GameState {
        self.win_condition_system.run(&mut self.world);
        let state = self.world.snapshot();
        self.publisher.publish(&state);
        state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
