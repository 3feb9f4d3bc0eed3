// src/app/state_publisher.rs
//! 盤面が変わるたびに、スナップショットを購読者に配るための仕組みだよ。📮

use log::debug;

use crate::components::game_state::GameState;

/// 購読を解除する時に使う番号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

type Subscriber = Box<dyn FnMut(&GameState)>;

/// 購読者 (コールバック) のリスト。
///
/// 1 回の変更につき 1 回だけ、変更が全部終わった後のスナップショットを同期的に渡すよ。
#[derive(Default)]
pub struct StatePublisher {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u32,
}

impl StatePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// コールバックを登録する。
    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, subscriber));
        debug!("StatePublisher: subscriber {:?} added ({} total).", id, self.subscribers.len());
        id
    }

    /// 登録を解除する。見つからなければ false。
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// 全員にスナップショットを配る。
    pub fn publish(&mut self, state: &GameState) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(state);
        }
    }

    /// 特定の 1 人にだけ配る (登録直後に今の状態を渡す用)。
    pub fn publish_to(&mut self, id: SubscriptionId, state: &GameState) {
        if let Some((_, subscriber)) = self.subscribers.iter_mut().find(|(subscriber_id, _)| *subscriber_id == id) {
            subscriber(state);
        }
    }
}
