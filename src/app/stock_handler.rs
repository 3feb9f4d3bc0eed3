// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste)
//! and double-clicking the Waste pile (cycling through drawn cards).

use log::info;

use crate::logic::rules::stock_waste;
use crate::world::World;

/// Stock click: deals one card, or recycles the Waste when the Stock is empty.
///
/// Never fails; with both piles empty nothing changes.
pub fn draw_from_stock(world: &mut World) {
    if !deal_one_card_from_stock(world) {
        reset_waste_to_stock(world);
    }
}

/// Deals one card from the Stock pile to the Waste pile.
/// Returns true if a card was dealt, false otherwise.
pub fn deal_one_card_from_stock(world: &mut World) -> bool {
    let (stock, waste) = world.stock_and_waste_mut();
    if !stock_waste::can_deal_from_stock(stock.is_empty()) {
        info!("  Stock is empty. Cannot deal.");
        return false;
    }

    let Some(mut card) = stock.pop() else {
        return false;
    };
    // Only the Waste top stays face up
    if let Some(previous_top) = waste.cards_mut().last_mut() {
        previous_top.set_face_up(false);
    }
    card.set_face_up(true);
    info!("  Card {} moved to Waste.", card);
    waste.push(card);
    true
}

/// Resets the Waste pile back to the Stock pile when Stock is empty.
/// The Waste order is reversed and every card is turned face down.
/// Returns true if the reset was performed, false otherwise.
pub fn reset_waste_to_stock(world: &mut World) -> bool {
    let (stock, waste) = world.stock_and_waste_mut();
    if !stock_waste::can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
        info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }

    info!("  Resetting {} cards from Waste to Stock.", waste.len());
    let mut cards = waste.take_all();
    cards.reverse();
    for card in &mut cards {
        card.set_face_up(false);
    }
    stock.set_cards(cards);
    true
}

/// Moves the Waste top to the bottom of the Waste (face down) and reveals the new top.
/// Returns false when the Waste holds fewer than two cards.
pub fn cycle_waste_pile(world: &mut World) -> bool {
    let (_, waste) = world.stock_and_waste_mut();
    if !stock_waste::can_cycle_waste(waste.len()) {
        return false;
    }

    let cards = waste.cards_mut();
    if let Some(mut top) = cards.pop() {
        top.set_face_up(false);
        cards.insert(0, top);
    }
    waste.reveal_top();
    info!("  Waste cycled, new top: {:?}", waste.top());
    true
}
