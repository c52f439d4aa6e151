//! Turn ownership and the wallet carried between levels.
//!
//! The player never reaches for a global game manager: whoever hosts it hands
//! over a [`TurnAuthority`] when the player is activated.

use crate::components::Element;
use log::info;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Coins and unlocked elements that survive level reloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: i32,
    pub elements: BTreeSet<Element>,
}

impl Wallet {
    pub fn with_coins(coins: i32) -> Self {
        Self {
            coins,
            elements: BTreeSet::new(),
        }
    }
}

/// Owner of whose-turn state and the wallet
pub trait TurnAuthority {
    fn is_players_turn(&self) -> bool;

    fn set_players_turn(&mut self, players_turn: bool);

    fn wallet(&self) -> Wallet;

    fn set_wallet(&mut self, wallet: Wallet);

    fn notify_game_over(&mut self);

    /// Add an element to the wallet. Unlocking twice is a no-op.
    fn unlock_element(&mut self, element: Element) {
        let mut wallet = self.wallet();
        if wallet.elements.insert(element) {
            self.set_wallet(wallet);
        }
    }
}

/// Lets the host keep a handle on the authority it lent to the player.
impl<T: TurnAuthority> TurnAuthority for Rc<RefCell<T>> {
    fn is_players_turn(&self) -> bool {
        self.borrow().is_players_turn()
    }

    fn set_players_turn(&mut self, players_turn: bool) {
        self.borrow_mut().set_players_turn(players_turn);
    }

    fn wallet(&self) -> Wallet {
        self.borrow().wallet()
    }

    fn set_wallet(&mut self, wallet: Wallet) {
        self.borrow_mut().set_wallet(wallet);
    }

    fn notify_game_over(&mut self) {
        self.borrow_mut().notify_game_over();
    }

    fn unlock_element(&mut self, element: Element) {
        self.borrow_mut().unlock_element(element);
    }
}

/// Game manager for a run of rooms. With no enemies to move, the room's turn
/// is simply handed back to the player.
#[derive(Debug, Clone)]
pub struct RoomGameManager {
    players_turn: bool,
    wallet: Wallet,
    level: u32,
    game_over: bool,
    game_over_notifications: u32,
}

impl RoomGameManager {
    pub fn new() -> Self {
        Self::with_wallet(Wallet::default())
    }

    pub fn with_wallet(wallet: Wallet) -> Self {
        Self {
            players_turn: true,
            wallet,
            level: 1,
            game_over: false,
            game_over_notifications: 0,
        }
    }

    /// Run the room's side of the turn and give control back to the player
    pub fn finish_room_turn(&mut self) {
        if !self.players_turn && !self.game_over {
            self.players_turn = true;
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
        self.players_turn = true;
        info!("entering level {}", self.level);
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_over_notifications(&self) -> u32 {
        self.game_over_notifications
    }
}

impl Default for RoomGameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnAuthority for RoomGameManager {
    fn is_players_turn(&self) -> bool {
        self.players_turn
    }

    fn set_players_turn(&mut self, players_turn: bool) {
        self.players_turn = players_turn;
    }

    fn wallet(&self) -> Wallet {
        self.wallet.clone()
    }

    fn set_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }

    fn notify_game_over(&mut self) {
        self.game_over = true;
        self.game_over_notifications += 1;
        self.players_turn = false;
        info!("game over after {} level(s)", self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_element_is_idempotent() {
        let mut manager = RoomGameManager::new();
        manager.unlock_element(Element::Fire);
        manager.unlock_element(Element::Fire);
        assert_eq!(manager.wallet().elements.len(), 1);
    }

    #[test]
    fn test_unlock_keeps_coins() {
        let mut manager = RoomGameManager::with_wallet(Wallet::with_coins(7));
        manager.unlock_element(Element::Fire);
        assert_eq!(manager.wallet().coins, 7);
    }

    #[test]
    fn test_finish_room_turn_returns_turn() {
        let mut manager = RoomGameManager::new();
        manager.set_players_turn(false);
        manager.finish_room_turn();
        assert!(manager.is_players_turn());
    }

    #[test]
    fn test_no_turn_after_game_over() {
        let mut manager = RoomGameManager::new();
        manager.notify_game_over();
        manager.finish_room_turn();
        assert!(!manager.is_players_turn());
        assert!(manager.is_game_over());
    }

    #[test]
    fn test_shared_handle_sees_writes() {
        let shared = Rc::new(RefCell::new(RoomGameManager::new()));
        let mut lent = Rc::clone(&shared);
        lent.set_wallet(Wallet::with_coins(3));
        lent.set_players_turn(false);
        assert_eq!(shared.borrow().wallet().coins, 3);
        assert!(!shared.borrow().is_players_turn());
    }

    #[test]
    fn test_wallet_serializes() {
        let mut wallet = Wallet::with_coins(25);
        wallet.elements.insert(Element::Fire);
        let json = serde_json::to_string(&wallet).unwrap();
        assert_eq!(json, r#"{"coins":25,"elements":["Fire"]}"#);
    }
}
