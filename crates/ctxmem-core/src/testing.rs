//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::clock::ManualClock;
use crate::db::MemoryKv;
use crate::host::{PickItem, Prompter};
use crate::note::NoteStore;

pub const NOW: i64 = 1_700_000_000_000;

pub fn memory_store() -> (Arc<NoteStore>, Arc<ManualClock>) {
    let clock = ManualClock::new(NOW);
    let store = NoteStore::new(Arc::new(MemoryKv::new()), clock.clone());
    (Arc::new(store), clock)
}

/// Prompter answering from a script and recording everything shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<Option<String>>>,
    picks: RefCell<VecDeque<Option<usize>>>,
    actions: RefCell<VecDeque<Option<usize>>>,
    pub infos: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    pub picked_from: RefCell<Vec<Vec<PickItem>>>,
    pub action_messages: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(self, input: Option<&str>) -> Self {
        self.inputs.borrow_mut().push_back(input.map(String::from));
        self
    }

    pub fn with_pick(self, pick: Option<usize>) -> Self {
        self.picks.borrow_mut().push_back(pick);
        self
    }

    pub fn with_action(self, action: Option<usize>) -> Self {
        self.actions.borrow_mut().push_back(action);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _prompt: &str, _placeholder: &str) -> Option<String> {
        self.inputs.borrow_mut().pop_front().flatten()
    }

    fn pick(&self, _placeholder: &str, items: &[PickItem]) -> Option<usize> {
        self.picked_from.borrow_mut().push(items.to_vec());
        self.picks.borrow_mut().pop_front().flatten()
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn info_with_actions(&self, message: &str, _actions: &[&str]) -> Option<usize> {
        self.action_messages.borrow_mut().push(message.to_string());
        self.actions.borrow_mut().pop_front().flatten()
    }
}
