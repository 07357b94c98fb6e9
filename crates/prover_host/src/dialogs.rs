//! Blocking dialog contracts for confirmations and failure/completion notices.

use std::{cell::Cell, cell::RefCell, rc::Rc};

/// Host service for blocking user dialogs.
///
/// The workbench keeps the original interaction model: deletes require a
/// confirmation prompt, write failures surface the raw server text in a
/// blocking alert, and proving completion is announced the same way.
pub trait DialogService {
    /// Asks the user to confirm a destructive action; `false` abandons it.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a blocking failure message.
    fn alert(&self, message: &str);

    /// Announces a completed operation.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op dialog adapter; declines every confirmation.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn confirm(&self, _message: &str) -> bool {
        false
    }

    fn alert(&self, _message: &str) {}

    fn notify(&self, _message: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded dialog interaction.
pub enum DialogEvent {
    /// A confirmation prompt with its message.
    Confirm(String),
    /// A blocking failure alert with its message.
    Alert(String),
    /// A completion notice with its message.
    Notify(String),
}

#[derive(Debug, Clone)]
/// Scripted dialog adapter for native tests; records every interaction.
pub struct MemoryDialogService {
    answer: Rc<Cell<bool>>,
    events: Rc<RefCell<Vec<DialogEvent>>>,
}

impl MemoryDialogService {
    /// Creates a recorder that answers every confirmation with `answer`.
    pub fn new(answer: bool) -> Self {
        Self {
            answer: Rc::new(Cell::new(answer)),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Changes the scripted confirmation answer.
    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    /// Returns the recorded interactions in order.
    pub fn events(&self) -> Vec<DialogEvent> {
        self.events.borrow().clone()
    }
}

impl DialogService for MemoryDialogService {
    fn confirm(&self, message: &str) -> bool {
        self.events
            .borrow_mut()
            .push(DialogEvent::Confirm(message.to_string()));
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(DialogEvent::Alert(message.to_string()));
    }

    fn notify(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(DialogEvent::Notify(message.to_string()));
    }
}
