//! Declarative UI composition for the workbench shell.
//!
//! Components read [`crate::model::WorkbenchState`] through the runtime
//! context and dispatch actions; they never mutate state directly. Server
//! strings always render as text nodes.

mod content;
mod forms;
mod navigation;
mod workbench;

pub use workbench::WorkbenchShell;
