//! View-state model, reducer, and Leptos shell for the proof workbench.

pub mod commands;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;

pub use components::WorkbenchShell;
pub use host::WorkbenchHostContext;
pub use model::{MiddlePanel, Tab, WorkbenchState};
pub use reducer::{reduce_workbench, ReducerError, RuntimeEffect, WorkbenchAction};
pub use runtime_context::{use_workbench_runtime, WorkbenchProvider, WorkbenchRuntimeContext};
