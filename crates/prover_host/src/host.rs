//! Host service bundle injected into the workbench runtime.

use std::rc::Rc;

use crate::{
    dialogs::{DialogService, NoopDialogService},
    picker::{NoopUploadPickerService, UploadPickerService},
    service::{NoopProverApiService, ProverApiService},
};

/// Stable host strategy selected for the current composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (fetch transport, native dialogs).
    Browser,
    /// Placeholder composition with no-op adapters.
    Noop,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Noop => "noop",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle
/// crosses into `workbench_runtime`, which keeps the runtime and view crates
/// decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Prover backend API transport.
    pub api: Rc<dyn ProverApiService>,
    /// Blocking dialog service.
    pub dialogs: Rc<dyn DialogService>,
    /// Upload picker service.
    pub uploads: Rc<dyn UploadPickerService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters for unsupported targets and baseline tests.
    pub fn noop() -> Self {
        Self {
            api: Rc::new(NoopProverApiService),
            dialogs: Rc::new(NoopDialogService),
            uploads: Rc::new(NoopUploadPickerService),
            host_strategy: HostStrategy::Noop,
        }
    }
}
