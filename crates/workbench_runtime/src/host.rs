//! Host-side execution of reducer-emitted runtime effects.
//!
//! The reducer stays pure; everything that actually talks to the backend
//! lives here, behind the injected [`HostServices`] bundle.

use leptos::{logging, spawn_local, Callable, Callback};
use prover_host::HostServices;

use crate::reducer::{RuntimeEffect, WorkbenchAction};

#[derive(Clone)]
/// Host service bundle for workbench runtime side effects.
pub struct WorkbenchHostContext {
    services: HostServices,
}

impl WorkbenchHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the injected host service bundle.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// Fetch completions are reported back through `dispatch` carrying the
    /// scope or file they were issued for, so the reducer can drop responses
    /// that arrive after the user has already navigated away. Read failures
    /// are logged and otherwise swallowed; the previous state stays visible.
    pub fn run_runtime_effect(&self, dispatch: Callback<WorkbenchAction>, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FetchListing { scope } => {
                let api = self.services.api.clone();
                spawn_local(async move {
                    match api.list_directory(scope).await {
                        Ok(listing) => {
                            dispatch.call(WorkbenchAction::ListingLoaded { scope, listing });
                        }
                        Err(err) => logging::warn!("listing fetch failed: {err}"),
                    }
                });
            }
            RuntimeEffect::FetchDocument { file } => {
                let api = self.services.api.clone();
                spawn_local(async move {
                    match api.file_content(file).await {
                        Ok(document) => {
                            dispatch.call(WorkbenchAction::DocumentLoaded { file, document });
                        }
                        Err(err) => logging::warn!("document fetch failed: {err}"),
                    }
                });
            }
        }
    }
}
