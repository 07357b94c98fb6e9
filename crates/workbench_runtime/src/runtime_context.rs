//! Runtime provider and context wiring for the workbench shell.
//!
//! This module owns the long-lived reducer container and runtime effect
//! queue. UI composition stays in [`crate::components`].

use leptos::*;
use prover_host::HostServices;

use crate::{
    effect_executor,
    host::WorkbenchHostContext,
    model::WorkbenchState,
    reducer::{reduce_workbench, RuntimeEffect, WorkbenchAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading workbench state and dispatching [`WorkbenchAction`] values.
pub struct WorkbenchRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<WorkbenchHostContext>,
    /// Reactive workbench view state signal.
    pub state: RwSignal<WorkbenchState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WorkbenchAction>,
}

impl WorkbenchRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: WorkbenchAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`WorkbenchRuntimeContext`] to descendant components and issues the initial listing fetch.
pub fn WorkbenchProvider(
    /// Injected browser or no-op host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(WorkbenchHostContext::new(host_services));
    let state = create_rw_signal(WorkbenchState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: WorkbenchAction| {
        let mut workbench = state.get_untracked();
        let previous = workbench.clone();

        match reduce_workbench(&mut workbench, action) {
            Ok(new_effects) => {
                if workbench != previous {
                    state.set(workbench);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("workbench reducer error: {err}"),
        }
    });

    let runtime = WorkbenchRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    runtime.dispatch_action(WorkbenchAction::RefreshListing);

    children().into_view()
}

/// Returns the current [`WorkbenchRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`WorkbenchProvider`].
pub fn use_workbench_runtime() -> WorkbenchRuntimeContext {
    use_context::<WorkbenchRuntimeContext>().expect("WorkbenchRuntimeContext not provided")
}
