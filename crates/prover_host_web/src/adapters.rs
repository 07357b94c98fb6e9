//! Concrete adapter factories for runtime wiring.

use std::rc::Rc;

use prover_host::{HostServices, HostStrategy};

use crate::{WebDialogService, WebProverApiService, WebUploadPickerService};

/// Returns the browser prover API adapter.
pub fn prover_api_service() -> WebProverApiService {
    WebProverApiService
}

/// Returns the browser dialog adapter.
pub fn dialog_service() -> WebDialogService {
    WebDialogService
}

/// Returns the browser upload picker adapter.
pub fn upload_picker_service() -> WebUploadPickerService {
    WebUploadPickerService
}

/// Returns the active host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    HostStrategy::Browser.as_str()
}

/// Assembles the browser host service bundle injected into the runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        api: Rc::new(prover_api_service()),
        dialogs: Rc::new(dialog_service()),
        uploads: Rc::new(upload_picker_service()),
        host_strategy: HostStrategy::Browser,
    }
}
