//! Browser dialog adapter over the native blocking dialogs.

use prover_host::DialogService;

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service backed by `window.confirm` / `window.alert`.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            false
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
        }
    }

    fn notify(&self, message: &str) {
        // Completion notices use the same blocking alert as failures.
        self.alert(message);
    }
}
