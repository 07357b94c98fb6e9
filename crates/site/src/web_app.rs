use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use prover_host::HostServices;
use workbench_runtime::{WorkbenchProvider, WorkbenchShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Prover Workbench" />
        <Meta
            name="description"
            content="Browser workbench for managing and proving verification projects."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=WorkbenchEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn WorkbenchEntry() -> impl IntoView {
    view! {
        <WorkbenchProvider host_services=host_services()>
            <WorkbenchShell />
        </WorkbenchProvider>
    }
}

#[cfg(target_arch = "wasm32")]
fn host_services() -> HostServices {
    prover_host_web::build_host_services()
}

#[cfg(not(target_arch = "wasm32"))]
fn host_services() -> HostServices {
    HostServices::noop()
}
