use leptos::*;

use crate::{model::MiddlePanel, runtime_context::use_workbench_runtime};

use super::{
    content::ContentPanel,
    forms::{CreateDirectoryForm, CreateFileForm},
    navigation::NavigationPanel,
};

#[component]
/// Top-level workbench layout: navigation on the left, one middle panel.
pub fn WorkbenchShell() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;

    view! {
        <div class="workbench-shell">
            <NavigationPanel />
            <section class="workbench-main">
                {move || match state.get().middle_panel {
                    MiddlePanel::Content => view! { <ContentPanel /> }.into_view(),
                    MiddlePanel::CreateDirectory => view! { <CreateDirectoryForm /> }.into_view(),
                    MiddlePanel::CreateFile => view! { <CreateFileForm /> }.into_view(),
                }}
            </section>
        </div>
    }
}
