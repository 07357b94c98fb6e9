use leptos::*;
use prover_host::FileDocument;

use crate::{
    commands, model::Tab, reducer::WorkbenchAction, runtime_context::use_workbench_runtime,
};

/// Provers available on the backend, shown in the Provers tab.
const PROVERS: [&str; 3] = ["Alt-Ergo", "Z3", "CVC4"];

#[component]
/// File content panel: source text plus the tabbed verification views.
pub fn ContentPanel() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;

    view! {
        <div class="workbench-content">
            <Show
                when=move || state.get().open_file.is_some()
                fallback=|| {
                    view! {
                        <div class="content-empty">
                            "Open a file to review its verification output."
                        </div>
                    }
                }
            >
                <OpenDocument />
            </Show>
        </div>
    }
}

#[component]
fn OpenDocument() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;
    let document = Signal::derive(move || state.get().document);

    view! {
        <div class="document">
            <div class="document-toolbar">
                <span class="document-name">
                    {move || document.get().map(|doc| doc.name).unwrap_or_default()}
                </span>
                <button
                    type="button"
                    on:click=move |_| {
                        if let Some(file) = state.get_untracked().open_file {
                            spawn_local(async move {
                                commands::prove_file(runtime, file).await;
                            });
                        }
                    }
                >
                    "Prove"
                </button>
                <button
                    type="button"
                    on:click=move |_| runtime.dispatch_action(WorkbenchAction::CloseFile)
                >
                    "Close"
                </button>
            </div>

            {move || match document.get() {
                None => view! { <div class="document-loading">"Loading..."</div> }.into_view(),
                Some(doc) => view! { <DocumentView document=doc /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DocumentView(document: FileDocument) -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;
    let document = store_value(document);

    view! {
        <div class="document-view">
            // Editable surface for the source text; edits stay local, the
            // backend has no save endpoint.
            <textarea
                class="document-body"
                prop:value=move || document.get_value().body
            ></textarea>

            <div class="tab-strip" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || {
                                    if state.get().active_tab == tab {
                                        "tab tab-active"
                                    } else {
                                        "tab"
                                    }
                                }
                                on:click=move |_| {
                                    runtime.dispatch_action(WorkbenchAction::ChangeTab(tab))
                                }
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match state.get().active_tab {
                Tab::Provers => view! { <ProversPane /> }.into_view(),
                Tab::Vcs => view! { <SectionList document=document /> }.into_view(),
                Tab::Result => {
                    view! { <pre class="document-result">{document.get_value().result}</pre> }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProversPane() -> impl IntoView {
    view! {
        <ul class="prover-list">
            {PROVERS
                .into_iter()
                .map(|prover| view! { <li class="prover-row">{prover}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn SectionList(document: StoredValue<FileDocument>) -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;

    view! {
        <ul class="section-list">
            <For
                each=move || 0..document.get_value().sections.len()
                key=|index| *index
                let:index
            >
                {
                    let section = document.get_value().sections[index].clone();
                    let tone_class = section.status.tone().css_class();
                    let header = section.header_line().to_string();
                    let detail = section.detail().to_string();
                    view! {
                        <li class=format!("section-row {tone_class}")>
                            <button
                                type="button"
                                class="section-header"
                                on:click=move |_| {
                                    runtime
                                        .dispatch_action(WorkbenchAction::ToggleSection {
                                            index,
                                        })
                                }
                            >
                                <span class="section-category">{section.category.clone()}</span>
                                <span class="section-title">{header}</span>
                                <span class="section-status">{section.status.label()}</span>
                            </button>
                            <Show
                                when=move || state.get().is_section_expanded(index)
                                fallback=|| ()
                            >
                                <pre class="section-detail">{detail.clone()}</pre>
                            </Show>
                        </li>
                    }
                }
            </For>
        </ul>
    }
}
