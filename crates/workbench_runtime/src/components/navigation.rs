use leptos::*;
use prover_host::{DirectoryEntry, FileEntry};

use crate::{
    commands, model::MiddlePanel, reducer::WorkbenchAction, runtime_context::use_workbench_runtime,
};

#[component]
/// Directory listing panel with stack navigation and create/delete controls.
pub fn NavigationPanel() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let state = runtime.state;

    view! {
        <aside class="workbench-nav" aria-label="Directory listing">
            <div class="nav-toolbar">
                <Show when=move || !state.get().at_root() fallback=|| ()>
                    <button
                        type="button"
                        on:click=move |_| {
                            runtime.dispatch_action(WorkbenchAction::LeaveDirectory)
                        }
                    >
                        "Up"
                    </button>
                </Show>
                <button
                    type="button"
                    on:click=move |_| {
                        runtime
                            .dispatch_action(WorkbenchAction::ShowPanel(
                                MiddlePanel::CreateDirectory,
                            ))
                    }
                >
                    "New directory"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        runtime.dispatch_action(WorkbenchAction::ShowPanel(MiddlePanel::CreateFile))
                    }
                >
                    "New file"
                </button>
            </div>

            <ul class="nav-list">
                <For
                    each=move || state.get().listing.directories
                    key=|entry| entry.id
                    let:entry
                >
                    <DirectoryRow entry=entry />
                </For>
                <For each=move || state.get().listing.files key=|entry| entry.id let:entry>
                    <FileRow entry=entry />
                </For>
            </ul>

            <Show when=move || state.get().listing.is_empty() fallback=|| ()>
                <div class="nav-empty">"This directory is empty."</div>
            </Show>
        </aside>
    }
}

#[component]
fn DirectoryRow(entry: DirectoryEntry) -> impl IntoView {
    let runtime = use_workbench_runtime();
    let id = entry.id;
    let name = store_value(entry.name);

    view! {
        <li class="nav-row nav-directory">
            <button
                type="button"
                class="nav-open"
                on:click=move |_| runtime.dispatch_action(WorkbenchAction::EnterDirectory(id))
            >
                {move || name.get_value()}
            </button>
            <button
                type="button"
                class="nav-delete"
                on:click=move |_| {
                    spawn_local(async move {
                        commands::delete_directory(runtime, id, &name.get_value()).await;
                    });
                }
            >
                "Delete"
            </button>
        </li>
    }
}

#[component]
fn FileRow(entry: FileEntry) -> impl IntoView {
    let runtime = use_workbench_runtime();
    let id = entry.id;
    let name = store_value(entry.name);

    view! {
        <li class="nav-row nav-file">
            <button
                type="button"
                class="nav-open"
                on:click=move |_| runtime.dispatch_action(WorkbenchAction::OpenFile(id))
            >
                {move || name.get_value()}
            </button>
            <button
                type="button"
                class="nav-delete"
                on:click=move |_| {
                    spawn_local(async move {
                        commands::delete_file(runtime, id, &name.get_value()).await;
                    });
                }
            >
                "Delete"
            </button>
        </li>
    }
}
