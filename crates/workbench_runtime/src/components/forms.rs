use leptos::*;
use prover_host::FileUpload;

use crate::{
    commands, model::MiddlePanel, reducer::WorkbenchAction, runtime_context::use_workbench_runtime,
};

#[component]
/// Create-directory form; fields reset on success and persist on failure.
pub fn CreateDirectoryForm() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let created = commands::create_directory(
                runtime,
                name.get_untracked(),
                description.get_untracked(),
            )
            .await;
            if created {
                name.set(String::new());
                description.set(String::new());
            }
        });
    };

    view! {
        <form class="create-form create-directory" on:submit=submit>
            <h2>"New directory"</h2>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <FormActions />
        </form>
    }
}

#[component]
/// Create-file form: text fields plus a picked source file for upload.
pub fn CreateFileForm() -> impl IntoView {
    let runtime = use_workbench_runtime();
    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let upload = create_rw_signal::<Option<FileUpload>>(None);

    let pick = move |_| {
        spawn_local(async move {
            if let Some(picked) = commands::choose_upload(runtime).await {
                upload.set(Some(picked));
            }
        });
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let created = commands::create_file(
                runtime,
                name.get_untracked(),
                description.get_untracked(),
                upload.get_untracked(),
            )
            .await;
            if created {
                name.set(String::new());
                description.set(String::new());
                upload.set(None);
            }
        });
    };

    view! {
        <form class="create-form create-file" on:submit=submit>
            <h2>"New file"</h2>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="upload-row">
                <button type="button" on:click=pick>
                    "Choose source file"
                </button>
                <span class="upload-name">
                    {move || {
                        upload
                            .get()
                            .map(|picked| picked.file_name)
                            .unwrap_or_else(|| "No file selected.".to_string())
                    }}
                </span>
            </div>
            <FormActions />
        </form>
    }
}

#[component]
fn FormActions() -> impl IntoView {
    let runtime = use_workbench_runtime();

    view! {
        <div class="form-actions">
            <button type="submit">"Create"</button>
            <button
                type="button"
                on:click=move |_| {
                    runtime.dispatch_action(WorkbenchAction::ShowPanel(MiddlePanel::Content))
                }
            >
                "Back"
            </button>
        </div>
    }
}
