//! Reusable confirmation modal for destructive actions.

use leptos::prelude::*;

/// Backdrop + dialog with cancel/confirm actions. The caller owns the
/// visibility flag and runs the deletion.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
