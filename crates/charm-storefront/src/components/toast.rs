//! On-screen toast stack. Entries render oldest first and disappear
//! when clicked.

use leptos::prelude::*;

use crate::notify::ToastKind;
use crate::state::use_store;

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_store();
    let toaster = store.toasts;

    view! {
        <div class="toast-stack">
            {move || {
                toaster
                    .entries()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toaster.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
