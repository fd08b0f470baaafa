//! Task Card Component
//!
//! A single task row. Deleting asks first, in place: the row swaps its text
//! for a prompt naming the task until the user confirms or backs out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller;
use crate::models::Item;
use crate::store::use_board_store;

/// Prompt shown while a delete waits for confirmation
pub fn delete_prompt(text: &str) -> String {
    format!("Delete \u{201c}{}\u{201d}?", text)
}

#[component]
pub fn TaskCard(item: Item, emp_id: i64) -> impl IntoView {
    let store = use_board_store();
    let (confirming, set_confirming) = signal(false);

    let Item { id, text } = item;
    let prompt = delete_prompt(&text);

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
        spawn_local(controller::delete_task(store, emp_id, id.clone()));
    };

    view! {
        <div class=move || if confirming.get() { "task-card confirming" } else { "task-card" }>
            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <span class="task-text">{text.clone()}</span>
                    <button
                        class="delete-btn"
                        title="Delete task"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            >
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <span class="delete-confirm">
                    <button class="confirm-btn" on:click=confirm.clone()>"Delete"</button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            </Show>
        </div>
    }
}
