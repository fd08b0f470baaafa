//! New Task Form Component
//!
//! Adds a task to the end of the todo list once the server assigns it an id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::validate_task_text;
use crate::controller;
use crate::store::use_board_store;

#[component]
pub fn NewTaskForm(emp_id: i64) -> impl IntoView {
    let store = use_board_store();

    let (new_text, set_new_text) = signal(String::new());
    let (touched, set_touched) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let validation = move || validate_task_text(&new_text.get());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);
        let text = new_text.get();
        if validate_task_text(&text).is_err() { return; }
        set_submitting.set(true);

        spawn_local(async move {
            if controller::add_task(store, emp_id, text).await {
                set_new_text.set(String::new());
                set_touched.set(false);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_task>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        set_touched.set(true);
                        set_new_text.set(event_target_value(&ev));
                    }
                />
                <button type="submit" disabled=move || submitting.get() || validation().is_err()>"Add"</button>
            </div>
            {move || match validation() {
                Err(msg) if touched.get() => Some(view! { <p class="form-error">{msg}</p> }),
                _ => None,
            }}
        </form>
    }
}
