//! Tasks Page Component
//!
//! The signed-in employee's board: alert banner, add form and both lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Column;
use crate::components::{AlertBanner, NewTaskForm, TaskColumn};
use crate::controller;
use crate::store::{store_reset, use_board_store, BoardStateStoreFields, Phase};

#[component]
pub fn TasksPage(emp_id: i64) -> impl IntoView {
    let store = use_board_store();
    store_reset(&store);

    // Load lists on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&format!("[TASKS] Loading tasks for employee {}", emp_id).into());
        spawn_local(controller::load_tasks(store, emp_id));
    });

    view! {
        <section class="tasks-page">
            <AlertBanner />
            <NewTaskForm emp_id=emp_id />
            <Show
                when=move || store.phase().get() == Phase::Ready
                fallback=|| view! { <p class="loading">"Loading tasks..."</p> }
            >
                <div class="task-columns">
                    <TaskColumn column=Column::Todo emp_id=emp_id />
                    <TaskColumn column=Column::Done emp_id=emp_id />
                </div>
            </Show>
        </section>
    }
}
