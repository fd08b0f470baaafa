//! Nodebucket Frontend App
//!
//! Shows the sign-in form until a session exists, then the task board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::Column;
use crate::components::{SignInForm, TasksPage};
use crate::context::AppContext;
use crate::controller;
use crate::session;
use crate::store::BoardState;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

#[component]
pub fn App() -> impl IntoView {
    // Auth guard: only a numeric session_user cookie counts as signed in
    let (current_session, set_session) = signal(session::read_session());

    // Provide context to all children
    let ctx = AppContext::new((current_session, set_session));
    provide_context(ctx);
    let store = Store::new(BoardState::default());
    provide_context(store);

    // Global DnD listeners are bound once for the app's lifetime
    let dnd = create_dnd_signals::<Column>();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |mv| {
        web_sys::console::log_1(&format!("[DND] Drop: {:?}", mv).into());
        if let Some(s) = ctx.session.get_untracked() {
            spawn_local(controller::drop_task(store, s.emp_id, mv));
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Nodebucket"</h1>
                {move || ctx.session.get().map(|s| view! {
                    <span class="session-name">{s.name}</span>
                    <button class="sign-out-btn" on:click=move |_| ctx.sign_out()>"Sign out"</button>
                })}
            </header>

            <main class="main-content">
                {move || match ctx.session.get() {
                    Some(s) => view! { <TasksPage emp_id=s.emp_id /> }.into_any(),
                    None => view! { <SignInForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
