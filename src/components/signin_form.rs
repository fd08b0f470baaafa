//! Sign-In Form Component
//!
//! Looks the employee up by ID and starts a session on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::session::{parse_emp_id_input, Session};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_app_context();

    let (emp_id_input, set_emp_id_input) = signal(String::new());
    let (error_message, set_error_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let emp_id = match parse_emp_id_input(&emp_id_input.get()) {
            Ok(id) => id,
            Err(msg) => {
                set_error_message.set(msg);
                return;
            }
        };
        set_loading.set(true);
        set_error_message.set(String::new());

        spawn_local(async move {
            match commands::find_employee_by_id(emp_id).await {
                Ok(employee) => {
                    web_sys::console::log_1(&format!("[SIGNIN] Employee {} found", emp_id).into());
                    set_loading.set(false);
                    ctx.sign_in(Session {
                        emp_id: employee.emp_id,
                        name: employee.display_name(),
                    });
                }
                Err(e) => {
                    set_loading.set(false);
                    set_error_message.set(e.to_string());
                }
            }
        });
    };

    view! {
        <form class="signin-form" on:submit=sign_in>
            <h2>"Sign in"</h2>
            <input
                type="text"
                inputmode="numeric"
                placeholder="Employee ID"
                prop:value=move || emp_id_input.get()
                on:input=move |ev| set_emp_id_input.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <Show when=move || !error_message.get().is_empty()>
                <p class="form-error">{move || error_message.get()}</p>
            </Show>
        </form>
    }
}
