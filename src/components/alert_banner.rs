//! Alert Banner Component

use leptos::prelude::*;

use crate::store::{use_board_store, AlertKind, BoardStateStoreFields};

/// Shows the current success or error alert, if any
#[component]
pub fn AlertBanner() -> impl IntoView {
    let store = use_board_store();

    move || {
        store.alert().get().map(|alert| {
            let class = match alert.kind {
                AlertKind::Success => "alert alert-success",
                AlertKind::Error => "alert alert-error",
            };
            view! { <div class=class role="alert">{alert.message}</div> }
        })
    }
}
