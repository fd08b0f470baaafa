//! Alerts
//!
//! Every alert schedules its own clear. A clear always empties the banner, so
//! an older timer can hide a newer message early.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::store::{store_clear_alert, store_set_alert, Alert, AlertKind, BoardStore};

/// How long an alert stays visible
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

pub fn show_alert(store: BoardStore, alert: Alert) {
    match alert.kind {
        AlertKind::Success => web_sys::console::log_1(&format!("[ALERT] {}", alert.message).into()),
        AlertKind::Error => web_sys::console::error_1(&format!("[ALERT] {}", alert.message).into()),
    }
    store_set_alert(&store, alert);
    spawn_local(async move {
        TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
        store_clear_alert(&store);
    });
}

pub fn show_error(store: BoardStore, message: impl Into<String>) {
    show_alert(store, Alert::error(message));
}
