//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::{self, Session};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in employee (None = show sign-in) - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in employee - write
    set_session: WriteSignal<Option<Session>>,
}

impl AppContext {
    pub fn new(session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>)) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
        }
    }

    /// Store the session cookies and show the task board
    pub fn sign_in(&self, session: Session) {
        session::write_session(&session);
        self.set_session.set(Some(session));
    }

    /// Drop the session cookies and return to sign-in
    pub fn sign_out(&self) {
        session::clear_session();
        self.set_session.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
