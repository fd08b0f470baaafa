//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod new_task_form;
mod signin_form;
mod task_card;
mod task_column;
mod tasks_page;

pub use alert_banner::AlertBanner;
pub use new_task_form::NewTaskForm;
pub use signin_form::SignInForm;
pub use task_card::TaskCard;
pub use task_column::TaskColumn;
pub use tasks_page::TasksPage;
