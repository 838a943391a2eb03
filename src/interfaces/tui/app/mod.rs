//! TUI application state and the operations that mutate it

mod shorten_operations;
mod state;

pub use state::{App, CurrentScreen, FocusField, Notification, NotificationKind};
