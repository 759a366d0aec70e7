//! Notification module for gyanguru
//!
//! Provides a reusable toast system that displays transient messages.
//! Any component in the application can use this module to show feedback.

mod notification_render;
mod notification_state;

pub use notification_render::render_notifications;
pub use notification_state::{NotificationState, Severity, Toast};
