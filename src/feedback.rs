//! User Feedback
//!
//! Channel for user-visible messages.

pub trait Feedback {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertFeedback;

impl Feedback for AlertFeedback {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                let _ = win.alert_with_message(message);
            }
            None => log::warn!("no window for alert: {}", message),
        }
    }
}
