//! Blocking user notifications.
//!
//! The browser shows a `window.alert`; native builds have nothing to show.

use rides::Notice;

/// Show `notice` to the user.
pub fn notify(notice: Notice) {
    #[cfg(feature = "csr")]
    {
        if notice.is_error() {
            log::warn!("{}", notice.message());
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice.message());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = notice;
    }
}
