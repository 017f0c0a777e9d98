//! Best-effort launch of the default system browser.

use tracing::{info, warn};

/// Opens `url` in the default browser. Failure is logged with a hint to
/// navigate manually; it is never fatal.
pub fn open_browser(url: &str) {
    match open::that(url) {
        Ok(()) => info!("Opened {} in the default browser", url),
        Err(e) => warn!(
            "Could not open the browser automatically: {}. Please navigate to {} manually.",
            e, url
        ),
    }
}
