//! Page navigation through `window.location`

use gloo::utils::window;
use keyward_http::Navigator;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Err(err) = window().location().set_href(path) {
            error!(?err, path, "Redirect failed");
        }
    }
}

/// Path of the current page, e.g. `/users/profile`
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}
