//! Navigation bar state

use crate::app::BrowserSession;
use crate::dom;

pub const LOGIN_NAV_ITEM: &str = "login-nav-item";
pub const REGISTER_NAV_ITEM: &str = "register-nav-item";
pub const PROFILE_NAV_ITEM: &str = "profile-nav-item";
pub const LOGOUT_NAV_ITEM: &str = "logout-nav-item";

/// Show the items that match the signed-in state and hide the others
pub fn apply_nav_state(authenticated: bool) {
    dom::set_visible(LOGIN_NAV_ITEM, !authenticated);
    dom::set_visible(REGISTER_NAV_ITEM, !authenticated);
    dom::set_visible(PROFILE_NAV_ITEM, authenticated);
    dom::set_visible(LOGOUT_NAV_ITEM, authenticated);
}

/// Sync the navigation and bearer header with storage, and leave protected
/// pages when nobody is signed in. Returns whether a session exists.
pub fn check_auth_status(session: &BrowserSession, path: &str) -> bool {
    let authenticated = session.restore();
    apply_nav_state(authenticated);
    if !authenticated {
        session.guard(path);
    }
    authenticated
}
