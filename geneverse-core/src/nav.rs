/// CSS selector for the sidebar links that get the `active` class.
pub const NAV_LINK_SELECTOR: &str = ".sidebar .nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Whether a sidebar link with `href` points at `current_path`.
/// The root path also matches links to `index.html`.
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    let Some(href) = href else {
        return false;
    };
    href == current_path || (current_path == "/" && (href == "index.html" || href == "/"))
}
