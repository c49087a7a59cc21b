//! Deployment base path for the router.
//!
//! Builds made with `PUBLIC_URL=/cipher-quest` (for example a project page on
//! a static host) serve every route below that prefix.

/// Router basename, or `None` when the game is served from the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}
