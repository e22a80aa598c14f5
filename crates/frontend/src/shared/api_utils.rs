//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and resolving the
//! tenant the page belongs to.

/// Tenant used when the page is not mounted under `/org/{slug}/...`
pub const DEFAULT_ORG_SLUG: &str = "default";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Path prefix of all order endpoints of a tenant, e.g. `/api/org/acme/orders`
pub fn orders_api_path(org_slug: &str) -> String {
    format!("/api/org/{}/orders", urlencoding::encode(org_slug))
}

/// Extracts the tenant slug from a path like `/org/acme/orders`
pub fn org_slug_from_path(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "org" {
            return segments.next().map(|slug| {
                urlencoding::decode(slug)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| slug.to_string())
            });
        }
    }
    None
}

/// Tenant slug of the current page, falling back to [`DEFAULT_ORG_SLUG`]
pub fn current_org_slug() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .and_then(|path| org_slug_from_path(&path))
        .unwrap_or_else(|| DEFAULT_ORG_SLUG.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_slug_from_path() {
        assert_eq!(org_slug_from_path("/org/acme/orders"), Some("acme".to_string()));
        assert_eq!(org_slug_from_path("/org/acme"), Some("acme".to_string()));
        assert_eq!(
            org_slug_from_path("/org/big%20co/orders/ord_1"),
            Some("big co".to_string())
        );
        assert_eq!(org_slug_from_path("/org/"), None);
        assert_eq!(org_slug_from_path("/orders"), None);
    }

    #[test]
    fn test_orders_api_path() {
        assert_eq!(orders_api_path("acme"), "/api/org/acme/orders");
        assert_eq!(orders_api_path("big co"), "/api/org/big%20co/orders");
    }
}
