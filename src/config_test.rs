use super::*;

#[test]
fn default_points_at_local_api() {
    let config = StorefrontConfig::default();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.login_redirect_delay, Duration::from_millis(1000));
    assert_eq!(config.register_redirect_delay, Duration::from_millis(2000));
    assert_eq!(config.logout_redirect_delay, Duration::from_millis(1000));
}

#[test]
fn with_api_base_strips_trailing_slash() {
    let config = StorefrontConfig::with_api_base(Some("https://shop.example.com/"));
    assert_eq!(config.api_base, "https://shop.example.com");
}

#[test]
fn with_api_base_ignores_blank_override() {
    assert_eq!(StorefrontConfig::with_api_base(Some("  ")).api_base, DEFAULT_API_BASE);
    assert_eq!(StorefrontConfig::with_api_base(None).api_base, DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let config = StorefrontConfig::default();
    assert_eq!(config.endpoint("/api/products"), "http://127.0.0.1:5000/api/products");
    assert_eq!(config.endpoint("api/auth/login"), "http://127.0.0.1:5000/api/auth/login");
}

#[test]
fn detail_href_carries_product_id() {
    assert_eq!(StorefrontConfig::default().detail_href(42), "product_details.html?id=42");
}
