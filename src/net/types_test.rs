use super::*;

// =============================================================
// Product
// =============================================================

#[test]
fn product_without_image_decodes_as_none() {
    let product: Product = serde_json::from_str(r#"{"id":1,"name":"Pen","price":10}"#).unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Pen");
    assert!((product.price.value() - 10.0).abs() < f64::EPSILON);
    assert_eq!(product.price.text(), "10");
    assert_eq!(product.image, None);
}

#[test]
fn product_accepts_backend_image_url_and_string_price() {
    let product: Product =
        serde_json::from_str(r#"{"id":"4","name":"Mug","price":"249.50","image_url":"/img/mug.png","stock":3}"#)
            .unwrap();
    assert_eq!(product.id, 4);
    assert!((product.price.value() - 249.5).abs() < f64::EPSILON);
    assert_eq!(product.price.text(), "249.50");
    assert_eq!(product.image.as_deref(), Some("/img/mug.png"));
}

#[test]
fn product_rejects_non_numeric_price() {
    let result = serde_json::from_str::<Product>(r#"{"id":1,"name":"Pen","price":"free"}"#);
    assert!(result.is_err());
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_preserves_unknown_fields() {
    let raw = r#"{"user_id":7,"full_name":"Asha Rao","email":"asha@example.com","tier":"gold"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.user_id.as_deref(), Some("7"));
    assert_eq!(profile.extra.get("tier"), Some(&serde_json::json!("gold")));

    let encoded = serde_json::to_value(&profile).unwrap();
    assert_eq!(encoded["tier"], "gold");
    assert_eq!(encoded["full_name"], "Asha Rao");
}

#[test]
fn profile_rejects_non_object_values() {
    assert!(serde_json::from_str::<Profile>("null").is_err());
    assert!(serde_json::from_str::<Profile>("\"asha\"").is_err());
}

#[test]
fn display_name_prefers_full_name() {
    let profile = Profile {
        full_name: Some("Asha Rao".to_owned()),
        email: Some("asha@example.com".to_owned()),
        ..Profile::default()
    };
    assert_eq!(profile.display_name(), "Asha Rao");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let profile = Profile {
        full_name: Some("  ".to_owned()),
        email: Some("asha@example.com".to_owned()),
        ..Profile::default()
    };
    assert_eq!(profile.display_name(), "asha");
}

#[test]
fn display_name_without_identity_fields_is_guest() {
    assert_eq!(Profile::default().display_name(), "Guest");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn products_response_missing_success_flag_decodes_false() {
    let body: ProductsResponse = serde_json::from_str(r#"{"products":[]}"#).unwrap();
    assert!(!body.success);
}

#[test]
fn login_response_decodes_token_and_user() {
    let body: LoginResponse = serde_json::from_str(
        r#"{"success":true,"message":"Login successful","token":"t-1","user":{"user_id":1,"email":"a@b.com"}}"#,
    )
    .unwrap();
    assert!(body.success);
    assert_eq!(body.token.as_deref(), Some("t-1"));
    assert_eq!(body.user.and_then(|u| u.email).as_deref(), Some("a@b.com"));
}

#[test]
fn register_request_serializes_backend_field_names() {
    let request = RegisterRequest {
        full_name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        mobile: "9876543210".to_owned(),
        password: "secret#123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "full_name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "9876543210",
            "password": "secret#123",
        })
    );
}
