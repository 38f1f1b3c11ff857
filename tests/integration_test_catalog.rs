mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

async fn setup_admin(app: &TestApp) -> String {
    app.register("admin@test.local", "pw", "Admin", "Admin").await;
    app.login("admin@test.local", "pw").await
}

async fn create_category(app: &TestApp, token: &str, name: &str) -> i64 {
    let res = app
        .request(
            "POST",
            "/api/categories",
            Some(token),
            Some(json!({"name": name, "description": "test category"})),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_category_crud() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;

    let id = create_category(&app, &token, "Books").await;

    // Public reads.
    let res = app.request("GET", "/api/categories", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = app.request("GET", &format!("/api/categories/{}", id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "Books");
    assert_eq!(body["is_active"], true);

    // Full replace: omitting description blanks it.
    let res = app
        .request(
            "PUT",
            &format!("/api/categories/{}", id),
            Some(&token),
            Some(json!({"name": "Used Books", "is_active": false})),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "Used Books");
    assert_eq!(body["is_active"], false);
    assert!(body["description"].is_null());

    let res = app
        .request("DELETE", &format!("/api/categories/{}", id), Some(&token), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", &format!("/api/categories/{}", id), None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_writes_require_admin() {
    let app = TestApp::new().await;
    app.register("cust@test.local", "pw", "Customer", "Customer").await;
    let customer_token = app.login("cust@test.local", "pw").await;

    let payload = json!({"name": "Toys"});

    let res = app.request("POST", "/api/categories", None, Some(payload.clone())).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .request("POST", "/api/categories", Some(&customer_token), Some(payload))
        .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_product_round_trip() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;
    let category_id = create_category(&app, &token, "Gadgets").await;

    let before = Utc::now();

    let res = app
        .multipart_request(
            "POST",
            "/api/products",
            &token,
            &[
                ("name", "Widget"),
                ("price", "9.99"),
                ("stock", "10"),
                ("category_id", &category_id.to_string()),
                ("description", "A fine widget"),
            ],
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let created = parse_body(res).await;
    let id = created["id"].as_i64().unwrap();

    let res = app.request("GET", &format!("/api/products/{}", id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"].as_f64().unwrap(), 9.99);
    assert_eq!(body["stock"], 10);
    assert_eq!(body["category_name"], "Gadgets");

    let created_date: DateTime<Utc> = body["created_date"].as_str().unwrap().parse().unwrap();
    assert!(created_date >= before);
}

#[tokio::test]
async fn test_missing_product_is_not_found() {
    let app = TestApp::new().await;
    let res = app.request("GET", "/api/products/9999", None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;
    let category_id = create_category(&app, &token, "Broken").await;

    let res = app
        .multipart_request(
            "POST",
            "/api/products",
            &token,
            &[
                ("name", "Antiwidget"),
                ("price", "-1.0"),
                ("category_id", &category_id.to_string()),
            ],
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_image_upload_and_precedence() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;
    let category_id = create_category(&app, &token, "Pictures").await;

    // Uploaded file is stored and its reference path recorded.
    let res = app
        .multipart_request(
            "POST",
            "/api/products",
            &token,
            &[
                ("name", "Photo Frame"),
                ("price", "5.0"),
                ("category_id", &category_id.to_string()),
            ],
            Some(("frame.png", b"png-bytes-here")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let stored_path = body["image"].as_str().unwrap();
    assert!(stored_path.ends_with(".png"));

    let file_name = stored_path.rsplit('/').next().unwrap();
    let on_disk = std::fs::read(app.upload_dir.join(file_name)).unwrap();
    assert_eq!(on_disk, b"png-bytes-here");

    // An explicit image path wins over an uploaded file.
    let res = app
        .multipart_request(
            "POST",
            "/api/products",
            &token,
            &[
                ("name", "Poster"),
                ("price", "3.0"),
                ("category_id", &category_id.to_string()),
                ("image", "cdn/poster.jpg"),
            ],
            Some(("ignored.png", b"ignored-bytes")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["image"], "cdn/poster.jpg");
}

#[tokio::test]
async fn test_admin_user_update_image_behavior() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;
    let target = app.register("pic@test.local", "pw", "Pic User", "Customer").await;
    let target_id = target["id"].as_i64().unwrap();

    // Give the user an image via upload.
    let res = app
        .multipart_request(
            "PUT",
            &format!("/api/users/{}", target_id),
            &token,
            &[("email", "pic@test.local"), ("full_name", "Pic User"), ("role", "Customer")],
            Some(("avatar.jpg", b"jpeg-bytes")),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let first_image = body["image"].as_str().unwrap().to_string();
    assert!(first_image.ends_with(".jpg"));

    // Update without any image input: the prior image is preserved.
    let res = app
        .multipart_request(
            "PUT",
            &format!("/api/users/{}", target_id),
            &token,
            &[("email", "pic@test.local"), ("full_name", "Renamed User"), ("role", "Customer")],
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["image"], first_image.as_str());
    assert_eq!(body["full_name"], "Renamed User");

    // Supplying an explicit path overwrites the stored image.
    let res = app
        .multipart_request(
            "PUT",
            &format!("/api/users/{}", target_id),
            &token,
            &[
                ("email", "pic@test.local"),
                ("full_name", "Renamed User"),
                ("role", "Customer"),
                ("image", "cdn/avatar-v2.png"),
            ],
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["image"], "cdn/avatar-v2.png");
}

#[tokio::test]
async fn test_user_update_without_role_falls_back_to_customer() {
    let app = TestApp::new().await;
    let token = setup_admin(&app).await;

    let target = app.register("second@test.local", "pw", "Second Admin", "Admin").await;
    let target_id = target["id"].as_i64().unwrap();
    assert_eq!(target["role"], "Admin");

    // The update is a full replace: an omitted role field means Customer,
    // even when the user was an Admin before.
    let res = app
        .multipart_request(
            "PUT",
            &format!("/api/users/{}", target_id),
            &token,
            &[("email", "second@test.local"), ("full_name", "Second Admin")],
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["role"], "Customer");
}
