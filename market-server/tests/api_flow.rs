//! End-to-end API tests against the assembled router.
//!
//! Requests go through the full middleware stack (auth, request ids, CORS),
//! with the payment processor mocked and blobs stored in a temp directory.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use market_server::api::build_app;
use market_server::auth::AdminRegistry;
use market_server::blob::LocalBlobStore;
use market_server::core::{Config, ServerState};
use market_server::payment::processor::testing::MockPaymentProcessor;

struct TestServer {
    app: Router,
    state: ServerState,
    _work_dir: TempDir,
}

fn test_server() -> TestServer {
    let work_dir = TempDir::new().unwrap();
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);

    let state = ServerState::assemble(
        config,
        Arc::new(LocalBlobStore::new(work_dir.path().join("blobs"))),
        Arc::new(MockPaymentProcessor::default()),
        Arc::new(AdminRegistry::new(["root".to_string()])),
    );

    TestServer {
        app: build_app(state.clone()),
        state,
        _work_dir: work_dir,
    }
}

impl TestServer {
    fn admin_token(&self) -> String {
        // "root" is in the admin registry, the asserted role does not matter
        self.state
            .jwt_service
            .generate_token("root", "root", "user")
            .unwrap()
    }

    fn user_token(&self, id: &str) -> String {
        self.state.jwt_service.generate_token(id, id, "user").unwrap()
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}

async fn seed_category(server: &TestServer, token: &str, name: &str, parent: Option<&str>) {
    let (status, _) = server
        .request(
            "POST",
            "/api/categories",
            Some(token),
            Some(json!({ "name": name, "parent": parent })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let server = test_server();
    let (status, body) = server.request("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_catalog_reads_are_public() {
    let server = test_server();
    let (status, body) = server.request("GET", "/api/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = server.request("GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_mutation_requires_auth() {
    let server = test_server();
    let (status, body) = server
        .request(
            "POST",
            "/api/categories",
            None,
            Some(json!({ "name": "tools" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_mutation_requires_admin() {
    let server = test_server();
    let token = server.user_token("alice");
    let (status, body) = server
        .request(
            "POST",
            "/api/categories",
            Some(&token),
            Some(json!({ "name": "tools" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let server = test_server();
    let (status, body) = server
        .request(
            "POST",
            "/api/categories",
            Some("not-a-jwt"),
            Some(json!({ "name": "tools" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1003);
}

#[tokio::test]
async fn test_category_tree_and_guards() {
    let server = test_server();
    let token = server.admin_token();

    seed_category(&server, &token, "3d print", None).await;
    seed_category(&server, &token, "shape type", Some("3d print")).await;

    // Derived subcategory view
    let (status, body) = server
        .request("GET", "/api/categories/3d%20print", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subcategories"], json!(["shape type"]));

    // Third level is refused
    let (status, body) = server
        .request(
            "POST",
            "/api/categories",
            Some(&token),
            Some(json!({ "name": "deep", "parent": "shape type" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3005);

    // Deleting a parent with children is refused
    let (status, body) = server
        .request("DELETE", "/api/categories/3d%20print", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3006);

    // Leaf delete works
    let (status, _) = server
        .request("DELETE", "/api/categories/shape%20type", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_batch_upload_flow() {
    let server = test_server();
    let token = server.admin_token();
    seed_category(&server, &token, "3d print", None).await;

    let (status, _) = server
        .request(
            "POST",
            "/api/batch/start",
            Some(&token),
            Some(json!({ "category": "3d print" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Starting again conflicts
    let (status, body) = server
        .request(
            "POST",
            "/api/batch/start",
            Some(&token),
            Some(json!({ "category": "3d print" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5001);

    let (status, body) = server
        .request(
            "POST",
            "/api/batch/items",
            Some(&token),
            Some(json!({ "name": "Widget", "price": 500, "image": "/blobs/refX" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pending"].as_array().unwrap().len(), 1);

    // Nothing committed until finish
    let (_, products) = server.request("GET", "/api/products", None, None).await;
    assert_eq!(products, json!([]));

    let (status, body) = server
        .request("POST", "/api/batch/finish", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["committed"], 1);

    let (_, products) = server.request("GET", "/api/products", None, None).await;
    let products = products.as_array().unwrap().clone();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["price"], 500);
    assert_eq!(products[0]["category"], "3d print");

    // Session idle with empty pending list
    let (_, status_body) = server.request("GET", "/api/batch", Some(&token), None).await;
    assert_eq!(status_body["active"], false);
    assert_eq!(status_body["pending"], json!([]));
}

#[tokio::test]
async fn test_product_create_and_image_replace() {
    let server = test_server();
    let token = server.admin_token();
    seed_category(&server, &token, "tools", None).await;

    let (status, product) = server
        .request(
            "POST",
            "/api/products",
            Some(&token),
            Some(json!({
                "name": "Hammer",
                "price": 1500,
                "category": "tools",
                "image": "/blobs/refX"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], "Hammer#0");

    // Unknown id fails with not found
    let (status, body) = server
        .request(
            "PUT",
            "/api/products/ghost%230/image",
            Some(&token),
            Some(json!({ "image": "/blobs/refY" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    // Known id returns an identical product except the image
    let (status, updated) = server
        .request(
            "PUT",
            "/api/products/Hammer%230/image",
            Some(&token),
            Some(json!({ "image": "/blobs/refY" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["image"], "/blobs/refY");
    assert_eq!(updated["name"], product["name"]);
    assert_eq!(updated["price"], product["price"]);
    assert_eq!(updated["description"], product["description"]);
}

#[tokio::test]
async fn test_price_floor_enforced() {
    let server = test_server();
    let token = server.admin_token();
    seed_category(&server, &token, "tools", None).await;

    let (status, _) = server
        .request(
            "PUT",
            "/api/price-floors",
            Some(&token),
            Some(json!({ "category": "tools", "min_price": "5.00" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = server
        .request(
            "POST",
            "/api/products",
            Some(&token),
            Some(json!({
                "name": "Cheap",
                "price": 499,
                "category": "tools",
                "image": "/blobs/refX"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn test_basket_is_per_caller() {
    let server = test_server();
    let admin = server.admin_token();
    seed_category(&server, &admin, "tools", None).await;
    server
        .request(
            "POST",
            "/api/products",
            Some(&admin),
            Some(json!({
                "name": "Hammer",
                "price": 1500,
                "category": "tools",
                "image": "/blobs/refX"
            })),
        )
        .await;

    let alice = server.user_token("alice");
    let bob = server.user_token("bob");

    // Quantity is overwritten, not accumulated
    for qty in [2, 5] {
        let (status, _) = server
            .request(
                "POST",
                "/api/basket/items",
                Some(&alice),
                Some(json!({ "product_id": "Hammer#0", "quantity": qty })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, basket) = server.request("GET", "/api/basket", Some(&alice), None).await;
    assert_eq!(basket, json!([{ "product_id": "Hammer#0", "quantity": 5 }]));

    let (_, basket) = server.request("GET", "/api/basket", Some(&bob), None).await;
    assert_eq!(basket, json!([]));

    // Unknown product is rejected
    let (status, body) = server
        .request(
            "POST",
            "/api/basket/items",
            Some(&alice),
            Some(json!({ "product_id": "ghost#9", "quantity": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    // Clearing removes the basket entirely
    let (status, _) = server.request("DELETE", "/api/basket", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, basket) = server.request("GET", "/api/basket", Some(&alice), None).await;
    assert_eq!(basket, json!([]));
}

#[tokio::test]
async fn test_checkout_flow() {
    let server = test_server();
    let admin = server.admin_token();
    seed_category(&server, &admin, "tools", None).await;
    server
        .request(
            "POST",
            "/api/products",
            Some(&admin),
            Some(json!({
                "name": "Hammer",
                "price": 1500,
                "category": "tools",
                "image": "/blobs/refX"
            })),
        )
        .await;

    let alice = server.user_token("alice");

    // Checkout before payment is configured
    let (status, body) = server
        .request(
            "POST",
            "/api/checkout",
            Some(&alice),
            Some(json!({
                "success_url": "https://shop.example/ok",
                "cancel_url": "https://shop.example/back"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7001);

    // Configure payment (admin only)
    let (status, _) = server
        .request(
            "PUT",
            "/api/payment/settings",
            Some(&admin),
            Some(json!({ "secret_key": "sk_test_1", "allowed_countries": ["ES"] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Secret never leaves the server
    let (_, view) = server
        .request("GET", "/api/payment/settings", Some(&alice), None)
        .await;
    assert_eq!(view, json!({ "configured": true, "allowed_countries": ["ES"] }));

    server
        .request(
            "POST",
            "/api/basket/items",
            Some(&alice),
            Some(json!({ "product_id": "Hammer#0", "quantity": 2 })),
        )
        .await;

    let (status, session) = server
        .request(
            "POST",
            "/api/checkout",
            Some(&alice),
            Some(json!({
                "success_url": "https://shop.example/ok",
                "cancel_url": "https://shop.example/back"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let session_id = session["id"].as_str().unwrap().to_string();

    let (status, body) = server
        .request(
            "GET",
            &format!("/api/checkout/{}", session_id),
            Some(&alice),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("completed"));
}

#[tokio::test]
async fn test_admin_registry_flow() {
    let server = test_server();
    let admin = server.admin_token();

    let (status, admins) = server.request("GET", "/api/admins", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(admins, json!(["root"]));

    // Grant alice, then her token opens admin routes
    let (status, _) = server
        .request(
            "POST",
            "/api/admins",
            Some(&admin),
            Some(json!({ "principal": "alice" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let alice = server.user_token("alice");
    let (status, _) = server
        .request(
            "POST",
            "/api/categories",
            Some(&alice),
            Some(json!({ "name": "tools" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Revoke root, then removing the last admin is refused
    let (status, _) = server
        .request("DELETE", "/api/admins/root", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = server
        .request("DELETE", "/api/admins/alice", Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2003);
}

#[tokio::test]
async fn test_upload_and_blob_roundtrip() {
    let server = test_server();
    let admin = server.admin_token();

    // Small generated PNG
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 120, 240]));
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let boundary = "test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"widget.png\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(&png);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(header::AUTHORIZATION, format!("Bearer {}", admin))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = server.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let upload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(upload["format"], "jpg");
    let url = upload["blob"]["url"].as_str().unwrap().to_string();

    // Blob direct link is public
    let (status, _) = server.request("GET", &url, None, None).await;
    assert_eq!(status, StatusCode::OK);
}
