//! Request signing tests over HTTP.

#[cfg(test)]
mod tests {
    use pdstore_core::ProductRepository;
    use pdstore_model::Product;

    use crate::{TEST_SECRET, TEST_USER, signed_get, spawn_server, unix_now};

    const BARCODE: &str = "1234567890123";
    const PATH: &str = "/products/1234567890123";

    async fn assert_unauthorized(response: reqwest::Response) {
        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Unauthorized"}));
    }

    #[tokio::test]
    async fn test_should_reject_missing_authorization_header() {
        let server = spawn_server().await;
        let response = reqwest::Client::new()
            .get(format!("{}{PATH}", server.base_url))
            .header("Authorization-Time", unix_now().to_string())
            .header("Authorization-User", TEST_USER)
            .send()
            .await
            .unwrap();

        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_should_reject_request_without_any_auth_headers() {
        let server = spawn_server().await;
        let response = reqwest::get(format!("{}{PATH}", server.base_url))
            .await
            .unwrap();

        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_should_reject_stale_signature() {
        let server = spawn_server().await;
        server
            .products
            .add_product(Product::new(BARCODE, "Product 1", 1.0, "USD"))
            .await
            .unwrap();

        let response = signed_get(&server, PATH, TEST_USER, TEST_SECRET, unix_now() - 400)
            .send()
            .await
            .unwrap();

        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_should_reject_future_signature() {
        let server = spawn_server().await;
        let response = signed_get(&server, PATH, TEST_USER, TEST_SECRET, unix_now() + 400)
            .send()
            .await
            .unwrap();

        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_should_reject_unknown_user_like_wrong_secret() {
        let server = spawn_server().await;

        let unknown = signed_get(&server, PATH, "ghost", TEST_SECRET, unix_now())
            .send()
            .await
            .unwrap();
        let wrong_secret = signed_get(&server, PATH, TEST_USER, "not-mock", unix_now())
            .send()
            .await
            .unwrap();

        assert_eq!(unknown.status(), wrong_secret.status());
        assert_eq!(
            unknown.text().await.unwrap(),
            wrong_secret.text().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_should_reject_signature_for_another_path() {
        let server = spawn_server().await;
        let time = unix_now().to_string();
        let auth = pdstore_auth::sign_request(TEST_SECRET, "GET", "/products/1", &time, TEST_USER);

        let response = reqwest::Client::new()
            .get(format!("{}{PATH}", server.base_url))
            .header("Authorization-Time", time)
            .header("Authorization-User", TEST_USER)
            .header("Authorization", auth)
            .send()
            .await
            .unwrap();

        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_should_exclude_query_string_from_signature() {
        let server = spawn_server().await;
        server
            .products
            .add_product(Product::new(BARCODE, "Product 1", 1.0, "USD"))
            .await
            .unwrap();

        let time = unix_now().to_string();
        let auth = pdstore_auth::sign_request(TEST_SECRET, "GET", PATH, &time, TEST_USER);
        let response = reqwest::Client::new()
            .get(format!("{}{PATH}?fields=name", server.base_url))
            .header("Authorization-Time", time)
            .header("Authorization-User", TEST_USER)
            .header("Authorization", auth)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_should_accept_repeated_signature_within_window() {
        let server = spawn_server().await;
        server
            .products
            .add_product(Product::new(BARCODE, "Product 1", 1.0, "USD"))
            .await
            .unwrap();

        let time = unix_now();
        for _ in 0..2 {
            let response = signed_get(&server, PATH, TEST_USER, TEST_SECRET, time)
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_should_tag_every_response_with_request_id() {
        let server = spawn_server().await;
        let response = reqwest::get(format!("{}{PATH}", server.base_url))
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers().get("server").unwrap(), "pdstore");
    }
}
