//! Product lookup tests.

#[cfg(test)]
mod tests {
    use pdstore_core::ProductRepository;
    use pdstore_model::Product;

    use crate::{get_product, spawn_server};

    #[tokio::test]
    async fn test_should_return_stored_product() {
        let server = spawn_server().await;
        let product = Product::new("4006381333931", "Product 1", 742.17, "USD");
        server.products.add_product(product.clone()).await.unwrap();

        let response = get_product(&server, &product.id).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "id": "4006381333931",
                "name": "Product 1",
                "price": 742.17,
                "currency": "USD",
            })
        );
    }

    #[tokio::test]
    async fn test_should_round_trip_product_fields() {
        let server = spawn_server().await;
        let product = Product::new("5012345678900", "Oat milk, 1l", 1.89, "EUR");
        server.products.add_product(product.clone()).await.unwrap();

        let response = get_product(&server, "5012345678900").await;
        let fetched: Product = response.json().await.unwrap();
        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn test_should_return_not_found_envelope_for_missing_product() {
        let server = spawn_server().await;

        let response = get_product(&server, "1234567890123").await;
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Could not find product with barcode \"1234567890123\"",
                "errors": {
                    "location": "/products/1234567890123",
                    "message": "Could not find product with barcode \"1234567890123\"",
                },
                "code": 404,
            })
        );
    }

    #[tokio::test]
    async fn test_should_not_leak_products_between_servers() {
        let first = spawn_server().await;
        first
            .products
            .add_product(Product::new("1", "Only here", 1.0, "USD"))
            .await
            .unwrap();

        let second = spawn_server().await;
        let response = get_product(&second, "1").await;
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_should_stop_serving_cleared_products() {
        let server = spawn_server().await;
        server
            .products
            .add_product(Product::new("2", "Gone soon", 2.0, "USD"))
            .await
            .unwrap();
        assert_eq!(
            get_product(&server, "2").await.status(),
            reqwest::StatusCode::OK
        );

        server.products.clear();
        assert_eq!(
            get_product(&server, "2").await.status(),
            reqwest::StatusCode::NOT_FOUND
        );
    }
}
