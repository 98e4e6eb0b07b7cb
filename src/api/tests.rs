//! API Module Tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` and checks
//! the exact response bodies for both endpoints.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{WELCOME_MESSAGE, router};
    use crate::store::memory::NodeStore;
    use crate::store::types::NodeRecord;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_root_returns_welcome_message() {
        let store = Arc::new(NodeStore::new());
        store.initialize(5).await;

        let (status, body) = get(router(store), "/").await;

        assert_eq!(status, StatusCode::OK);

        let message: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(message, serde_json::json!({ "message": WELCOME_MESSAGE }));
    }

    #[tokio::test]
    async fn test_root_sets_json_content_type() {
        let store = Arc::new(NodeStore::new());
        store.initialize(1).await;

        let response = router(store)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_nodes_returns_full_snapshot() {
        let store = Arc::new(NodeStore::new());
        store.initialize(5).await;

        let (status, body) = get(router(store.clone()), "/nodes").await;

        assert_eq!(status, StatusCode::OK);

        let nodes: Vec<NodeRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes, store.snapshot().await);
    }

    #[tokio::test]
    async fn test_nodes_key_order_is_id_name_value_time() {
        let store = Arc::new(NodeStore::new());
        store.initialize(1).await;

        let (_, body) = get(router(store), "/nodes").await;

        let text = String::from_utf8(body).unwrap();
        let id_pos = text.find("\"id\"").unwrap();
        let name_pos = text.find("\"name\"").unwrap();
        let value_pos = text.find("\"value\"").unwrap();
        let time_pos = text.find("\"time\"").unwrap();

        assert!(id_pos < name_pos);
        assert!(name_pos < value_pos);
        assert!(value_pos < time_pos);
    }

    #[tokio::test]
    async fn test_nodes_reflects_one_update() {
        let store = Arc::new(NodeStore::new());
        store.initialize(5).await;

        let (_, body) = get(router(store.clone()), "/nodes").await;
        let before: Vec<NodeRecord> = serde_json::from_slice(&body).unwrap();

        let updated = store.update_random().await;

        let (_, body) = get(router(store), "/nodes").await;
        let after: Vec<NodeRecord> = serde_json::from_slice(&body).unwrap();

        for i in 0..5 {
            if i == updated {
                assert_eq!(after[i].id, before[i].id);
                assert_eq!(after[i].name, before[i].name);
            } else {
                assert_eq!(after[i], before[i], "node {} should be unchanged", i);
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let store = Arc::new(NodeStore::new());
        store.initialize(1).await;

        let (status, _) = get(router(store), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
