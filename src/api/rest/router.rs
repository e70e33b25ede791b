//! API router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Local development origins allowed to call the API with credentials.
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:8080",
    "http://localhost:8081",
];

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and health
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Valve registry
        .route("/blockchain/valves", get(handlers::list_valves))
        .route("/blockchain/valve", post(handlers::create_valve))
        .route("/blockchain/valve/:valve_id", get(handlers::get_valve))
        .route(
            "/blockchain/valve/:valve_id/status",
            put(handlers::update_valve_status),
        )
        // Contract surface
        .route("/blockchain/contract/info", get(handlers::contract_info))
        .route("/blockchain/contract/call", post(handlers::call_contract))
        // Transaction log
        .route("/blockchain/transactions", get(handlers::list_transactions))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// CORS for the fixed set of local development origins. Credentials are
/// allowed, so methods and headers mirror the request instead of using a
/// wildcard.
fn cors_layer() -> CorsLayer {
    let origins = DEV_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain;
    use crate::config::ChainConfig;
    use crate::storage::InMemoryStorage;
    use crate::types::ValveRecord;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, Response, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with_chain(chain: ChainConfig) -> Router {
        let state = AppState::new(Arc::new(InMemoryStorage::seeded()), chain);
        create_router(state)
    }

    fn app() -> Router {
        app_with_chain(ChainConfig::default())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, payload: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_running() {
        let response = app().oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "ValveChain Blockchain API");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn health_reports_configuration_flags() {
        let response = app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["rpc_configured"], true);
        assert_eq!(body["contract_configured"], false);
    }

    #[tokio::test]
    async fn list_valves_returns_seeds_in_order() {
        let response = app().oneshot(get_request("/blockchain/valves")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["valves"][0]["valve_id"], "V001");
        assert_eq!(body["valves"][1]["valve_id"], "V002");
    }

    #[tokio::test]
    async fn get_valve_by_id() {
        let response = app()
            .oneshot(get_request("/blockchain/valve/V002"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["valve_id"], "V002");
        assert_eq!(body["status"], "MAINTENANCE");
        assert_eq!(body["on_chain"], true);
    }

    #[tokio::test]
    async fn get_missing_valve_is_404_and_leaves_collection() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get_request("/blockchain/valve/V999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get_request("/blockchain/valves")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn create_valve_appends_record_and_fabricates_receipt() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/blockchain/valve",
                serde_json::json!({
                    "valve_id": "V003",
                    "status": "ACTIVE",
                    "location": "Plant C"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["valve"]["valve_id"], "V003");
        assert_eq!(body["valve"]["on_chain"], true);

        let address = body["valve"]["contract_address"].as_str().unwrap();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));

        // The hash is the digest of the created record's JSON form
        let valve: ValveRecord = serde_json::from_value(body["valve"].clone()).unwrap();
        let expected = chain::transaction_hash(&serde_json::to_string(&valve).unwrap());
        assert_eq!(body["transaction_hash"], expected);

        let response = app.oneshot(get_request("/blockchain/valves")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 3);
        assert_eq!(body["valves"][2]["valve_id"], "V003");
    }

    #[tokio::test]
    async fn update_status_via_query_persists() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/blockchain/valve/V001/status?status=INACTIVE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["valve_id"], "V001");
        assert_eq!(body["new_status"], "INACTIVE");
        assert_eq!(body["transaction_hash"], chain::transaction_hash("V001INACTIVE"));

        let response = app
            .oneshot(get_request("/blockchain/valve/V001"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["status"], "INACTIVE");
        assert_eq!(body["location"], "Plant A - Section 1");
    }

    #[tokio::test]
    async fn update_status_via_json_body() {
        let app = app();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/blockchain/valve/V002/status",
                serde_json::json!({"status": "ACTIVE"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["new_status"], "ACTIVE");
    }

    #[tokio::test]
    async fn update_status_without_status_is_400() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/blockchain/valve/V001/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(get_request("/blockchain/valve/V001"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["status"], "ACTIVE");
    }

    #[tokio::test]
    async fn update_missing_valve_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/blockchain/valve/V999/status?status=INACTIVE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn contract_info_disconnected_without_contract_address() {
        let response = app()
            .oneshot(get_request("/blockchain/contract/info"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["network"], "localhost");
        assert_eq!(body["connected"], false);
        assert_eq!(body["rpc_url"], "http://localhost:8545");
    }

    #[tokio::test]
    async fn contract_info_connected_on_mainnet() {
        let chain = ChainConfig {
            rpc_url: "https://rpc.example.com".to_string(),
            contract_address: "0xdeadbeef".to_string(),
            private_key: String::new(),
        };

        let response = app_with_chain(chain)
            .oneshot(get_request("/blockchain/contract/info"))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["network"], "mainnet");
        assert_eq!(body["connected"], true);
        assert_eq!(body["contract_address"], "0xdeadbeef");
    }

    #[tokio::test]
    async fn contract_call_echoes_method_with_canned_result() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/blockchain/contract/call",
                serde_json::json!({
                    "method": "getValveCount",
                    "params": {"plant": "A"}
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["method"], "getValveCount");
        assert_eq!(body["params"]["plant"], "A");
        assert_eq!(body["result"], "Mock result for getValveCount");
        assert_eq!(body["gas_used"], 21000);
        assert_eq!(body["transaction_hash"].as_str().unwrap().len(), 66);
    }

    #[tokio::test]
    async fn contract_call_params_default_to_empty() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/blockchain/contract/call",
                serde_json::json!({"method": "pause"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["params"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn transaction_log_records_mutations() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/blockchain/valve",
                serde_json::json!({
                    "valve_id": "V003",
                    "status": "ACTIVE",
                    "location": "Plant C"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/blockchain/valve/V003/status?status=MAINTENANCE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request("/blockchain/transactions"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["transactions"][0]["kind"], "valve_registered");
        assert_eq!(body["transactions"][0]["valve_id"], "V003");
        assert_eq!(body["transactions"][1]["kind"], "status_updated");
        assert_eq!(body["transactions"][1]["gas_used"], 21000);
    }

    #[tokio::test]
    async fn cors_preflight_allows_dev_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/blockchain/valves")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn cors_rejects_unknown_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/blockchain/valves")
                    .header(header::ORIGIN, "http://evil.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
