use axum::routing::{get, post, put};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    change_handlers, event_handlers, ops_handlers, preference_handlers, session_handlers,
    ticket_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/events",
            get(event_handlers::list_events).post(event_handlers::create_event),
        )
        .route(
            "/v1/events/:id",
            get(event_handlers::get_event).put(event_handlers::update_event),
        )
        .route("/v1/events/:id/mint", post(event_handlers::mint_ticket))
        .route("/v1/organizer/events", get(event_handlers::list_my_events))
        .route("/v1/tickets", get(ticket_handlers::list_tickets))
        .route("/v1/tickets/verify", post(ticket_handlers::verify_ticket))
        .route("/v1/tickets/:id", get(ticket_handlers::get_ticket))
        .route(
            "/v1/tickets/:id/transfer",
            post(ticket_handlers::transfer_ticket),
        )
        .route("/v1/session", get(session_handlers::get_session))
        .route(
            "/v1/session/mock",
            post(session_handlers::connect_mock).delete(session_handlers::disconnect_mock),
        )
        .route(
            "/v1/session/wallet",
            put(session_handlers::report_wallet).delete(session_handlers::disconnect_wallet),
        )
        .route(
            "/v1/preferences",
            get(preference_handlers::get_preferences).put(preference_handlers::save_preferences),
        )
        .route(
            "/v1/preferences/onboarding",
            post(preference_handlers::complete_onboarding),
        )
        .route("/v1/changes/ws", get(change_handlers::change_stream))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use backend_domain::DocumentStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_support::{test_app, TOKEN};

    const ALICE: &str = "0xA11CE00000000000000000000000000000000001";
    const BOB: &str = "0xB0B0000000000000000000000000000000000002";

    async fn call(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(request.body(body).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn token_is_required_except_for_health() {
        let app = test_app(Some(TOKEN));
        let router = build_router(app.state);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/events")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/v1/ops/health/live")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn seed_events_are_listed_and_missing_ones_are_404() {
        let router = build_router(test_app(Some(TOKEN)).state);
        let (status, events) = call(&router, Method::GET, "/v1/events", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(events.as_array().map(Vec::len), Some(6));

        let (status, event) = call(&router, Method::GET, "/v1/events/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(event["minted"], 124);

        let (status, _) = call(&router, Method::GET, "/v1/events/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mint_needs_an_identity() {
        let router = build_router(test_app(Some(TOKEN)).state);
        let (status, _) = call(&router, Method::POST, "/v1/events/1/mint", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn mint_transfer_and_verify_flow() {
        let app = test_app(Some(TOKEN));
        let router = build_router(app.state);

        let (status, identity) = call(
            &router,
            Method::POST,
            "/v1/session/mock",
            Some(json!({ "address": ALICE })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(identity["isMockConnected"], true);

        let (status, minted) = call(
            &router,
            Method::POST,
            "/v1/events/1/mint?wait_remote=true",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(minted["local"]["status"], "applied");
        assert_eq!(minted["remote"]["status"], "applied");
        assert_eq!(minted["remotePending"], false);
        let ticket_id = minted["record"]["id"].as_str().expect("id").to_string();
        let qr_data = minted["record"]["qrData"].as_str().expect("qr").to_string();
        assert_eq!(app.remote.list("tickets").await.expect("remote").len(), 1);

        let (_, event) = call(&router, Method::GET, "/v1/events/1", None).await;
        assert_eq!(event["minted"], 125);

        let (status, tickets) = call(&router, Method::GET, "/v1/tickets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(tickets.as_array().map(Vec::len), Some(1));

        let (status, moved) = call(
            &router,
            Method::POST,
            &format!("/v1/tickets/{}/transfer", ticket_id),
            Some(json!({ "recipient": BOB })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["record"]["ownerAddress"], BOB);

        let (_, tickets) = call(&router, Method::GET, "/v1/tickets", None).await;
        assert_eq!(tickets.as_array().map(Vec::len), Some(0));
        let (_, tickets) = call(
            &router,
            Method::GET,
            &format!("/v1/tickets?owner={}", BOB.to_lowercase()),
            None,
        )
        .await;
        assert_eq!(tickets.as_array().map(Vec::len), Some(1));

        let (status, verified) = call(
            &router,
            Method::POST,
            "/v1/tickets/verify",
            Some(json!({ "qrData": qr_data })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(verified["record"]["isUsed"], true);

        let (status, _) = call(
            &router,
            Method::POST,
            "/v1/tickets/verify",
            Some(json!({ "qrData": qr_data })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn organizer_sees_created_events() {
        let router = build_router(test_app(None).state);
        let (status, _) = call(&router, Method::GET, "/v1/organizer/events", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        call(
            &router,
            Method::POST,
            "/v1/session/mock",
            Some(json!({ "address": ALICE })),
        )
        .await;
        let (status, created) = call(
            &router,
            Method::POST,
            "/v1/events",
            Some(json!({
                "name": "Night Market",
                "date": "Jul 4, 2026",
                "location": "Pier 9",
                "price": "0.02",
                "supply": 40,
                "organizer": "Harbor Guild",
                "image": "from-amber-500 to-red-500",
                "category": "food"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["record"]["organizerAddress"], ALICE);
        assert_eq!(created["record"]["minted"], 0);

        let (_, mine) = call(&router, Method::GET, "/v1/organizer/events", None).await;
        let mine = mine.as_array().expect("array");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0]["name"], "Night Market");
    }

    #[tokio::test]
    async fn real_wallet_report_shadows_mock() {
        let router = build_router(test_app(None).state);
        call(
            &router,
            Method::POST,
            "/v1/session/mock",
            Some(json!({ "address": ALICE })),
        )
        .await;
        let (status, identity) = call(
            &router,
            Method::PUT,
            "/v1/session/wallet",
            Some(json!({ "address": BOB })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(identity["address"], BOB);
        assert_eq!(identity["isMockConnected"], false);

        let (_, identity) = call(&router, Method::DELETE, "/v1/session/wallet", None).await;
        assert_eq!(identity["address"], ALICE);
        let (_, identity) = call(&router, Method::DELETE, "/v1/session/mock", None).await;
        assert_eq!(identity["isConnected"], false);
    }

    #[tokio::test]
    async fn preferences_round_trip() {
        let router = build_router(test_app(None).state);
        let (status, saved) = call(
            &router,
            Method::PUT,
            "/v1/preferences",
            Some(json!({ "interests": ["Music", "music"], "location": { "city": "Berlin", "country": "Germany" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["interests"], json!(["music"]));

        let (_, done) = call(&router, Method::POST, "/v1/preferences/onboarding", None).await;
        assert_eq!(done["onboardingComplete"], true);
        assert_eq!(done["location"]["city"], "Berlin");
    }

    #[tokio::test]
    async fn readiness_degrades_when_remote_is_down() {
        let app = test_app(None);
        let remote = app.remote.clone();
        let router = build_router(app.state);
        let (status, report) = call(&router, Method::GET, "/v1/ops/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["status"], "ok");

        remote.set_available(false);
        let (status, report) = call(&router, Method::GET, "/v1/ops/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["status"], "degraded");
        assert_eq!(report["remoteStore"], "error");
    }
}
