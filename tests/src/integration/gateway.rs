//! HTTP-driven choreography: requests enter through the gateway router and
//! the resulting registry events come out of the broadcast channel.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower::ServiceExt;
use veritas_gateway::{build_router, AppState, GatewayConfig};
use veritas_registry::prelude::*;

const MAKER: &str = "0x00000000000000000000000000000000000000aa";
const SELLER: &str = "0x00000000000000000000000000000000000000bb";

fn setup() -> (Router, broadcast::Receiver<RegistryEvent>) {
    let registry = RegistryService::new(InMemoryStore::new(), ServiceConfig::default());
    let events = registry.subscribe();
    let router = build_router(AppState::new(Arc::new(registry)), &GatewayConfig::default());
    (router, events)
}

async fn post(router: &Router, path: &str, identity: &str, body: serde_json::Value) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-identity", identity)
        .body(Body::from(body.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn http_mutations_publish_registry_events() {
    let (router, mut events) = setup();
    let maker: Identity = MAKER.parse().unwrap();
    let seller: Identity = SELLER.parse().unwrap();

    let status = post(
        &router,
        "/registerManufacturer",
        MAKER,
        json!({"manufacturerId": "ACME", "name": "Acme Corp"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let status = post(
        &router,
        "/registerProduct",
        MAKER,
        json!({
            "manufacturerId": "ACME",
            "productName": "Widget",
            "serialNumber": "SN100",
            "price": "1.0",
            "brand": "Acme"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let status = post(
        &router,
        "/addSeller",
        SELLER,
        json!({"sellerCode": "SELLER001", "name": "Shop", "brand": "Acme"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let status = post(
        &router,
        "/transferProduct",
        MAKER,
        json!({"serialNumber": "SN100", "newOwner": SELLER}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        events.recv().await.unwrap(),
        RegistryEvent::ManufacturerRegistered {
            manufacturer_id: "ACME".to_string(),
            address: maker,
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RegistryEvent::ProductRegistered {
            serial_number: "SN100".to_string(),
            manufacturer: maker,
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RegistryEvent::SellerRegistered {
            identity: seller,
            seller_code: "SELLER001".to_string(),
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RegistryEvent::ProductTransferred {
            serial_number: "SN100".to_string(),
            from: maker,
            to: seller,
        }
    );
}

#[tokio::test]
async fn rejected_http_mutations_publish_nothing() {
    let (router, mut events) = setup();

    let status = post(
        &router,
        "/registerManufacturer",
        MAKER,
        json!({"manufacturerId": "ACME", "name": "Acme Corp"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let status = post(
        &router,
        "/registerManufacturer",
        SELLER,
        json!({"manufacturerId": "ACME", "name": "Fake Acme"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Only the successful registration reached the channel
    assert!(events.recv().await.is_ok());
    assert!(matches!(
        events.try_recv(),
        Err(broadcast::error::TryRecvError::Empty)
    ));
}
