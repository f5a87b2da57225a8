//! Integration tests for the cost calculator page and pricing API.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json, RecordingRelay};
use serde_json::json;

#[tokio::test]
async fn calculator_page_starts_without_estimate() {
    let app = common::build_test_app(RecordingRelay::answering(200)).await;
    let response = get(app, "/calculator").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Розрахувати вартість"));
    assert!(!body.contains("Орієнтовна вартість</h3>"));
}

#[tokio::test]
async fn submitting_calculator_shows_breakdown() {
    let addr = common::spawn_app(RecordingRelay::answering(200)).await;
    let response = common::client()
        .post(format!("http://{addr}/calculator"))
        .form(&[
            ("work_type", "installation"),
            ("outlets", "5"),
            ("light_fixtures", ""),
            ("wire_length", ""),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("1250 грн"));
    assert!(body.contains("1550 грн"));
    assert!(body.contains("value=\"5\""));
}

#[tokio::test]
async fn garbage_quantities_count_as_zero() {
    let addr = common::spawn_app(RecordingRelay::answering(200)).await;
    let body = common::client()
        .post(format!("http://{addr}/calculator"))
        .form(&[
            ("work_type", "repair"),
            ("outlets", "abc"),
            ("light_fixtures", "-2"),
            ("wire_length", "10m"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // 10 m of repair wiring plus the callout fee
    assert!(body.contains("500 грн"));
    assert!(body.contains("800 грн"));
}

#[tokio::test]
async fn pricing_api_computes_breakdown() {
    let app = common::build_test_app(RecordingRelay::answering(200)).await;
    let response = post_json(
        app,
        "/api/pricing/calculate",
        json!({
            "work_type": "replacement",
            "outlet_count": 2,
            "fixture_count": 1,
            "wire_length_meters": 20
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["outlets_cost"], 400);
    assert_eq!(json["fixtures_cost"], 300);
    assert_eq!(json["wiring_cost"], 1400);
    assert_eq!(json["callout_fee"], 300);
    assert_eq!(json["total"], 2400);
    assert_eq!(json["currency"], "UAH");
}

#[tokio::test]
async fn pricing_api_unknown_work_type_falls_back() {
    let app = common::build_test_app(RecordingRelay::answering(200)).await;
    let response = post_json(
        app,
        "/api/pricing/calculate",
        json!({ "work_type": "teleportation", "outlet_count": 1 }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["work_type"], "installation");
    assert_eq!(json["total"], 550);
}

#[tokio::test]
async fn rates_api_lists_every_work_type() {
    let app = common::build_test_app(RecordingRelay::answering(200)).await;
    let json = body_json(get(app, "/api/pricing/rates").await).await;
    assert_eq!(json["callout_fee"], 300);
    assert_eq!(json["work_types"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn pricing_api_tolerates_malformed_quantities() {
    let cases = [
        (json!({ "outlet_count": "abc" }), 0),
        (json!({ "outlet_count": 2.5 }), 2),
        (json!({ "outlet_count": null }), 0),
        (json!({ "outlet_count": "5" }), 5),
        (json!({ "outlet_count": -4 }), 0),
    ];

    for (body, outlets) in cases {
        let app = common::build_test_app(RecordingRelay::answering(200)).await;
        let response = post_json(app, "/api/pricing/calculate", body.clone()).await;
        assert_eq!(response.status(), StatusCode::OK, "{body} should be accepted");

        let json = body_json(response).await;
        assert_eq!(json["outlet_count"], outlets, "{body}");
        assert_eq!(json["total"], outlets * 250 + 300, "{body}");
    }
}

#[tokio::test]
async fn pricing_api_null_work_type_prices_as_installation() {
    let app = common::build_test_app(RecordingRelay::answering(200)).await;
    let response = post_json(
        app,
        "/api/pricing/calculate",
        json!({ "work_type": null, "outlet_count": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["work_type"], "installation");
    assert_eq!(json["total"], 1550);
}
