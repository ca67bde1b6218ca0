// Contract tests for the document calculation endpoints
//
// POST /api/quotations/calculate
// POST /api/invoices/calculate
//
// Runs the real route table in-process against the actix test service.

use actix_web::{test, web, App};
use gstdesk::documents::DocumentService;
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn amount(value: &Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {}", value))
        .parse()
        .unwrap()
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DocumentService::new("29")))
                .configure(gstdesk::configure_routes),
        )
        .await
    };
}

fn two_line_payload(transaction: Value) -> Value {
    json!({
        "transaction": transaction,
        "discount": "100",
        "line_items": [
            {
                "description": "Modular wardrobe",
                "hsn_sac": "9403",
                "quantity": "2",
                "unit_price": "1000",
                "tax_rate": "18"
            },
            {
                "description": "Installation",
                "hsn_sac": "995466",
                "quantity": "1",
                "unit_price": "500",
                "tax_rate": "18"
            }
        ]
    })
}

#[actix_web::test]
async fn test_b2c_quotation_response_shape() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/quotations/calculate")
        .set_json(two_line_payload(json!({ "kind": "b2c" })))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "quotation");
    assert_eq!(body["supply_type"], "intra_state");
    assert_eq!(body["seller_state_code"], "29");
    assert_eq!(body["place_of_supply"]["state_name"], "Karnataka");

    let first = &body["line_items"][0];
    assert_eq!(amount(&first["taxable_value"]), Decimal::from(2000));
    assert_eq!(amount(&first["cgst_amount"]), Decimal::from(180));
    assert_eq!(amount(&first["sgst_amount"]), Decimal::from(180));
    assert_eq!(amount(&first["igst_amount"]), Decimal::ZERO);
    assert_eq!(amount(&first["total"]), Decimal::from(2360));

    let totals = &body["totals"];
    assert_eq!(amount(&totals["subtotal"]), Decimal::from(2500));
    assert_eq!(amount(&totals["total_tax"]), Decimal::from(450));
    assert_eq!(amount(&totals["grand_total"]), Decimal::from(2850));
    assert_eq!(body["grand_total_display"], "₹2,850.00");

    let breakdown = body["gst_breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(amount(&breakdown[0]["tax_rate"]), Decimal::from(18));
}

#[actix_web::test]
async fn test_inter_state_invoice() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/invoices/calculate")
        .set_json(two_line_payload(json!({
            "kind": "b2b",
            "buyer_gstin": "27ABCDE1234F1Z5",
            "buyer_state_code": "27"
        })))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "invoice");
    assert_eq!(body["supply_type"], "inter_state");
    assert_eq!(body["place_of_supply"]["state_code"], "27");
    assert_eq!(amount(&body["totals"]["total_igst"]), Decimal::from(450));
    assert_eq!(amount(&body["totals"]["total_cgst"]), Decimal::ZERO);
}

#[actix_web::test]
async fn test_negative_quantity_is_invalid_amount() {
    let app = init_app!();

    let mut payload = two_line_payload(json!({ "kind": "b2c" }));
    payload["line_items"][0]["quantity"] = json!("-2");

    let req = test::TestRequest::post()
        .uri("/api/quotations/calculate")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "INVALID_AMOUNT");
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_amounts_too_large_are_rejected() {
    let app = init_app!();

    let huge = "50000000000000000000000000000";
    let payloads = [
        // a single line whose value overflows
        json!({
            "transaction": { "kind": "b2c" },
            "line_items": [
                { "description": "Marble", "quantity": huge, "unit_price": "2", "tax_rate": "18" }
            ]
        }),
        // lines that fit alone but overflow the subtotal
        json!({
            "transaction": { "kind": "b2c" },
            "line_items": [
                { "description": "Marble", "quantity": huge, "unit_price": "1", "tax_rate": "0" },
                { "description": "Granite", "quantity": huge, "unit_price": "1", "tax_rate": "0" }
            ]
        }),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/invoices/calculate")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "INVALID_AMOUNT");
    }
}

#[actix_web::test]
async fn test_discount_above_subtotal_is_rejected() {
    let app = init_app!();

    let mut payload = two_line_payload(json!({ "kind": "b2c" }));
    payload["discount"] = json!("2500.01");

    let req = test::TestRequest::post()
        .uri("/api/quotations/calculate")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "INVALID_AMOUNT");
}

#[actix_web::test]
async fn test_validation_errors() {
    let app = init_app!();

    let cases = [
        json!({ "transaction": { "kind": "b2c" }, "line_items": [] }),
        json!({
            "transaction": {
                "kind": "b2b",
                "buyer_gstin": "27ABCDE1234F1Z5",
                "buyer_state_code": "33"
            },
            "line_items": [
                { "description": "Sofa", "quantity": "1", "unit_price": "100", "tax_rate": "18" }
            ]
        }),
        json!({
            "seller_state_code": "25",
            "transaction": { "kind": "b2c" },
            "line_items": [
                { "description": "Sofa", "quantity": "1", "unit_price": "100", "tax_rate": "18" }
            ]
        }),
    ];

    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/api/invoices/calculate")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "payload {} should be rejected", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], "VALIDATION_ERROR");
    }
}

#[actix_web::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/quotations/calculate")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"transaction": {"kind": "b2x"}, "line_items": []}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error: Invalid request body"));
}

#[actix_web::test]
async fn test_reference_endpoints() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/gst/slabs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
