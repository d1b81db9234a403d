use actix_web::{http::header::ContentType, test};
use mockito::Matcher;
use serial_test::serial;
use std::io::Write;
use std::time::{Duration, Instant};

mod common;
use common::{itinerary_request, model_plan, model_response, TestApp, GENERATE_PATH, TEST_API_KEY};

use trip_planner_api::models::request::{FALLBACK_NOTE, MISSING_FIELDS_ERROR};

#[actix_rt::test]
#[serial]
async fn test_generate_without_model_key_uses_fallback() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Nowhereville", 3, "budget", &["mixed"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert!(body.get("error").is_none());

    let plan = &body["data"];
    assert_eq!(plan["city"], "Nowhereville");
    assert_eq!(plan["days"], 3);
    assert_eq!(plan["budget"], 150.0);
    assert_eq!(plan["currency"], "USD");

    let days = plan["dailyItinerary"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["day"], 1);
    assert_eq!(days[0]["theme"], "Historic Discovery in Nowhereville");
    assert_eq!(days[0]["activities"]["morning"][0]["cost"], 15.0);
    assert_eq!(days[0]["activities"]["morning"][0]["type"], "attraction");
    assert_eq!(days[0]["dining"]["breakfast"]["priceRange"], "$8-12");

    for day in days {
        let cost = day["estimatedCost"].as_f64().unwrap();
        assert!((45.0..=55.0).contains(&cost), "daily cost {} out of range", cost);
    }
}

#[actix_rt::test]
#[serial]
async fn test_generate_rejects_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let bodies = vec![
        serde_json::json!({ "city": "Rome", "days": 2 }),
        itinerary_request("Rome", 0, "budget", &["mixed"]),
        itinerary_request("", 2, "budget", &["mixed"]),
        itinerary_request("Rome", 2, "budget", &[]),
        itinerary_request("Rome", 366, "budget", &["mixed"]),
        itinerary_request("Rome", 4_000_000_000, "budget", &["mixed"]),
    ];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/generate-itinerary")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "body {} should be rejected", body);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], MISSING_FIELDS_ERROR);
        assert!(json.get("data").is_none());
    }
}

#[actix_rt::test]
#[serial]
async fn test_generate_rejects_malformed_json() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .insert_header(ContentType::json())
        .set_payload("{\"city\": \"Rome\", \"days\": ")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], MISSING_FIELDS_ERROR);
}

#[actix_rt::test]
#[serial]
async fn test_generate_returns_model_plan() {
    let mut server = mockito::Server::new_async().await;
    let text = format!(
        "Here is your itinerary:\n```json\n{}\n```\nEnjoy!",
        model_plan()
    );
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()))
        .match_body(Matcher::Regex("Lisbon".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response(&text))
        .create_async()
        .await;

    let test_app = TestApp::with_model(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Lisbon", 1, "mid-range", &["foodie"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    mock.assert_async().await;

    assert_eq!(body["success"], true);
    assert!(body.get("note").is_none());
    assert_eq!(body["data"]["currency"], "EUR");
    assert_eq!(body["data"]["dailyItinerary"][0]["theme"], "Hills and Trams");
    assert_eq!(
        body["data"]["dailyItinerary"][0]["activities"]["afternoon"][0]["type"],
        "hidden-gem"
    );
}

#[actix_rt::test]
#[serial]
async fn test_generate_falls_back_on_unparseable_model_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response("Sorry, I cannot plan trips today."))
        .create_async()
        .await;

    let test_app = TestApp::with_model(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Paris", 2, "luxury", &["culture"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert_eq!(body["data"]["city"], "Paris");
    assert_eq!(body["data"]["budget"], 600.0);
    assert_eq!(
        body["data"]["dailyItinerary"][0]["activities"]["morning"][0]["cost"],
        50.0
    );
}

#[actix_rt::test]
#[serial]
async fn test_generate_falls_back_on_model_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("{\"error\": {\"message\": \"internal\"}}")
        .create_async()
        .await;

    let test_app = TestApp::with_model(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Tokyo", 2, "mid-range", &["shopping", "foodie"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert_eq!(body["data"]["dailyItinerary"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["data"]["dailyItinerary"][0]["activities"]["morning"][0]["type"],
        "shopping"
    );
}

#[actix_rt::test]
#[serial]
async fn test_generate_falls_back_when_model_unreachable() {
    // Nothing listens on port 1
    let test_app = TestApp::with_model("http://127.0.0.1:1");
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Rome", 1, "ultra-luxury", &["relaxation"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert_eq!(body["data"]["budget"], 500.0);
    assert_eq!(
        body["data"]["dailyItinerary"][0]["dining"]["dinner"]["priceRange"],
        "$100-200"
    );
}

#[actix_rt::test]
#[serial]
async fn test_gemini_check_without_key_reports_mock() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/test-gemini").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Using mock response (Gemini API failed)");
}

#[actix_rt::test]
#[serial]
async fn test_gemini_check_with_working_model() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response("Hello, Gemini is working!"))
        .create_async()
        .await;

    let test_app = TestApp::with_model(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/test-gemini").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Gemini API is working!");
    assert_eq!(body["response"], "Hello, Gemini is working!");
}

#[actix_rt::test]
#[serial]
async fn test_generate_falls_back_when_model_is_too_slow() {
    let mut server = mockito::Server::new_async().await;
    let plan_text = model_response(&model_plan().to_string());
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(move |w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(plan_text.as_bytes())
        })
        .create_async()
        .await;

    let test_app = TestApp::with_model_timeout(&server.url(), Duration::from_millis(500));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Lisbon", 2, "budget", &["mixed"]))
        .to_request();

    let started = Instant::now();
    let resp = test::call_service(&app, req).await;
    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert_eq!(body["data"]["currency"], "USD");
    assert_eq!(body["data"]["budget"], 100.0);
    assert_eq!(body["data"]["dailyItinerary"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
#[serial]
async fn test_generate_falls_back_on_inconsistent_model_plan() {
    let mut plan = model_plan();
    plan["days"] = serde_json::json!(4);

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response(&plan.to_string()))
        .create_async()
        .await;

    let test_app = TestApp::with_model(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(itinerary_request("Lisbon", 1, "mid-range", &["foodie"]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["note"], FALLBACK_NOTE);
    assert_eq!(body["data"]["currency"], "USD");
    assert_eq!(body["data"]["days"], 1);
}
