use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use customer_service::models::auth::ACTOR_HEADER;
use customer_service::models::config::ServerConfig;
use customer_service::repository::memory::InMemoryRepository;
use customer_service::routes;

const DEFAULT_ACTOR: &str = "system@example.com";

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: ":memory:".to_string(),
        default_actor: DEFAULT_ACTOR.to_string(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(InMemoryRepository::new()))
                .app_data(web::Data::new(server_config()))
                .service(web::scope("/api/v1").configure(routes::configure::<InMemoryRepository>)),
        )
        .await
    };
}

fn customer_body(name: &str, email: &str) -> Value {
    json!({"nameTh": format!("{name} TH"), "nameEn": name, "email": email})
}

#[actix_web::test]
async fn health_check_returns_ok() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/health-check")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_web::test]
async fn create_then_show_customer() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .insert_header((ACTOR_HEADER, "admin@example.com"))
        .set_json(customer_body("Alice", "Alice@Example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"data": {"customerId": 1}}));

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["id"], 1);
    assert_eq!(data["nameTh"], "Alice TH");
    assert_eq!(data["nameEn"], "Alice");
    assert_eq!(data["email"], "Alice@Example.com");
    assert_eq!(data["createdBy"], "admin@example.com");
    assert_eq!(data["updatedBy"], "admin@example.com");
    assert!(data.get("isDeleted").is_none());
}

#[actix_web::test]
async fn create_without_actor_header_uses_default_actor() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["createdBy"], DEFAULT_ACTOR);
}

#[actix_web::test]
async fn create_rejects_invalid_actor_header() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .insert_header((ACTOR_HEADER, "not-an-email"))
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_rejects_duplicate_email() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Other", "ALICE@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Email already exists"}));
}

#[actix_web::test]
async fn create_rejects_invalid_bodies() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "not-an-email"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(json!({"nameTh": "", "nameEn": "Alice", "email": "a@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn list_returns_pagination_envelope() {
    let app = init_app!();

    for i in 1..=15 {
        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(customer_body(
                &format!("Customer {i}"),
                &format!("customer{i}@example.com"),
            ))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?page=2&perPage=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["perPage"], 10);
    assert_eq!(body["totalItems"], 15);
    assert_eq!(body["totalPages"], 2);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![11, 12, 13, 14, 15]);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["perPage"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn list_rejects_invalid_query() {
    let app = init_app!();

    for uri in [
        "/api/v1/customers?page=0",
        "/api/v1/customers?perPage=0",
        "/api/v1/customers?perPage=101",
        "/api/v1/customers?page=abc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[actix_web::test]
async fn list_rejects_page_beyond_sql_range() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?page=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "page is out of range"}));
}

#[actix_web::test]
async fn list_page_past_the_end_is_empty() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?page=1000000&perPage=100")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["page"], 1000000);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn keyword_search_then_delete() {
    let app = init_app!();

    for (name, email) in [("Anna", "a@x.com"), ("Boris", "boris@y.com")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(customer_body(name, email))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?keyword=a%40x")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["data"][0]["email"], "a@x.com");

    let req = test::TestRequest::delete()
        .uri("/api/v1/customers/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?keyword=a%40x")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"data": [], "page": 1, "perPage": 10, "totalItems": 0, "totalPages": 1})
    );
}

#[actix_web::test]
async fn update_customer_changes_fields() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/customers/1")
        .insert_header((ACTOR_HEADER, "editor@example.com"))
        .set_json(customer_body("Alicia", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"data": {"customerId": 1}}));

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["nameEn"], "Alicia");
    assert_eq!(body["data"]["updatedBy"], "editor@example.com");
    assert_eq!(body["data"]["createdBy"], DEFAULT_ACTOR);
}

#[actix_web::test]
async fn update_rejects_email_of_other_customer() {
    let app = init_app!();

    for (name, email) in [("Alice", "alice@example.com"), ("Bob", "bob@example.com")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(customer_body(name, email))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::put()
        .uri("/api/v1/customers/2")
        .set_json(customer_body("Bob", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Email already exists"}));

    let req = test::TestRequest::put()
        .uri("/api/v1/customers/99")
        .set_json(customer_body("Nobody", "nobody@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn show_and_delete_report_missing_customers() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "customer not found"}));

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_body("Alice", "alice@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::delete()
        .uri("/api/v1/customers/1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::delete()
        .uri("/api/v1/customers/1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn invalid_ids_are_bad_requests() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "invalid id"}));

    let req = test::TestRequest::delete()
        .uri("/api/v1/customers/0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
