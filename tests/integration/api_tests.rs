//! End-to-end tests against a running server

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Client that reports redirects instead of following them
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/api/v1/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_home_page() {
    let response = client()
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("/borrow_book"));
}

#[tokio::test]
#[ignore]
async fn test_add_book_form_redirects() {
    let response = client()
        .post(format!("{}/add_book", BASE_URL))
        .form(&[("title", "Integration Book"), ("author", "Tester"), ("type", "Test")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/books");
}

#[tokio::test]
#[ignore]
async fn test_borrow_unknown_book_shows_error() {
    let response = client()
        .post(format!("{}/borrow_book", BASE_URL))
        .form(&[("name", "Nobody"), ("grade", "1"), ("book_id", "-1")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Invalid Book ID. Please enter a valid Book ID."));
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_over_api() {
    let client = client();

    let book: Value = client
        .post(format!("{}/api/v1/books", BASE_URL))
        .json(&json!({"title": "Loan Test", "author": "Tester", "type": "Test"}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let book_id = book["id"].as_i64().expect("No book ID");

    let response = client
        .post(format!("{}/api/v1/loans", BASE_URL))
        .json(&json!({"name": "Tester", "grade": 3, "book_id": book_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let loan: Value = response.json().await.expect("Failed to parse response");
    let loan_id = loan["id"].as_i64().expect("No loan ID");

    let response = client
        .delete(format!("{}/api/v1/loans/{}", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_return_unknown_loan() {
    let response = client()
        .delete(format!("{}/api/v1/loans/{}", BASE_URL, i64::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
