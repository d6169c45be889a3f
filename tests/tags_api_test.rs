//! Endpoint tests for the Tags resource.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{request, seed_user, test_app, token_for};

#[tokio::test]
async fn list_requires_authentication() {
    let (app, _state) = test_app();

    let (status, _body) = request(&app, Method::GET, "/tags", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_requires_authentication() {
    let (app, _state) = test_app();

    let (status, _body) = request(
        &app,
        Method::POST,
        "/tags",
        None,
        Some(json!({ "name": "Vegan" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let (app, _state) = test_app();

    let (status, _body) = request(
        &app,
        Method::GET,
        "/tags",
        Some("not-a-real-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tags_routes_accept_both_slash_forms() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    // Create through the trailing-slash form
    let (status, _body) = request(
        &app,
        Method::POST,
        "/tags/",
        Some(&token),
        Some(json!({ "name": "Vegan" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Both list forms serve the same resource
    let (status, body) = request(&app, Method::GET, "/tags/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));

    let (status, body) = request(&app, Method::GET, "/tags", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn unauthenticated_slash_form_is_rejected() {
    let (app, _state) = test_app();

    let (status, _body) = request(&app, Method::GET, "/tags/", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn retrieve_tags_ordered_by_name_descending() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    state.tags.create(user.id, "Chicken").await.unwrap();
    state.tags.create(user.id, "Icecream").await.unwrap();

    let (status, body) = request(&app, Method::GET, "/tags", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().expect("expected a JSON array");
    let names: Vec<&str> = tags
        .iter()
        .map(|t| t["name"].as_str().expect("name field"))
        .collect();
    assert_eq!(names, vec!["Icecream", "Chicken"]);
}

#[tokio::test]
async fn tags_are_scoped_to_the_requesting_user() {
    let (app, state) = test_app();
    let user_a = seed_user(&state, "haris@example.com", "12345").await;
    let user_b = seed_user(&state, "harisnew@example.com", "12345").await;
    let token_a = token_for(&state, &user_a);

    state.tags.create(user_b.id, "Beef").await.unwrap();
    state.tags.create(user_a.id, "Icecream").await.unwrap();

    let (status, body) = request(&app, Method::GET, "/tags", Some(&token_a), None).await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().expect("expected a JSON array");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "Icecream");
}

#[tokio::test]
async fn create_tag_valid() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    let (status, body) = request(
        &app,
        Method::POST,
        "/tags",
        Some(&token),
        Some(json!({ "name": "Test tag" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Test tag");
    assert!(body["id"].is_string());

    // The created tag shows up in the user's listing
    let (status, body) = request(&app, Method::GET, "/tags", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().expect("expected a JSON array");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "Test tag");
}

#[tokio::test]
async fn create_tag_with_empty_name_is_rejected() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    let (status, body) = request(
        &app,
        Method::POST,
        "/tags",
        Some(&token),
        Some(json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "name");

    // Nothing was persisted
    let (_status, body) = request(&app, Method::GET, "/tags", Some(&token), None).await;
    assert_eq!(body.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn create_tag_with_whitespace_name_is_rejected() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    let (status, _body) = request(
        &app,
        Method::POST,
        "/tags",
        Some(&token),
        Some(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tag_names_are_stored_trimmed() {
    let (app, state) = test_app();
    let user = seed_user(&state, "haris@example.com", "12345").await;
    let token = token_for(&state, &user);

    let (status, body) = request(
        &app,
        Method::POST,
        "/tags",
        Some(&token),
        Some(json!({ "name": "  Dinner  " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Dinner");
}
