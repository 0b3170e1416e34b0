//! HTTP contract tests for `/posts`, run in-process against the in-memory store.

mod common;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use api_server::handlers::configure_routes;
use api_server::observability::RequestIdMiddleware;
use api_server::state::AppState;
use blog_infra::fixtures::fake_post_request;
use blog_shared::dto::PostResponse;

use common::{seed, tear_down};

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_returns_all_seeded_posts() {
    let state = AppState::in_memory();
    seed(&state, 5).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 5);
    for post in &body {
        assert!(post["id"].is_string());
        assert!(post["title"].is_string());
        assert!(post["content"].is_string());
        assert!(post["author"]["firstName"].is_string());
        assert!(post["author"]["lastName"].is_string());
    }

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_list_length_matches_store_count() {
    for count in [0, 1, 3] {
        let state = AppState::in_memory();
        seed(&state, count).await;
        let app = init_app!(state);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len() as u64, state.posts.count().await.unwrap());
        tear_down(&state).await;
    }
}

#[actix_web::test]
async fn test_list_preserves_insertion_order() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 4).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let body: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<String> = body.into_iter().map(|p| p.id).collect();
    let expected: Vec<String> = seeded.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, expected);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_get_post_by_id() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 2).await;
    let app = init_app!(state);
    let target = &seeded[1];

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: PostResponse = test::read_body_json(resp).await;
    assert_eq!(body.id, target.id.to_string());
    assert_eq!(body.title, target.title);
    assert_eq!(body.content, target.content);
    assert_eq!(body.author.first_name, target.author.first_name);
    assert_eq!(body.author.last_name, target.author.last_name);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_get_unknown_or_malformed_id_is_not_found() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    for uri in [format!("/posts/{}", Uuid::new_v4()), "/posts/not-a-uuid".to_string()] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
    }
}

#[actix_web::test]
async fn test_create_post_persists_submitted_fields() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let payload = fake_post_request();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("Location header");

    let body: PostResponse = test::read_body_json(resp).await;
    assert_eq!(location, format!("/posts/{}", body.id));
    assert_eq!(body.title, payload.title);
    assert_eq!(body.content, payload.content);
    assert_eq!(body.author, payload.author);

    let id = Uuid::parse_str(&body.id).unwrap();
    let stored = state.posts.find_by_id(id).await.unwrap().expect("stored post");
    assert_eq!(stored.title, payload.title);
    assert_eq!(stored.content, payload.content);
    assert_eq!(stored.author.first_name, payload.author.first_name);
    assert_eq!(stored.author.last_name, payload.author.last_name);
    assert_eq!(state.posts.count().await.unwrap(), 1);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_create_post_rejects_invalid_payloads() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let invalid = [
        json!({ "title": "hiking", "content": "Up the hill." }),
        json!({ "title": "hiking", "content": "Up the hill.", "author": "Ada Lovelace" }),
        json!({ "title": "  ", "content": "Up the hill.",
                "author": { "firstName": "Ada", "lastName": "Lovelace" } }),
        json!({ "title": "hiking", "content": "Up the hill.",
                "author": { "firstName": "Ada", "lastName": "" } }),
    ];

    for payload in invalid {
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(body["detail"].is_string());
    }

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(state.posts.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_update_post_replaces_fields() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 3).await;
    let app = init_app!(state);
    let target = &seeded[0];

    let update = json!({
        "id": target.id.to_string(),
        "title": "camping",
        "content": "A night under the stars.",
        "author": { "firstName": "Grace", "lastName": "Hopper" },
    });
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    let body: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.id, target.id.to_string());
    assert_eq!(body.title, "camping");
    assert_eq!(body.content, "A night under the stars.");
    assert_eq!(body.author.first_name, "Grace");
    assert_eq!(body.author.last_name, "Hopper");
    assert_eq!(body.created_at, target.created_at.to_rfc3339());

    // Other posts are untouched.
    let other = state.posts.find_by_id(seeded[1].id).await.unwrap().unwrap();
    assert_eq!(other, seeded[1]);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_update_without_body_id_is_accepted() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 1).await;
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", seeded[0].id))
        .set_json(fake_post_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_update_error_cases() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 1).await;
    let app = init_app!(state);
    let target = &seeded[0];

    // Unknown id
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .set_json(fake_post_request())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // Body id disagrees with the path
    let mut mismatched = serde_json::to_value(fake_post_request()).unwrap();
    mismatched["id"] = json!(Uuid::new_v4().to_string());
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(&mismatched)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // Missing content
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(json!({
            "title": "skiing",
            "author": { "firstName": "Ada", "lastName": "Lovelace" },
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // Present but blank fields
    for update in [
        json!({ "title": "  ", "content": "Fresh powder.",
                "author": { "firstName": "Ada", "lastName": "Lovelace" } }),
        json!({ "title": "skiing", "content": "",
                "author": { "firstName": "Ada", "lastName": "Lovelace" } }),
        json!({ "title": "skiing", "content": "Fresh powder.",
                "author": { "firstName": " ", "lastName": "Lovelace" } }),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/posts/{}", target.id))
            .set_json(&update)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{update}");

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["detail"]
                .as_str()
                .is_some_and(|d| d.contains("missing required field"))
        );
    }

    let stored = state.posts.find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(&stored, target);

    tear_down(&state).await;
}

#[actix_web::test]
async fn test_delete_post() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 2).await;
    let app = init_app!(state);
    let target = &seeded[0];

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    assert_eq!(state.posts.count().await.unwrap(), 1);
    tear_down(&state).await;
}

#[actix_web::test]
async fn test_health_and_request_id() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-request-id", "req-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "req-123"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(generated).is_ok());
}

#[actix_web::test]
async fn test_error_bodies_carry_request_id() {
    let state = AppState::in_memory();
    let seeded = seed(&state, 1).await;
    let app = init_app!(state);

    // Handler error
    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .insert_header(("x-request-id", "req-404"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "req-404"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["request_id"], "req-404");
    assert_eq!(body["status"], 404);

    // Extractor error, with a generated id
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", seeded[0].id))
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let header_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("x-request-id header");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["request_id"], header_id.as_str());

    // Successful responses are untouched
    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", seeded[0].id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.get("request_id").is_none());

    tear_down(&state).await;
}
