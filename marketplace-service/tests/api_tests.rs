//! End-to-end flows against a real server and a throwaway Postgres database.
//!
//! Run with `cargo test -- --ignored` once Postgres listens on localhost:5433
//! (or `DATABASE_URL` points elsewhere).

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn data(response: reqwest::Response) -> Value {
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"].clone()
}

async fn publish(app: &TestApp, token: &str, title: &str) -> Value {
    let response = app
        .post("/api/opportunities")
        .bearer_auth(token)
        .json(&json!({
            "title": title,
            "description": "Build and run the matching service",
            "type": "job",
            "tags": "rust, postgres",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    data(response).await
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_register_returns_account_without_hash() {
    let app = TestApp::spawn().await;

    let account = app.register("Ada@Example.com", "pass_word!", "seeker").await;

    assert_eq!(account["email"], "ada@example.com");
    assert_eq!(account["role"], "seeker");
    assert!(account["id"].is_string());
    assert!(account.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_register_duplicate_email_is_conflict() {
    let app = TestApp::spawn().await;
    app.register("ada@example.com", "pass_word!", "seeker").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "ADA@example.com",
            "password": "other",
            "role": "provider",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_login_then_read_current_account() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("ada@example.com", "seeker").await;

    let response = app
        .get("/api/users/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let account = data(response).await;
    assert_eq!(account["email"], "ada@example.com");
    assert_eq!(account["role"], "seeker");
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_login_wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register("ada@example.com", "pass_word!", "seeker").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "nope", "role": "seeker" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        data(response).await["message"],
        "Incorrect email or password"
    );
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_login_with_wrong_role_is_forbidden() {
    let app = TestApp::spawn().await;
    app.register("ada@example.com", "pass_word!", "seeker").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "pass_word!",
            "role": "provider",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        data(response).await["message"],
        "You are not authorized to log in as a provider"
    );
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_seeker_cannot_publish_opportunity() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("ada@example.com", "seeker").await;

    let response = app
        .post("/api/opportunities")
        .bearer_auth(&token)
        .json(&json!({ "title": "Role", "description": "Desc" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        data(response).await["message"],
        "Not authorized: requires provider role"
    );
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_published_opportunity_takes_profile_location() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("acme@example.com", "provider").await;

    let opportunity = publish(&app, &token, "Backend engineer").await;

    assert_eq!(opportunity["location"], "Rome, Italy");
    assert_eq!(opportunity["status"], "open");
    assert_eq!(opportunity["type"], "job");
    assert_eq!(opportunity["tags"], json!(["rust", "postgres"]));

    let listed = data(
        app.get("/api/opportunities")
            .send()
            .await
            .expect("Failed to execute request"),
    )
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_other_provider_cannot_modify_opportunity() {
    let app = TestApp::spawn().await;
    let owner = app.signed_in("acme@example.com", "provider").await;
    let intruder = app.signed_in("globex@example.com", "provider").await;
    let opportunity = publish(&app, &owner, "Backend engineer").await;
    let path = format!("/api/opportunities/{}", opportunity["id"].as_str().unwrap());

    let update = app
        .put(&path)
        .bearer_auth(&intruder)
        .json(&json!({ "status": "closed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete(&path)
        .bearer_auth(&owner)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let fetch = app.get(&path).send().await.expect("Failed to execute request");
    assert_eq!(fetch.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_apply_and_review_flow() {
    let app = TestApp::spawn().await;
    let provider = app.signed_in("acme@example.com", "provider").await;
    let seeker = app.signed_in("ada@example.com", "seeker").await;
    let opportunity = publish(&app, &provider, "Backend engineer").await;
    let opportunity_id = opportunity["id"].as_str().unwrap().to_string();

    let applied = app
        .post("/api/applications/apply")
        .bearer_auth(&seeker)
        .json(&json!({ "opportunity_id": opportunity_id, "cover_letter": "Hello" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(applied.status(), StatusCode::CREATED);
    let application = data(applied).await;
    assert_eq!(application["status"], "pending");

    let again = app
        .post("/api/applications/apply")
        .bearer_auth(&seeker)
        .json(&json!({ "opportunity_id": opportunity_id }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let received = data(
        app.get(&format!("/api/opportunities/{}/applications", opportunity_id))
            .bearer_auth(&provider)
            .send()
            .await
            .expect("Failed to execute request"),
    )
    .await;
    assert_eq!(received[0]["id"], application["id"]);

    let reviewed = app
        .patch(&format!(
            "/api/applications/{}",
            application["id"].as_str().unwrap()
        ))
        .bearer_auth(&provider)
        .json(&json!({ "status": "accepted" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(reviewed.status(), StatusCode::OK);
    assert_eq!(data(reviewed).await["status"], "accepted");

    let mine = data(
        app.get("/api/applications/me")
            .bearer_auth(&seeker)
            .send()
            .await
            .expect("Failed to execute request"),
    )
    .await;
    assert_eq!(mine[0]["status"], "accepted");
    assert_eq!(mine[0]["opportunity"]["title"], "Backend engineer");
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_deleted_account_token_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("ada@example.com", "seeker").await;

    let deleted = app
        .delete("/api/users/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let response = app
        .get("/api/users/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        data(response).await["message"],
        "Could not validate credentials"
    );
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_profile_update_is_partial() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("ada@example.com", "seeker").await;

    let response = app
        .put("/api/profiles/me")
        .bearer_auth(&token)
        .json(&json!({ "bio": "Rustacean", "interests": ["systems"] }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let profile = data(response).await;
    assert_eq!(profile["bio"], "Rustacean");
    assert_eq!(profile["interests"], json!(["systems"]));
    assert_eq!(profile["city"], "Rome");
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_long_free_text_fields_are_stored() {
    let app = TestApp::spawn().await;
    let long = |n: usize| "x".repeat(n);

    let registered = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "acme@example.com",
            "password": "pass_word!",
            "full_name": long(300),
            "role": "provider",
            "organizationName": long(300),
            "country": long(200),
            "city": long(200),
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(registered.status(), StatusCode::CREATED);
    assert_eq!(data(registered).await["full_name"], long(300));

    let token = app.login("acme@example.com", "pass_word!", "provider").await;

    let profile = app
        .put("/api/profiles/me")
        .bearer_auth(&token)
        .json(&json!({ "city": long(250), "country": long(250) }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(profile.status(), StatusCode::OK);
    let profile = data(profile).await;
    assert_eq!(profile["city"], long(250));
    assert_eq!(profile["company_name"], long(300));

    let opportunity = app
        .post("/api/opportunities")
        .bearer_auth(&token)
        .json(&json!({ "title": "Dev", "description": "d", "type": long(80) }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(opportunity.status(), StatusCode::CREATED);
    assert_eq!(data(opportunity).await["type"], long(80));
}

#[tokio::test]
#[ignore = "requires postgres on localhost:5433"]
async fn test_blank_location_takes_profile_location() {
    let app = TestApp::spawn().await;
    let token = app.signed_in("acme@example.com", "provider").await;

    let response = app
        .post("/api/opportunities")
        .bearer_auth(&token)
        .json(&json!({ "title": "Dev", "description": "d", "location": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(data(response).await["location"], "Rome, Italy");
}
