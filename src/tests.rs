//! Integration tests for the portfolio backend.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::{create_router, AppState};

const TEST_PASSWORD: &str = "test-password";

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
});

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Lazy::force(&TRACING);

        let config = Config {
            admin_password: TEST_PASSWORD.to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            contact_delay: Duration::ZERO,
        };

        let app = create_router(AppState::new(config));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    /// A fixture that is already in admin mode.
    async fn admin() -> Self {
        let fixture = Self::new().await;
        let resp = fixture
            .client
            .post(fixture.url("/api/admin/login"))
            .json(&json!({ "password": TEST_PASSWORD }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        fixture
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Value {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 200, "GET {}", path);
        resp.json().await.unwrap()
    }
}

fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_portfolio_snapshot() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/portfolio").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["revisionId"], 0);
    let data = &body["data"];
    assert_eq!(data["projects"].as_array().unwrap().len(), 4);
    assert_eq!(data["certificates"].as_array().unwrap().len(), 3);
    assert_eq!(data["experiences"].as_array().unwrap().len(), 3);
    assert_eq!(data["skills"].as_array().unwrap().len(), 21);
    assert_eq!(data["achievements"].as_array().unwrap().len(), 3);
    assert_eq!(data["education"].as_array().unwrap().len(), 2);
    assert_eq!(data["social"]["email"], "yash@example.com");
    assert_eq!(data["about"]["highlights"]["projectsCompleted"], 25);
}

#[tokio::test]
async fn test_edit_routes_require_admin() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/projects"))
        .json(&json!({ "title": "Sneaky", "description": "Nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let resp = fixture
        .client
        .delete(fixture.url("/api/skills/1?confirm=true"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .client
        .get(fixture.url("/api/admin/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Reads stay public
    let body = fixture.get_json("/api/projects").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_login_and_logout() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/admin/login"))
        .json(&json!({ "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(body["notice"]["title"], "Invalid password");
    assert_eq!(body["notice"]["destructive"], true);

    let body = fixture.get_json("/api/admin/session").await;
    assert_eq!(body["data"]["isAdmin"], false);

    let resp = fixture
        .client
        .post(fixture.url("/api/admin/login"))
        .json(&json!({ "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["isAdmin"], true);
    assert_eq!(body["notice"]["title"], "Welcome back, Admin!");

    let body = fixture.get_json("/api/admin/session").await;
    assert_eq!(body["data"]["isAdmin"], true);

    let resp = fixture
        .client
        .post(fixture.url("/api/admin/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url("/api/admin/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_project_crud() {
    let fixture = TestFixture::admin().await;

    // Create
    let resp = fixture
        .client
        .post(fixture.url("/api/projects"))
        .json(&json!({
            "title": "Test Project",
            "description": "Built during a test",
            "techStack": "Rust, Axum, ",
            "category": "backend"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["revisionId"], 1);
    assert_eq!(body["notice"]["title"], "Project Added");
    assert_eq!(
        body["notice"]["description"],
        "\"Test Project\" has been saved."
    );
    let created = &body["data"];
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["techStack"], json!(["Rust", "Axum"]));
    assert_eq!(created["featured"], false);

    let body = fixture.get_json("/api/projects").await;
    let listed = titles(&body);
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0], "Test Project");

    // Get
    let body = fixture.get_json(&format!("/api/projects/{}", id)).await;
    assert_eq!(body["data"]["category"], "backend");

    // Update merges only the submitted fields
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/projects/{}", id)))
        .json(&json!({ "featured": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["revisionId"], 2);
    assert_eq!(body["notice"]["title"], "Project Updated");
    assert_eq!(body["data"]["featured"], true);
    assert_eq!(body["data"]["title"], "Test Project");
    assert_eq!(body["data"]["description"], "Built during a test");

    // Delete
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/projects/{}?confirm=true", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["notice"]["title"], "Project Deleted");
    assert_eq!(body["notice"]["destructive"], true);

    let body = fixture.get_json("/api/projects").await;
    assert_eq!(
        titles(&body),
        vec![
            "AI-Powered Code Review Bot",
            "E-Commerce Platform",
            "Real-time Chat Application",
            "REST API Generator"
        ]
    );
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/certificates/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "CONFIRMATION_REQUIRED");
    assert_eq!(
        body["error"]["details"]["displayName"],
        "MongoDB Certified Developer"
    );
    assert_eq!(body["revisionId"], 0);

    let body = fixture.get_json("/api/certificates").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let resp = fixture
        .client
        .delete(fixture.url("/api/certificates/2?confirm=true"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = fixture.get_json("/api/certificates").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/achievements/does-not-exist?confirm=true"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["revisionId"], 0);
    assert!(body.get("notice").is_none());

    let body = fixture.get_json("/api/achievements").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_validation_errors() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/skills"))
        .json(&json!({ "name": "   ", "category": "tools" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["notice"]["title"], "Error");
    assert_eq!(body["notice"]["description"], "Skill name is required");
    assert_eq!(body["notice"]["destructive"], true);

    let body = fixture.get_json("/api/skills").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 21);
    assert_eq!(body["revisionId"], 0);

    // Clearing a required field on edit is rejected too
    let resp = fixture
        .client
        .put(fixture.url("/api/education/1"))
        .json(&json!({ "institution": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body = fixture.get_json("/api/education/1").await;
    assert_eq!(body["data"]["institution"], "ABC Institute of Technology");
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/projects/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp = fixture
        .client
        .put(fixture.url("/api/experiences/nonexistent"))
        .json(&json!({ "role": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = fixture
        .client
        .post(fixture.url("/api/skills/nonexistent/visibility"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_skill_visibility() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/skills/5/visibility"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Vue.js");
    assert_eq!(body["data"]["visible"], false);
    assert_eq!(body["notice"]["title"], "Skill visibility updated");

    // Admin still sees the hidden skill
    let body = fixture.get_json("/api/skills").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 21);

    fixture
        .client
        .post(fixture.url("/api/admin/logout"))
        .send()
        .await
        .unwrap();

    // The public site does not
    let body = fixture.get_json("/api/skills").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 20);
    let body = fixture.get_json("/api/portfolio").await;
    assert_eq!(body["data"]["skills"].as_array().unwrap().len(), 20);

    let body = fixture.get_json("/api/skills?category=frontend").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_skill_visibility_toggle_twice_restores() {
    let fixture = TestFixture::admin().await;
    let before = fixture.get_json("/api/skills/1").await;

    for _ in 0..2 {
        let resp = fixture
            .client
            .post(fixture.url("/api/skills/1/visibility"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let after = fixture.get_json("/api/skills/1").await;
    assert_eq!(before["data"], after["data"]);
    assert_eq!(after["revisionId"], 2);
}

#[tokio::test]
async fn test_skill_defaults_and_clamping() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/skills"))
        .json(&json!({ "name": "Rust", "proficiency": 250 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["proficiency"], 100);
    assert_eq!(body["data"]["category"], "frontend");
    assert_eq!(body["data"]["visible"], true);
}

#[tokio::test]
async fn test_current_experience_drops_end_date() {
    let fixture = TestFixture::admin().await;

    let resp = fixture
        .client
        .put(fixture.url("/api/experiences/2"))
        .json(&json!({ "current": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["current"], true);
    assert_eq!(body["data"]["endDate"], Value::Null);
    assert_eq!(body["data"]["company"], "StartupXYZ");

    let resp = fixture
        .client
        .post(fixture.url("/api/education"))
        .json(&json!({
            "degree": "MSc Computer Science",
            "institution": "Some University",
            "startYear": "2024",
            "endYear": "2026",
            "current": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["endYear"], Value::Null);
}

#[tokio::test]
async fn test_project_filters() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/projects?category=fullstack").await;
    assert_eq!(
        titles(&body),
        vec!["E-Commerce Platform", "Real-time Chat Application"]
    );

    let body = fixture.get_json("/api/projects?featured=true").await;
    assert_eq!(
        titles(&body),
        vec!["AI-Powered Code Review Bot", "E-Commerce Platform"]
    );

    let body = fixture.get_json("/api/projects?category=all").await;
    assert_eq!(titles(&body).len(), 4);

    let resp = fixture
        .client
        .get(fixture.url("/api/projects?category=mobile"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_dashboard_and_reset() {
    let fixture = TestFixture::admin().await;

    fixture
        .client
        .delete(fixture.url("/api/projects/1?confirm=true"))
        .send()
        .await
        .unwrap();

    let body = fixture.get_json("/api/admin/dashboard").await;
    assert_eq!(body["data"]["counts"]["projects"], 3);
    assert_eq!(body["data"]["counts"]["skills"], 21);
    assert_eq!(body["data"]["projects"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["projects"][0]["title"], "E-Commerce Platform");

    let resp = fixture
        .client
        .post(fixture.url("/api/admin/reset"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["revisionId"], 2);

    let body = fixture.get_json("/api/admin/dashboard").await;
    assert_eq!(body["data"]["counts"]["projects"], 4);
}

#[tokio::test]
async fn test_contact_flow() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/contact"))
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "subject": "", "message": "Hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = fixture
        .client
        .post(fixture.url("/api/contact"))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Collaboration",
            "message": "Let's build something."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["notice"]["title"], "Message sent!");
    assert_eq!(body["data"]["read"], false);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // The inbox is admin-only
    let resp = fixture
        .client
        .get(fixture.url("/api/messages"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    fixture
        .client
        .post(fixture.url("/api/admin/login"))
        .json(&json!({ "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();

    let body = fixture.get_json("/api/admin/dashboard").await;
    assert_eq!(body["data"]["counts"]["unreadMessages"], 1);

    let body = fixture.get_json("/api/messages").await;
    assert_eq!(body["data"][0]["subject"], "Collaboration");

    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/messages/{}/read", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = fixture.get_json("/api/admin/dashboard").await;
    assert_eq!(body["data"]["counts"]["messages"], 1);
    assert_eq!(body["data"]["counts"]["unreadMessages"], 0);
}

#[tokio::test]
async fn test_revision_increments_on_writes() {
    let fixture = TestFixture::admin().await;

    let body = fixture.get_json("/api/portfolio/revision").await;
    assert_eq!(body["data"]["revisionId"], 0);

    fixture
        .client
        .post(fixture.url("/api/achievements"))
        .json(&json!({ "title": "Shipped it", "description": "Went live" }))
        .send()
        .await
        .unwrap();

    fixture
        .client
        .put(fixture.url("/api/achievements/1"))
        .json(&json!({ "proofUrl": "" }))
        .send()
        .await
        .unwrap();

    let body = fixture.get_json("/api/portfolio/revision").await;
    assert_eq!(body["data"]["revisionId"], 2);

    let body = fixture.get_json("/api/achievements/1").await;
    assert_eq!(body["data"]["proofUrl"], Value::Null);
}
