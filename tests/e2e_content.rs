//! E2E tests for the content endpoints

mod common;

use common::TestServer;

#[tokio::test]
async fn test_profile_returns_owner_record() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/profile"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["name"], server.state.content.profile().name);
    assert!(profile["skills"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn test_projects_list_and_lookup() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/projects"))
        .send()
        .await
        .unwrap();
    let projects: serde_json::Value = response.json().await.unwrap();
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), server.state.content.projects().len());

    let first_id = projects[0]["id"].as_str().unwrap();
    let response = server
        .client
        .get(&server.url(&format!("/api/projects/{first_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let project: serde_json::Value = response.json().await.unwrap();
    assert_eq!(project["id"], first_id);
}

#[tokio::test]
async fn test_unknown_project_is_404() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/projects/no-such-project"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_post_detail_renders_rich_text_body() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/posts/minimalism-code"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let post: serde_json::Value = response.json().await.unwrap();
    let body = post["body"].as_array().unwrap();
    assert!(!body.is_empty());
    // The seed post opens with an H1.
    assert_eq!(body[0]["kind"], "heading");
    assert_eq!(body[0]["level"], 1);
}

#[tokio::test]
async fn test_post_summaries_omit_body() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/posts"))
        .send()
        .await
        .unwrap();
    let posts: serde_json::Value = response.json().await.unwrap();

    for post in posts.as_array().unwrap() {
        assert!(post.get("body").is_none());
        assert!(post["summary"].is_string());
        assert!(post["read_time"].is_string());
    }
}

#[tokio::test]
async fn test_unknown_post_is_404() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/posts/no-such-post"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

/// Content records survive any sequence of navigations and chat
/// submissions unchanged.
#[tokio::test]
async fn test_content_is_immutable_across_session_activity() {
    let server = TestServer::new().await;

    let before: serde_json::Value = server
        .client
        .get(&server.url("/api/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let projects_before: serde_json::Value = server
        .client
        .get(&server.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Stir the session state.
    for target in [
        serde_json::json!({"type": "projects"}),
        serde_json::json!({"type": "post", "post_id": "typography-screen"}),
        serde_json::json!({"type": "gallery", "project_id": "artworks"}),
        serde_json::json!({"type": "home"}),
    ] {
        server
            .client
            .post(&server.url("/api/view/navigate"))
            .json(&serde_json::json!({ "target": target }))
            .send()
            .await
            .unwrap();
    }
    server
        .client
        .post(&server.url("/api/chat/messages"))
        .json(&serde_json::json!({ "text": "What projects exist?" }))
        .send()
        .await
        .unwrap();

    let after: serde_json::Value = server
        .client
        .get(&server.url("/api/profile"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let projects_after: serde_json::Value = server
        .client
        .get(&server.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(before, after);
    assert_eq!(projects_before, projects_after);
}
