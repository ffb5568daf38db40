//! Integration tests for the folder API.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_list_folders() {
    let app = helpers::TestApp::new();
    let (user_id, token) = app.new_user();

    let work = app.create_folder(&token, "Work").await;
    assert_eq!(work["name"], "Work");
    assert_eq!(work["user_id"], user_id.to_string());
    assert_eq!(work["parent_id"], serde_json::Value::Null);
    assert_eq!(work["items"], json!({}));

    app.create_folder(&token, "Life").await;

    let response = app.request("GET", "/api/v1/folders/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Work"));
    assert!(names.contains(&"Life"));
}

#[tokio::test]
async fn test_collection_without_trailing_slash() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    let response = app
        .request(
            "POST",
            "/api/v1/folders",
            Some(json!({ "name": "Work" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/v1/folders", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    app.create_folder(&token, "Work").await;

    let response = app
        .request(
            "POST",
            "/api/v1/folders/",
            Some(json!({ "name": "Work" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Folder already exists");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    for name in ["", "   "] {
        let response = app
            .request(
                "POST",
                "/api/v1/folders/",
                Some(json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "name {name:?}");
        assert!(response.body["detail"].is_string());
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_body_uses_detail_shape() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    let response = app
        .request(
            "POST",
            "/api/v1/folders/",
            Some(json!({ "title": "Work" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn test_get_folder_by_id() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let work = app.create_folder(&token, "Work").await;
    let id = work["id"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/api/v1/folders/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, work);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = app
            .request("GET", &format!("/api/v1/folders/{id}"), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "id {id}");
        assert_eq!(
            response.body["detail"],
            folderhub_service::folder::NOT_FOUND_MESSAGE
        );
    }
}

#[tokio::test]
async fn test_other_users_folders_are_invisible() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.new_user();
    let (_, bob) = app.new_user();
    let work = app.create_folder(&alice, "Work").await;
    let id = work["id"].as_str().unwrap();

    let listed = app.request("GET", "/api/v1/folders/", None, Some(&bob)).await;
    assert_eq!(listed.body, json!([]));

    let attempts = [
        ("GET", format!("/api/v1/folders/{id}"), None),
        (
            "POST",
            format!("/api/v1/folders/{id}/update"),
            Some(json!({ "name": "Stolen" })),
        ),
        (
            "POST",
            format!("/api/v1/folders/{id}/update/parent"),
            Some(json!({ "parent_id": null })),
        ),
        (
            "POST",
            format!("/api/v1/folders/{id}/update/items"),
            Some(json!({ "items": { "x": 1 } })),
        ),
        ("DELETE", format!("/api/v1/folders/{id}"), None),
    ];

    for (method, path, body) in attempts {
        let response = app.request(method, &path, body, Some(&bob)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {path}");
    }

    // Alice's folder is untouched
    let response = app
        .request("GET", &format!("/api/v1/folders/{id}"), None, Some(&alice))
        .await;
    assert_eq!(response.body, work);
}

#[tokio::test]
async fn test_same_name_for_different_users() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.new_user();
    let (_, bob) = app.new_user();

    app.create_folder(&alice, "Work").await;
    app.create_folder(&bob, "Work").await;

    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_rename_folder() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let work = app.create_folder(&token, "Work").await;
    app.create_folder(&token, "Life").await;
    let id = work["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{id}/update"),
            Some(json!({ "name": "Job" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Job");
    assert_eq!(response.body["id"], work["id"]);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{id}/update"),
            Some(json!({ "name": "Life" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Folder already exists");

    // Renaming to the current name is a no-op, not a clash
    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{id}/update"),
            Some(json!({ "name": "Job" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_replace_items() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let work = app.create_folder(&token, "Work").await;
    let id = work["id"].as_str().unwrap();
    let path = format!("/api/v1/folders/{id}/update/items");

    let response = app
        .request(
            "POST",
            &path,
            Some(json!({ "items": { "a": 1, "b": [1, 2] } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!({ "a": 1, "b": [1, 2] }));

    // Replaces, never merges
    let response = app
        .request("POST", &path, Some(json!({ "items": { "c": true } })), Some(&token))
        .await;
    assert_eq!(response.body["items"], json!({ "c": true }));
    assert_eq!(response.body["name"], "Work");
}

#[tokio::test]
async fn test_move_folder_and_back_to_root() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let work = app.create_folder(&token, "Work").await;
    let reports = app.create_folder(&token, "Reports").await;
    let work_id = work["id"].as_str().unwrap();
    let reports_id = reports["id"].as_str().unwrap();
    let path = format!("/api/v1/folders/{reports_id}/update/parent");

    let response = app
        .request("POST", &path, Some(json!({ "parent_id": work_id })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parent_id"], work["id"]);

    // A new root "Reports" may now exist alongside the nested one
    app.create_folder(&token, "Reports").await;

    // ...which blocks moving the nested one back to the root
    let response = app
        .request("POST", &path, Some(json!({ "parent_id": null })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Folder already exists");
}

#[tokio::test]
async fn test_move_into_descendant_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let a = app.create_folder(&token, "a").await;
    let b = app.create_folder(&token, "b").await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{b_id}/update/parent"),
            Some(json!({ "parent_id": a_id })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for target in [b_id, a_id] {
        let response = app
            .request(
                "POST",
                &format!("/api/v1/folders/{a_id}/update/parent"),
                Some(json!({ "parent_id": target })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "target {target}");
    }
}

#[tokio::test]
async fn test_move_under_foreign_parent_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, alice) = app.new_user();
    let (_, bob) = app.new_user();
    let mine = app.create_folder(&alice, "Mine").await;
    let theirs = app.create_folder(&bob, "Theirs").await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{}/update/parent", mine["id"].as_str().unwrap()),
            Some(json!({ "parent_id": theirs["id"] })),
            Some(&alice),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let work = app.create_folder(&token, "Work").await;
    let path = format!("/api/v1/folders/{}", work["id"].as_str().unwrap());

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(true));

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_work_life_scenario() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    let work = app.create_folder(&token, "Work").await;
    let life = app.create_folder(&token, "Life").await;
    let work_id = work["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{work_id}/update"),
            Some(json!({ "name": "Life" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{work_id}/update/parent"),
            Some(json!({ "parent_id": life["id"] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Work now lives under Life, so the root name is free
    let response = app
        .request(
            "POST",
            &format!("/api/v1/folders/{}/update", life["id"].as_str().unwrap()),
            Some(json!({ "name": "Work" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/v1/folders/{work_id}"), None, Some(&token))
        .await;
    assert_eq!(response.body, json!(true));

    let listed = app.request("GET", "/api/v1/folders/", None, Some(&token)).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
    assert_eq!(listed.body[0]["name"], "Work");
}

#[tokio::test]
async fn test_move_requires_parent_id_key() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();
    let parent = app.create_folder(&token, "parent").await;
    let child = app.create_folder(&token, "child").await;
    let path = format!("/api/v1/folders/{}/update/parent", child["id"].as_str().unwrap());

    let response = app
        .request("POST", &path, Some(json!({ "parent_id": parent["id"] })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for body in [json!({}), json!({ "parentId": parent["id"] })] {
        let response = app.request("POST", &path, Some(body.clone()), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body}");
        assert!(response.body["detail"].is_string());
    }

    // Rejected bodies leave the folder where it was
    let response = app.request("GET", &path.replace("/update/parent", ""), None, Some(&token)).await;
    assert_eq!(response.body["parent_id"], parent["id"]);

    let response = app
        .request("POST", &path, Some(json!({ "parent_id": null })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parent_id"], serde_json::Value::Null);
}
