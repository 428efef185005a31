//! Integration tests for the role gate and the ownership gates.

use axum::http::StatusCode;

use playerhub_entity::user::UserRole;

use crate::helpers::TestApp;

const FORBIDDEN: &str = "You are not allowed to perform this action";

#[tokio::test]
async fn test_admin_bypasses_player_ownership() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin", UserRole::Admin).await;
    let (_, owner) = app.user_with_token("owner", UserRole::User).await;
    let player = app.create_player(&owner, "owned-by-someone-else").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/players/{player}"),
            Some(serde_json::json!({ "level": 9 })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.message(), "Player updated successfully");
    assert_eq!(response.body["data"]["level"], 9);
}

#[tokio::test]
async fn test_user_cannot_touch_another_users_player() {
    let app = TestApp::new();
    let (_, mallory) = app.user_with_token("mallory", UserRole::User).await;
    let (_, owner) = app.user_with_token("victim", UserRole::User).await;
    let player = app.create_player(&owner, "victim-main").await;

    let update = app
        .request(
            "PUT",
            &format!("/api/v1/players/{player}"),
            Some(serde_json::json!({ "points": 1_000_000 })),
            Some(&mallory),
        )
        .await;
    update.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);
    assert_eq!(update.body["status"], "Forbidden");

    let delete = app
        .request(
            "DELETE",
            &format!("/api/v1/players/{player}"),
            None,
            Some(&mallory),
        )
        .await;
    delete.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let still_there = app
        .request("GET", &format!("/api/v1/players/{player}"), None, Some(&owner))
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["data"]["points"], 0);
}

#[tokio::test]
async fn test_user_manages_own_player() {
    let app = TestApp::new();
    let (user_id, token) = app.user_with_token("solo", UserRole::User).await;
    let player = app.create_player(&token, "solo-main").await;

    let update = app
        .request(
            "PUT",
            &format!("/api/v1/players/{player}"),
            Some(serde_json::json!({ "nickname": "solo-renamed" })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK, "{:?}", update.body);
    assert_eq!(update.body["data"]["nickname"], "solo-renamed");
    assert_eq!(update.body["data"]["user_id"], user_id.get());

    let delete = app
        .request(
            "DELETE",
            &format!("/api/v1/players/{player}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);
    assert_eq!(delete.message(), "Player deleted successfully");

    let gone = app
        .request("GET", &format!("/api/v1/players/{player}"), None, Some(&token))
        .await;
    gone.assert_error(StatusCode::NOT_FOUND, "Player not found");
}

#[tokio::test]
async fn test_unparsable_player_id_is_bad_request() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("typo", UserRole::User).await;

    for raw in ["abc", "0", "-1"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/v1/players/{raw}"),
                Some(serde_json::json!({ "level": 2 })),
                Some(&token),
            )
            .await;
        response.assert_error(StatusCode::BAD_REQUEST, "Invalid player ID");
    }
}

#[tokio::test]
async fn test_missing_player_is_not_found_for_users() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("seeker", UserRole::User).await;

    let response = app
        .request(
            "DELETE",
            "/api/v1/players/9999",
            None,
            Some(&token),
        )
        .await;
    response.assert_error(StatusCode::NOT_FOUND, "Player not found");
}

#[tokio::test]
async fn test_user_updates_only_itself() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("self", UserRole::User).await;
    let other = app.create_user("other", UserRole::User).await;

    let mine = app
        .request(
            "PUT",
            &format!("/api/v1/users/{me}"),
            Some(serde_json::json!({ "age": 31 })),
            Some(&token),
        )
        .await;
    assert_eq!(mine.status, StatusCode::OK, "{:?}", mine.body);
    assert_eq!(mine.body["data"]["age"], 31);

    let theirs = app
        .request(
            "PUT",
            &format!("/api/v1/users/{other}"),
            Some(serde_json::json!({ "age": 99 })),
            Some(&token),
        )
        .await;
    theirs.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let delete_theirs = app
        .request("DELETE", &format!("/api/v1/users/{other}"), None, Some(&token))
        .await;
    delete_theirs.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let bad_id = app
        .request("DELETE", "/api/v1/users/me", None, Some(&token))
        .await;
    bad_id.assert_error(StatusCode::BAD_REQUEST, "Invalid user ID");
}

#[tokio::test]
async fn test_admin_deletes_any_user() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("root", UserRole::Admin).await;
    let target = app.create_user("leaving", UserRole::User).await;

    let response = app
        .request("DELETE", &format!("/api/v1/users/{target}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User deleted successfully");

    let gone = app
        .request("GET", &format!("/api/v1/users/{target}"), None, Some(&admin))
        .await;
    gone.assert_error(StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_player_for_another_user_needs_admin() {
    let app = TestApp::new();
    let (_, user) = app.user_with_token("plain", UserRole::User).await;
    let (_, admin) = app.user_with_token("boss", UserRole::Admin).await;
    let target = app.create_user("recipient", UserRole::User).await;

    let body = serde_json::json!({ "nickname": "gifted", "user_id": target.get() });

    let denied = app
        .request("POST", "/api/v1/players", Some(body.clone()), Some(&user))
        .await;
    denied.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let created = app
        .request("POST", "/api/v1/players", Some(body), Some(&admin))
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    assert_eq!(created.message(), "Player profile created successfully");
    assert_eq!(created.body["data"]["user_id"], target.get());
}

#[tokio::test]
async fn test_achievement_mutations_need_admin() {
    let app = TestApp::new();
    let (_, user) = app.user_with_token("player1", UserRole::User).await;
    let (_, admin) = app.user_with_token("curator", UserRole::Admin).await;

    let body = serde_json::json!({ "name": "First Blood", "description": "Win a match" });

    let denied = app
        .request("POST", "/api/v1/achievements", Some(body.clone()), Some(&user))
        .await;
    denied.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let created = app
        .request("POST", "/api/v1/achievements", Some(body), Some(&admin))
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    assert_eq!(created.message(), "Achievement created successfully");
    let achievement = created.body["data"]["id"].as_i64().unwrap();

    let listed = app
        .request("GET", "/api/v1/achievements", None, Some(&user))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.message(), "Achievements retrieved successfully");
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    let delete_denied = app
        .request(
            "DELETE",
            &format!("/api/v1/achievements/{achievement}"),
            None,
            Some(&user),
        )
        .await;
    delete_denied.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);
}

#[tokio::test]
async fn test_award_and_revoke_achievement() {
    let app = TestApp::new();
    let (_, user) = app.user_with_token("earner", UserRole::User).await;
    let (_, admin) = app.user_with_token("judge", UserRole::Admin).await;
    let player = app.create_player(&user, "earner-main").await;

    let created = app
        .request(
            "POST",
            "/api/v1/achievements",
            Some(serde_json::json!({ "name": "Marathon", "description": "Play 10 hours" })),
            Some(&admin),
        )
        .await;
    let achievement = created.body["data"]["id"].as_i64().unwrap();
    let award_path = format!("/api/v1/achievements/{achievement}/players/{player}");

    let self_award = app.request("POST", &award_path, None, Some(&user)).await;
    self_award.assert_error(StatusCode::FORBIDDEN, FORBIDDEN);

    let awarded = app.request("POST", &award_path, None, Some(&admin)).await;
    assert_eq!(awarded.status, StatusCode::OK, "{:?}", awarded.body);

    let twice = app.request("POST", &award_path, None, Some(&admin)).await;
    assert_eq!(twice.status, StatusCode::CONFLICT);

    let with_achievements = app
        .request(
            "GET",
            &format!("/api/v1/players/{player}/achievements"),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(with_achievements.status, StatusCode::OK);
    assert_eq!(
        with_achievements.message(),
        "Player with achievements fetched successfully"
    );
    assert_eq!(with_achievements.body["data"]["nickname"], "earner-main");
    assert_eq!(
        with_achievements.body["data"]["achievements"][0]["name"],
        "Marathon"
    );

    let holders = app
        .request(
            "GET",
            &format!("/api/v1/achievements/{achievement}/players"),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(holders.body["data"]["players"][0]["id"], player);

    let revoked = app.request("DELETE", &award_path, None, Some(&admin)).await;
    assert_eq!(revoked.status, StatusCode::OK);

    let again = app.request("DELETE", &award_path, None, Some(&admin)).await;
    again.assert_error(StatusCode::NOT_FOUND, "Player does not hold this achievement");
}
