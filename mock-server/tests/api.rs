use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Lineup, Match, Pet, Player, Team};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Clones share the in-memory store, so one `app()` spans a whole scenario.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

const DOGGIE: &str = r#"{"name":"doggie","photoUrls":["https://example.com/d.png"],"status":"available"}"#;

// --- pets ---

#[tokio::test]
async fn add_pet_assigns_an_id() {
    let app = app();
    let resp = send(&app, json_request("POST", "/pet", DOGGIE)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let pet: Pet = body_json(resp).await;
    assert!(pet.id.is_some());
    assert_eq!(pet.name, "doggie");
}

#[tokio::test]
async fn add_pet_malformed_body_returns_400() {
    let app = app();
    let resp = send(&app, json_request("POST", "/pet", r#"{"title":1}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn spent_id_counter_rejects_instead_of_panicking() {
    let app = app();
    let max = format!(
        r#"{{"id":{},"name":"doggie","photoUrls":[],"status":"available"}}"#,
        i64::MAX
    );
    let resp = send(&app, json_request("POST", "/pet", &max)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, json_request("POST", "/pet", DOGGIE)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let resp = send(&app, json_request("POST", "/teams", r#"{"name":"Ajax"}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The server keeps serving requests that bring their own id.
    let own_id = r#"{"id":5,"name":"rex","photoUrls":[]}"#;
    let resp = send(&app, json_request("POST", "/pet", own_id)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, empty_request("GET", "/pet/5")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_pet_with_non_positive_id_returns_400() {
    let app = app();
    let body = r#"{"id":0,"name":"doggie","photoUrls":[]}"#;
    let resp = send(&app, json_request("POST", "/pet", body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_pet_not_found() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/pet/999999")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_pet_bad_id_returns_400() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/pet/not-a-number")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_by_unknown_status_returns_400() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/pet/findByStatus?status=lost")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_pet_statuses() {
    let app = app();
    let created: Pet = body_json(send(&app, json_request("POST", "/pet", DOGGIE)).await).await;
    let id = created.id.unwrap();

    let resp = send(&app, json_request("PUT", "/pet/424242", DOGGIE)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let invalid = r#"{"name":"doggie","photoUrls":[],"status":"lost"}"#;
    let resp = send(&app, json_request("PUT", &format!("/pet/{id}"), invalid)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let sold = r#"{"name":"doggie","photoUrls":[],"status":"sold"}"#;
    let resp = send(&app, json_request("PUT", &format!("/pet/{id}"), sold)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Pet = body_json(resp).await;
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.status.as_deref(), Some("sold"));
}

#[tokio::test]
async fn delete_missing_pet_returns_400() {
    let app = app();
    let resp = send(&app, empty_request("DELETE", "/pet/31337")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pet_lifecycle() {
    let app = app();
    let created: Pet = body_json(send(&app, json_request("POST", "/pet", DOGGIE)).await).await;
    let id = created.id.unwrap();

    let resp = send(&app, empty_request("GET", "/pet/findByStatus?status=available")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let pets: Vec<Pet> = body_json(resp).await;
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, Some(id));

    let resp = send(&app, empty_request("DELETE", &format!("/pet/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&app, empty_request("GET", &format!("/pet/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- users ---

#[tokio::test]
async fn login_checks_stored_password() {
    let app = app();
    let user = r#"{"username":"theUser","password":"12345","email":"john@email.com"}"#;
    let resp = send(&app, json_request("POST", "/user", user)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, empty_request("GET", "/user/login?username=theUser&password=nope")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(&app, empty_request("GET", "/user/login?username=theUser&password=12345")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let token: String = body_json(resp).await;
    assert!(token.contains("theUser"));
}

#[tokio::test]
async fn login_without_password_returns_400() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/user/login?username=theUser")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- players ---

#[tokio::test]
async fn add_player_returns_201() {
    let app = app();
    let body = r#"{"name":"Taro","position":"FW","jerseyNumber":9,"nationality":"Japan"}"#;
    let resp = send(&app, json_request("POST", "/players", body)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let player: Player = body_json(resp).await;
    assert!(player.id.is_some());
    assert_eq!(player.extra["nationality"], "Japan");
}

#[tokio::test]
async fn add_player_with_unknown_position_returns_400() {
    let app = app();
    let body = r#"{"name":"Taro","position":"ST","jerseyNumber":9}"#;
    let resp = send(&app, json_request("POST", "/players", body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn players_filter_by_position() {
    let app = app();
    for body in [
        r#"{"name":"A","position":"GK","jerseyNumber":1}"#,
        r#"{"name":"B","position":"FW","jerseyNumber":9,"status":"injured"}"#,
        r#"{"name":"C","position":"FW","jerseyNumber":11}"#,
    ] {
        send(&app, json_request("POST", "/players", body)).await;
    }

    let resp = send(&app, empty_request("GET", "/players?position=FW")).await;
    let forwards: Vec<Player> = body_json(resp).await;
    assert_eq!(forwards.len(), 2);

    let resp = send(&app, empty_request("GET", "/players?position=FW&status=injured")).await;
    let injured: Vec<Player> = body_json(resp).await;
    assert_eq!(injured.len(), 1);
    assert_eq!(injured[0].name, "B");
}

#[tokio::test]
async fn delete_player_returns_204_then_404() {
    let app = app();
    let body = r#"{"name":"Taro","position":"MF","jerseyNumber":8}"#;
    let player: Player = body_json(send(&app, json_request("POST", "/players", body)).await).await;
    let id = player.id.unwrap();

    let resp = send(&app, empty_request("DELETE", &format!("/players/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, empty_request("DELETE", &format!("/players/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- teams ---

#[tokio::test]
async fn get_team_attaches_roster() {
    let app = app();
    let resp = send(&app, json_request("POST", "/teams", r#"{"name":"FC Tokyo"}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let team: Team = body_json(resp).await;
    let team_id = team.id.unwrap();

    let body = format!(r#"{{"name":"Taro","position":"DF","jerseyNumber":3,"teamId":{team_id}}}"#);
    send(&app, json_request("POST", "/players", &body)).await;

    let resp = send(&app, empty_request("GET", &format!("/teams/{team_id}"))).await;
    let team: Team = body_json(resp).await;
    assert_eq!(team.players.map(|players| players.len()), Some(1));
}

#[tokio::test]
async fn lineup_needs_eleven_starters() {
    let app = app();
    let team: Team = body_json(send(&app, json_request("POST", "/teams", r#"{"name":"Ajax"}"#)).await).await;
    let uri = format!("/teams/{}/lineup", team.id.unwrap());

    let short = r#"{"formation":"4-4-2","playerIds":[1,2,3]}"#;
    let resp = send(&app, json_request("PUT", &uri, short)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let full = r#"{"formation":"4-4-2","playerIds":[1,2,3,4,5,6,7,8,9,10,11],"captain":4}"#;
    let resp = send(&app, json_request("PUT", &uri, full)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let lineup: Lineup = body_json(resp).await;
    assert!(lineup.id.is_some());
    assert_eq!(lineup.captain, Some(4));
}

#[tokio::test]
async fn lineup_for_missing_team_returns_404() {
    let app = app();
    let full = r#"{"formation":"4-4-2","playerIds":[1,2,3,4,5,6,7,8,9,10,11]}"#;
    let resp = send(&app, json_request("PUT", "/teams/777/lineup", full)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- matches ---

#[tokio::test]
async fn match_against_itself_returns_400() {
    let app = app();
    let body = r#"{"homeTeamId":1,"awayTeamId":1,"scheduledDate":"2026-05-01T18:00:00Z"}"#;
    let resp = send(&app, json_request("POST", "/matches", body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_result_finishes_the_match() {
    let app = app();
    let body = r#"{"homeTeamId":1,"awayTeamId":2,"scheduledDate":"2026-05-01T18:00:00Z"}"#;
    let resp = send(&app, json_request("POST", "/matches", body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let fixture: Match = body_json(resp).await;
    assert_eq!(fixture.status.as_deref(), Some("scheduled"));
    let id = fixture.id.unwrap();

    let negative = r#"{"homeScore":-1,"awayScore":0}"#;
    let resp = send(&app, json_request("PUT", &format!("/matches/{id}/result"), negative)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let result = r#"{"homeScore":2,"awayScore":1}"#;
    let resp = send(&app, json_request("PUT", &format!("/matches/{id}/result"), result)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fixture: Match = body_json(resp).await;
    assert_eq!(fixture.status.as_deref(), Some("finished"));

    let resp = send(&app, empty_request("GET", "/matches?teamId=2&status=finished")).await;
    let finished: Vec<Match> = body_json(resp).await;
    assert_eq!(finished.len(), 1);

    let resp = send(&app, json_request("PUT", "/matches/999/result", result)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
