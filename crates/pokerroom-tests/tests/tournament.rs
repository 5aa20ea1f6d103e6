//! Tournament endpoint wire-contract tests.

use pokerroom_client::{Tournament, TournamentApi, TournamentsQuery};
use pokerroom_tests::{MockServer, test_session};
use serde_json::json;

fn tournament_against(server: &MockServer) -> Tournament {
    Tournament::new(test_session(), &server.base_url()).expect("Failed to create tournament group")
}

#[tokio::test]
async fn test_tournament_lobby_sends_all_filters() {
    let server = MockServer::start().await;
    server.respond_with(r#"{"Status":"Ok","Data":[]}"#);
    let tournament = tournament_against(&server);

    let query = TournamentsQuery {
        buy_in: 1,
        max_players: 9,
        prize_currency: 0,
        speed: 2,
        tournament_type: 0,
    };
    tournament.get_tournaments(&query).await.unwrap();

    let recorded = server.last_request();
    assert_eq!(recorded.path, "/api/tournaments");
    assert_eq!(
        recorded.query.as_deref(),
        Some("BuyIn=1&MaxPlayers=9&PrizeCurrency=0&Speed=2&TournamentType=0")
    );
}

#[tokio::test]
async fn test_registration_verbs_share_path() {
    let server = MockServer::start().await;
    let tournament = tournament_against(&server);

    tournament.register(7).await.unwrap();
    let recorded = server.last_request();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/api/tournaments/7/registration");
    assert!(recorded.body.is_empty());

    tournament.cancel_registration(7).await.unwrap();
    let recorded = server.last_request();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/tournaments/7/registration");
}

#[tokio::test]
async fn test_rebuy_carries_double_flag() {
    let server = MockServer::start().await;
    let tournament = tournament_against(&server);

    tournament.rebuy(7, true).await.unwrap();
    let recorded = server.last_request();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/api/tournaments/7/rebuys");
    assert_eq!(recorded.body_json().unwrap(), json!({"IsDoubleRebuy": true}));

    tournament.rebuy(7, false).await.unwrap();
    assert_eq!(
        server.last_request().body_json().unwrap(),
        json!({"IsDoubleRebuy": false})
    );
}

#[tokio::test]
async fn test_addon_puts_without_body() {
    let server = MockServer::start().await;
    let tournament = tournament_against(&server);

    tournament.addon(7).await.unwrap();

    let recorded = server.last_request();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/api/tournaments/7/addons");
    assert!(recorded.body.is_empty());
}

#[tokio::test]
async fn test_registered_tournaments_path() {
    let server = MockServer::start().await;
    server.respond_with(r#"{"Status":"Ok","Data":[]}"#);
    let tournament = tournament_against(&server);

    tournament.get_registered_tournaments().await.unwrap();

    let recorded = server.last_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/api/account/my/tournaments");
}
