//! Unit tests for tournament module.

use super::*;

// ============================================================================
// Enum Wire Format Tests
// ============================================================================

#[test]
fn test_tournament_status_serializes_as_integer() {
    assert_eq!(
        serde_json::to_string(&TournamentStatus::LateRegistration).unwrap(),
        "8"
    );
    assert_eq!(serde_json::to_string(&TournamentStatus::Pending).unwrap(), "0");
}

#[test]
fn test_tournament_status_deserializes_from_integer() {
    let status: TournamentStatus = serde_json::from_str("5").unwrap();
    assert_eq!(status, TournamentStatus::Started);
}

#[test]
fn test_tournament_status_rejects_unknown_value() {
    assert!(serde_json::from_str::<TournamentStatus>("9").is_err());
}

#[test]
fn test_tournament_player_status_round_trip() {
    for status in [
        TournamentPlayerStatus::Registered,
        TournamentPlayerStatus::RegistrationCancelled,
        TournamentPlayerStatus::Playing,
        TournamentPlayerStatus::Completed,
    ] {
        let json = serde_json::to_string(&status).unwrap();
        let back: TournamentPlayerStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn test_tournament_options_contains() {
    let options = TournamentOptions(
        TournamentOptions::HAS_BUY_IN.0 | TournamentOptions::HAS_REBUY.0,
    );

    assert!(options.contains(TournamentOptions::HAS_BUY_IN));
    assert!(options.contains(TournamentOptions::HAS_REBUY));
    assert!(!options.contains(TournamentOptions::HAS_ADDON));
    assert!(options.contains(TournamentOptions::NONE));
}

#[test]
fn test_tournament_options_transparent_serde() {
    let options: TournamentOptions = serde_json::from_str("12").unwrap();

    assert_eq!(options, TournamentOptions(12));
    assert_eq!(serde_json::to_string(&options).unwrap(), "12");
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_tournaments_query_serialization_order() {
    let query = TournamentsQuery {
        buy_in: 100,
        max_players: 10,
        prize_currency: 1,
        speed: 2,
        tournament_type: 3,
    };

    assert_eq!(
        serde_urlencoded::to_string(&query).unwrap(),
        "BuyIn=100&MaxPlayers=10&PrizeCurrency=1&Speed=2&TournamentType=3"
    );
}

// ============================================================================
// DTO Tests
// ============================================================================

#[test]
fn test_lobby_tournament_item_deserialization() {
    let json = r#"{
        "TournamentId": 4,
        "Type": 1,
        "TournamentName": "Sunday Major",
        "IsRegistered": true,
        "CurrencyId": 1,
        "RegistrationStartDate": "2024-03-01T10:00:00",
        "RegistrationEndDate": "2024-03-03T10:00:00",
        "StartDate": "2024-03-03T12:00:00",
        "EndDate": "",
        "FinishDate": "",
        "JoinedPlayers": 80,
        "MinPlayers": 2,
        "MaxPlayers": 200,
        "PrizeAmount": 10000.0,
        "Status": 1,
        "PrizeCurrencyId": 1,
        "BuyInAmount": 50.0,
        "EntryMoneyAmount": 5.0,
        "IsPaused": false
    }"#;

    let item: LobbyTournamentItem = serde_json::from_str(json).unwrap();

    assert_eq!(item.tournament_id, 4);
    assert_eq!(item.tournament_type, 1);
    assert_eq!(item.status, TournamentStatus::RegistrationStarted);
    assert!(item.is_registered);
}

#[test]
fn test_player_state_definition_deserialization() {
    let json = r#"{"Status":"Ok","Data":[{"TournamentId":4,"TableId":9,"Status":5}]}"#;
    let result: ApiResult<Vec<TournamentPlayerStateDefinition>> =
        serde_json::from_str(json).unwrap();

    assert_eq!(result.data[0].table_id, 9);
    assert_eq!(result.data[0].status, TournamentStatus::Started);
}

#[test]
fn test_rebuy_request_body_shape() {
    let body = RebuyRequest {
        is_double_rebuy: true,
    };

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"IsDoubleRebuy": true}));
}
