//! Unit tests for game module.

use super::*;

// ============================================================================
// TablesQuery Tests
// ============================================================================

#[test]
fn test_tables_query_omits_absent_filters() {
    let query = TablesQuery {
        bet_levels: 2,
        full_tables: None,
        limit_type: 1,
        max_players: 10,
        money_type: 0,
        private_tables: None,
        show_tournament_tables: false,
    };

    assert_eq!(
        serde_urlencoded::to_string(&query).unwrap(),
        "betLevels=2&limitType=1&maxPlayers=10&moneyType=0&showTournamentTables=false"
    );
}

#[test]
fn test_tables_query_includes_present_filters() {
    let query = TablesQuery {
        bet_levels: 2,
        full_tables: Some(true),
        limit_type: 1,
        max_players: 10,
        money_type: 0,
        private_tables: Some(3),
        show_tournament_tables: true,
    };

    assert_eq!(
        serde_urlencoded::to_string(&query).unwrap(),
        "betLevels=2&fullTables=true&limitType=1&maxPlayers=10&moneyType=0&privateTables=3&showTournamentTables=true"
    );
}

// ============================================================================
// DTO Tests
// ============================================================================

#[test]
fn test_lobby_table_item_deserialization() {
    let json = r#"{
        "TableId": 12,
        "TableName": "Emerald",
        "SmallBlind": 1.0,
        "BigBlind": 2.0,
        "JoinedPlayers": 4,
        "MaxPlayers": 9,
        "PotLimitType": 2,
        "AveragePotSize": 34.5,
        "HandsPerHour": 60.0,
        "CurrencyId": 1,
        "SeatMask": 15
    }"#;

    let item: LobbyTableItem = serde_json::from_str(json).unwrap();

    assert_eq!(item.table_id, 12);
    assert_eq!(item.table_name, "Emerald");
    assert_eq!(item.big_blind, 2.0);
    assert_eq!(item.seat_mask, 15);
}

#[test]
fn test_game_table_model_tournament_id_optional() {
    let json = r#"{
        "TableId": 12,
        "TableName": "Emerald",
        "SmallBlind": 1.0,
        "BigBlind": 2.0,
        "AveragePotSize": 34.5,
        "CurrencyId": 1,
        "HandsPerHour": 60.0,
        "JoinedPlayers": 4,
        "MaxPlayers": 9,
        "PotLimitType": 2
    }"#;

    let model: GameTableModel = serde_json::from_str(json).unwrap();

    assert!(model.tournament_id.is_none());
}

#[test]
fn test_sit_response_deserialization() {
    let json = r#"{"Status":"Ok","MinimalAmount":40.0}"#;
    let response: SitResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.status, "Ok");
    assert_eq!(response.minimal_amount, 40.0);
}

// ============================================================================
// Request Body Tests
// ============================================================================

#[test]
fn test_sit_request_body_shape() {
    let body = SitRequest {
        amount: 100.0,
        ticket_code: "VIP",
    };

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"Amount": 100.0, "TicketCode": "VIP"}));
}

#[test]
fn test_amount_request_body_shape() {
    let body = AmountRequest { amount: 50.0 };

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"Amount": 50.0}));
}
