use super::*;

#[test]
fn parses_games_list() {
    let body = r#"{"response": {"game_count": 2, "games": [
        {"appid": 620, "name": "Portal 2", "playtime_forever": 900, "playtime_2weeks": 45,
         "img_icon_url": "abc"},
        {"appid": 70, "name": "Half-Life", "playtime_forever": 12}
    ]}}"#;
    let games = parse_owned_games(body).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].app_id, 620);
    assert_eq!(games[0].recent_playtime_minutes, 45);
    assert_eq!(games[0].img_icon_url.as_deref(), Some("abc"));
    assert_eq!(games[1].recent_playtime_minutes, 0);
}

#[test]
fn missing_games_is_empty() {
    assert!(parse_owned_games(r#"{"response": {}}"#).unwrap().is_empty());
}

#[test]
fn missing_response_is_api_error() {
    let err = parse_owned_games(r#"{"error": "nope"}"#).unwrap_err();
    assert!(matches!(err, StoryError::Api(_)));
    assert!(err.to_string().contains("unexpected API response format"));
}

#[test]
fn game_without_name_is_api_error() {
    let err = parse_owned_games(r#"{"response": {"games": [{"appid": 1}]}}"#).unwrap_err();
    assert!(matches!(err, StoryError::Api(_)));
}

#[test]
fn default_query_includes_appinfo_only() {
    let q = OwnedGamesQuery::default();
    assert!(q.include_appinfo);
    assert!(!q.include_played_free_games);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let c = SteamClient::with_base_url("k", "http://127.0.0.1:1/").unwrap();
    assert_eq!(c.base_url, "http://127.0.0.1:1");
}
