use std::time::Duration;

use reqwest::blocking::Client;

use crate::foundation::error::{StoryError, StoryResult};
use crate::model::game::{self, GameActivityRecord};

/// Public Steam Web API host.
pub const STEAM_API_BASE: &str = "https://api.steampowered.com";

/// Per-request timeout for Steam Web API calls.
pub const API_TIMEOUT: Duration = Duration::from_secs(30);

const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v2/";
const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v1/";

/// Flags forwarded to `GetOwnedGames`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnedGamesQuery {
    /// Include free-to-play games the user has launched.
    pub include_played_free_games: bool,
    /// Include names and image hashes.
    pub include_appinfo: bool,
}

impl Default for OwnedGamesQuery {
    fn default() -> Self {
        Self {
            include_played_free_games: false,
            include_appinfo: true,
        }
    }
}

/// Blocking client for the few Steam Web API endpoints a story needs.
#[derive(Debug, Clone)]
pub struct SteamClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    /// Client for the public Steam Web API.
    pub fn new(api_key: impl Into<String>) -> StoryResult<Self> {
        Self::with_base_url(api_key, STEAM_API_BASE)
    }

    /// Client talking to another host (a mirror or a local test server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> StoryResult<Self> {
        let client = Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| StoryError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    fn get_text(&self, path: &str, query: &[(&str, &str)], what: &str) -> StoryResult<String> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "steam api request");
        let res = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .and_then(|r| r.error_for_status())
            // The request URL carries the API key.
            .map_err(|e| StoryError::api(format!("failed to get {what}: {}", e.without_url())))?;
        res.text().map_err(|e| {
            StoryError::api(format!("failed to read {what} body: {}", e.without_url()))
        })
    }

    /// Raw `GetPlayerSummaries` payload for one Steam id.
    #[tracing::instrument(skip(self))]
    pub fn player_summaries(&self, steam_id: &str) -> StoryResult<serde_json::Value> {
        let body = self.get_text(
            PLAYER_SUMMARIES_PATH,
            &[("steamids", steam_id)],
            "player summaries",
        )?;
        serde_json::from_str(&body)
            .map_err(|e| StoryError::api(format!("failed to get player summaries: {e}")))
    }

    /// Every game in the user's library.
    #[tracing::instrument(skip(self))]
    pub fn owned_games(
        &self,
        steam_id: &str,
        query: OwnedGamesQuery,
    ) -> StoryResult<Vec<GameActivityRecord>> {
        let body = self.get_text(
            OWNED_GAMES_PATH,
            &[
                ("steamid", steam_id),
                (
                    "include_played_free_games",
                    bool_param(query.include_played_free_games),
                ),
                ("include_appinfo", bool_param(query.include_appinfo)),
            ],
            "owned games",
        )?;
        let games = parse_owned_games(&body)?;
        tracing::info!(count = games.len(), "owned games fetched");
        Ok(games)
    }

    /// Games with lifetime playtime, highest first.
    pub fn played_games(
        &self,
        steam_id: &str,
        query: OwnedGamesQuery,
    ) -> StoryResult<Vec<GameActivityRecord>> {
        Ok(game::played(self.owned_games(steam_id, query)?))
    }

    /// Games played in the last two weeks, most recent playtime first.
    pub fn recently_played_games(
        &self,
        steam_id: &str,
        query: OwnedGamesQuery,
    ) -> StoryResult<Vec<GameActivityRecord>> {
        Ok(game::recently_played(self.owned_games(steam_id, query)?))
    }
}

fn bool_param(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

#[derive(serde::Deserialize)]
struct OwnedGamesEnvelope {
    response: OwnedGamesResponse,
}

#[derive(serde::Deserialize)]
struct OwnedGamesResponse {
    #[serde(default)]
    games: Vec<GameActivityRecord>,
}

/// Parse a `GetOwnedGames` body. A body without `response` is an error; a
/// response without `games` (private profile, empty library) is an empty list.
pub fn parse_owned_games(body: &str) -> StoryResult<Vec<GameActivityRecord>> {
    let envelope: OwnedGamesEnvelope = serde_json::from_str(body)
        .map_err(|e| StoryError::api(format!("unexpected API response format: {e}")))?;
    Ok(envelope.response.games)
}

#[cfg(test)]
#[path = "../../tests/unit/source/steam.rs"]
mod tests;
