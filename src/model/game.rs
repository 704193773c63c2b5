/// Maximum characters of a game name drawn on the story.
pub const NAME_BUDGET: usize = 35;

const ELLIPSIS: &str = "...";

/// One game from a user's library together with their playtime on it.
///
/// Field names on the wire follow the Steam `GetOwnedGames` payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameActivityRecord {
    /// Steam application id; keys the cover art on the CDN.
    #[serde(rename = "appid")]
    pub app_id: u64,
    /// Store name. Not unique across records.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Lifetime playtime in minutes.
    #[serde(rename = "playtime_forever", default)]
    pub total_playtime_minutes: u64,
    /// Playtime over the trailing 14 days, in minutes.
    #[serde(rename = "playtime_2weeks", default)]
    pub recent_playtime_minutes: u64,
    /// Icon image hash on the Steam media server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    /// Logo image hash on the Steam media server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_logo_url: Option<String>,
}

impl GameActivityRecord {
    /// Record without icon/logo hashes.
    pub fn new(
        app_id: u64,
        display_name: impl Into<String>,
        total_playtime_minutes: u64,
        recent_playtime_minutes: u64,
    ) -> Self {
        Self {
            app_id,
            display_name: display_name.into(),
            total_playtime_minutes,
            recent_playtime_minutes,
            img_icon_url: None,
            img_logo_url: None,
        }
    }

    /// Lifetime playtime in hours.
    pub fn total_hours(&self) -> f64 {
        self.total_playtime_minutes as f64 / 60.0
    }

    /// Two-week playtime in hours.
    pub fn recent_hours(&self) -> f64 {
        self.recent_playtime_minutes as f64 / 60.0
    }

    /// Whether the game has any playtime in the last two weeks.
    pub fn played_recently(&self) -> bool {
        self.recent_playtime_minutes > 0
    }
}

/// Badge text for a duration: `"{h}h {m}min"`, or `"{m}min"` under an hour.
pub fn format_playtime(minutes: u64) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{h}h {m}min")
    } else {
        format!("{m}min")
    }
}

/// Cut `name` to `budget` characters, ending in `"..."` when shortened.
///
/// Counts Unicode scalar values so multi-byte names never split mid-character.
pub fn truncate_name(name: &str, budget: usize) -> String {
    if name.chars().count() <= budget {
        return name.to_owned();
    }
    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut out: String = name.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Games with recent playtime, most recent playtime first. Ties keep input order.
pub fn recently_played(games: Vec<GameActivityRecord>) -> Vec<GameActivityRecord> {
    let mut out: Vec<_> = games.into_iter().filter(|g| g.played_recently()).collect();
    out.sort_by(|a, b| b.recent_playtime_minutes.cmp(&a.recent_playtime_minutes));
    out
}

/// Games ever played, highest lifetime playtime first. Ties keep input order.
pub fn played(games: Vec<GameActivityRecord>) -> Vec<GameActivityRecord> {
    let mut out: Vec<_> = games
        .into_iter()
        .filter(|g| g.total_playtime_minutes > 0)
        .collect();
    out.sort_by(|a, b| b.total_playtime_minutes.cmp(&a.total_playtime_minutes));
    out
}

/// Record with the largest lifetime playtime; the first one wins a tie.
pub fn most_played_by_total(games: &[GameActivityRecord]) -> Option<&GameActivityRecord> {
    games.iter().reduce(|best, g| {
        if g.total_playtime_minutes > best.total_playtime_minutes {
            g
        } else {
            best
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/model/game.rs"]
mod tests;
