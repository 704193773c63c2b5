//! Console output for the CLI. `format_*` functions are pure; the printing
//! helpers only write their result.

use crate::model::game::GameActivityRecord;

/// Shown when nothing was played in the lookback window.
pub const NO_RECENT_GAMES: &str = "No games played in the last two weeks.";

/// Which playtime column a table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaytimeKind {
    /// Lifetime playtime.
    Total,
    /// Playtime over the last two weeks.
    #[default]
    Recent,
}

impl PlaytimeKind {
    /// Minutes of this kind for `record`.
    pub fn minutes(self, record: &GameActivityRecord) -> u64 {
        match self {
            Self::Total => record.total_playtime_minutes,
            Self::Recent => record.recent_playtime_minutes,
        }
    }
}

/// `"{h}{sep}{mm:02}{unit}"`, shared by the summary and table formats.
fn clock(minutes: u64, sep: &str, unit: &str) -> String {
    format!("{}{sep}{:02}{unit}", minutes / 60, minutes % 60)
}

/// Three-line overview of recent activity. `records` is expected sorted by
/// recent playtime, so its first entry is the most played.
pub fn format_summary(records: &[GameActivityRecord]) -> String {
    let Some(top) = records.first() else {
        return NO_RECENT_GAMES.to_owned();
    };
    let total: u64 = records.iter().map(|g| g.recent_playtime_minutes).sum();
    format!(
        "{} games played in the last two weeks\nTotal time: {}\nMost played: {}\n",
        records.len(),
        clock(total, "h ", "min"),
        top.display_name
    )
}

/// Two-column table of names and playtimes, times right-aligned.
pub fn format_games_table(title: &str, records: &[GameActivityRecord], kind: PlaytimeKind) -> String {
    const NAME_HEADER: &str = "Name";
    const TIME_HEADER: &str = "Playtime";

    let times: Vec<String> = records
        .iter()
        .map(|g| clock(kind.minutes(g), " h ", " min"))
        .collect();
    let name_w = records
        .iter()
        .map(|g| g.display_name.chars().count())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(0);
    let time_w = times
        .iter()
        .map(|t| t.chars().count())
        .chain([TIME_HEADER.len()])
        .max()
        .unwrap_or(0);

    let mut out = format!("{title}\n");
    out.push_str(&format!("{NAME_HEADER:<name_w$}  {TIME_HEADER:>time_w$}\n"));
    out.push_str(&format!("{}  {}\n", "-".repeat(name_w), "-".repeat(time_w)));
    for (g, t) in records.iter().zip(&times) {
        out.push_str(&format!("{:<name_w$}  {t:>time_w$}\n", g.display_name));
    }
    out
}

/// Error line for the console.
pub fn format_error(message: &str) -> String {
    format!("error: {message}")
}

/// Success line for the console.
pub fn format_success(message: &str) -> String {
    format!("done: {message}")
}

/// Print [`format_summary`] to stdout.
pub fn summary(records: &[GameActivityRecord]) {
    println!("{}", format_summary(records));
}

/// Print [`format_games_table`] to stdout.
pub fn games_table(title: &str, records: &[GameActivityRecord], kind: PlaytimeKind) {
    println!("{}", format_games_table(title, records, kind));
}

/// Print [`format_error`] to stderr.
pub fn error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print [`format_success`] to stdout.
pub fn success(message: &str) {
    println!("{}", format_success(message));
}

#[cfg(test)]
#[path = "../tests/unit/display.rs"]
mod tests;
