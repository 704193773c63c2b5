use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use steam_wrapped::display::{self, PlaytimeKind};
use steam_wrapped::{
    FontSet, HttpCoverArt, OwnedGamesQuery, SteamClient, SteamCredentials, StoryConfig,
    StoryRenderer,
};

const TABLE_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "steam-wrapped", version, about = "Render a two-week Steam playtime story image")]
struct Cli {
    /// Steam Web API key.
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// 64-bit Steam id of the user.
    #[arg(long, env = "STEAM_USER_ID")]
    user_id: Option<String>,

    /// Output PNG path.
    #[arg(long, default_value = "steam_story.png")]
    out: PathBuf,

    #[arg(long, env = "IMAGE_WIDTH", default_value_t = 1080)]
    width: u32,

    #[arg(long, env = "IMAGE_HEIGHT", default_value_t = 1920)]
    height: u32,

    /// Locale for month names (e.g. fr_FR, en_US).
    #[arg(long, env = "LOCALE", default_value = "fr_FR")]
    locale: String,

    #[arg(long, default_value = "fonts/Montserrat-Bold.ttf")]
    title_font: PathBuf,

    #[arg(long, default_value = "fonts/Montserrat-Regular.ttf")]
    body_font: PathBuf,

    /// Logo drawn in the top-left corner; skipped if the file is missing.
    #[arg(long, default_value = "imgs/steam_icon.png")]
    logo: PathBuf,

    /// Also count free-to-play games the user has played.
    #[arg(long, default_value_t = false)]
    include_free: bool,

    /// Log filter (`info`, `debug`, `steam_wrapped=trace`, ...).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    // A `.env` in the working directory (or a parent) feeds the `env` fallbacks
    // below; variables already set in the process win.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "steam-wrapped failed");
            display::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let credentials = SteamCredentials::new(cli.api_key, cli.user_id)?;
    let config = StoryConfig {
        width: cli.width,
        height: cli.height,
        locale: cli.locale,
        title_font: cli.title_font,
        body_font: cli.body_font,
        logo: Some(cli.logo),
        ..StoryConfig::default()
    };
    config.validate()?;
    config.check_fonts()?;
    let fonts = FontSet::load(&config.title_font, &config.body_font)?;

    tracing::info!(user = %credentials.user_id, "fetching recently played games");
    let steam = SteamClient::new(credentials.api_key)?;
    let query = OwnedGamesQuery {
        include_played_free_games: cli.include_free,
        ..OwnedGamesQuery::default()
    };
    let games = steam.recently_played_games(&credentials.user_id, query)?;
    if games.is_empty() {
        display::error(display::NO_RECENT_GAMES);
        return Ok(());
    }

    display::summary(&games);
    display::games_table(
        "Recent games (last two weeks)",
        &games[..games.len().min(TABLE_ROWS)],
        PlaytimeKind::Recent,
    );

    let mut renderer = StoryRenderer::new(config, fonts, Box::new(HttpCoverArt::new()?))?;
    let today = chrono::Local::now().date_naive();
    let path = renderer.render(&games, today, &cli.out)?;
    display::success(&format!("story image written to {}", path.display()));
    Ok(())
}
