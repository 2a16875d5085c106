use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodflow::{
    cli, config, error,
    selection::{Mood, Selection, TimeOfDay},
    types::PkceState,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify
    Auth(AuthOptions),

    /// Finish a login from a redirect URL, or use an access token directly
    Login(LoginOptions),

    /// Disconnect from Spotify
    Logout,

    /// Show the connection status
    Status,

    /// List the times of day and moods to choose from
    Options(SelectionOptions),

    /// Show the playlist for a time of day and mood
    Playlist(PlaylistOptions),

    /// Search Spotify for tracks or playlists
    Search(SearchOptions),

    /// Start or resume playback
    Play(PlayOptions),

    /// Pause playback
    Pause(DeviceOptions),

    /// List playback devices
    Devices,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Use the implicit grant instead of PKCE; finish with `login --redirect-url`
    #[clap(long)]
    pub implicit: bool,

    /// Don't start the local callback server; finish with `login --redirect-url`
    #[clap(long)]
    pub no_callback: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// The address Spotify redirected the browser to
    #[clap(long, conflicts_with = "token")]
    pub redirect_url: Option<String>,

    /// An access token obtained elsewhere
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SelectionOptions {
    /// Time of day
    #[clap(long, value_enum, default_value_t = TimeOfDay::Morning)]
    pub time: TimeOfDay,

    /// Mood
    #[clap(long, value_enum, default_value_t = Mood::Optimistic)]
    pub mood: Mood,
}

impl SelectionOptions {
    fn selection(&self) -> Selection {
        Selection::new(self.time, self.mood)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    #[clap(flatten)]
    pub selection: SelectionOptions,

    /// Use the built-in playlists even when connected
    #[clap(long)]
    pub offline: bool,

    /// Start playing the playlist on Spotify
    #[clap(long)]
    pub play: bool,

    /// Playback device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search terms
    pub query: String,

    /// What to search for
    #[clap(long = "type", value_enum, default_value = "track")]
    pub kind: cli::SearchKind,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Playlist or album URI to play
    #[clap(long, conflicts_with = "uri")]
    pub context: Option<String>,

    /// Track URI to play; can be repeated
    #[clap(long)]
    pub uri: Vec<String>,

    /// Playback device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeviceOptions {
    /// Playback device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => {
            let oauth_state: Arc<Mutex<Option<PkceState>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_state), opt.implicit, opt.no_callback).await;
        }
        Command::Login(opt) => cli::login(opt.redirect_url, opt.token).await,
        Command::Logout => cli::logout().await,
        Command::Status => cli::status().await,
        Command::Options(opt) => cli::options(opt.selection()),
        Command::Playlist(opt) => {
            cli::playlist(opt.selection.selection(), opt.offline, opt.play, opt.device).await
        }
        Command::Search(opt) => cli::search(opt.query, opt.kind).await,
        Command::Play(opt) => cli::play(opt.context, opt.uri, opt.device).await,
        Command::Pause(opt) => cli::pause(opt.device).await,
        Command::Devices => cli::devices().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
