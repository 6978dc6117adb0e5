use {
  anyhow::{Context, anyhow, ensure},
  app::App,
  auth_state::{AuthState, LoginStatus},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  feed::{Feed, FeedState},
  feed_error::FeedError,
  feed_request::FeedRequest,
  game_votes::GameVotes,
  greeting::Greeting,
  help_view::HelpView,
  moderation::ModerationGate,
  notice::Notice,
  prompt_input::{PromptInput, PromptKind},
  rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Paragraph, Tabs, Wrap},
  },
  reqwest::StatusCode,
  serde::Deserialize,
  snapshot::Snapshot,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    env,
    fmt::{self, Display},
    fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  tab::Tab,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  url::Url,
  utils::{
    first_link, markup_to_text, mask, popup_area, truncate, wrap_text,
  },
};

#[cfg(test)]
use {feed::render_feed, notice::NoticeKind};

mod app;
mod auth_state;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod config;
mod effect;
mod event;
mod feed;
mod feed_error;
mod feed_request;
mod game_votes;
mod greeting;
mod help_view;
mod logging;
mod moderation;
mod notice;
mod prompt_input;
mod snapshot;
mod state;
mod tab;
mod transient_message;
mod utils;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_MAX_COUNT: u32 = 10;

const STATUS: &str = "←/h →/l tabs • f fetch • m max count • c comment • d delete all • v vote • g greeting • r reload • o login • ? help • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading...";

const NOTICE_HINT: &str = "Press any key to continue.";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  tab     next tab

Comments:
  f       fetch comments with the current limit
  m       set the maximum number of comments and fetch
  c       leave a comment (requires login)
  d       delete all comments (asks for the moderation password)

Games:
  v       vote for a game

Page:
  g       show another greeting
  r       reload everything
  o       open the login or logout link in your browser
  ?       toggle this help
  q       quit

Prompts:
  enter   submit
  esc     cancel
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  logging::init(&Config::log_file()?).context("could not set up logging")?;

  let config = Config::load().context("could not load configuration")?;

  info!(base_url = %config.base_url, "starting portfolio client");

  let client = Client::new(&config.base_url)?;

  let state = State::new(
    config.base_url,
    config.feed_request,
    config.moderation,
    StdRng::from_entropy(),
  );

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
