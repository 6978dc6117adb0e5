use super::*;

const DEFAULT_MODERATION_SECRET: &str = "portfolio";

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) base_url: Url,
  pub(crate) feed_request: FeedRequest,
  pub(crate) moderation: ModerationGate,
}

impl Config {
  fn base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
      .with_context(|| format!("invalid PORTFOLIO_BASE_URL `{value}`"))?;

    ensure!(
      matches!(url.scheme(), "http" | "https"),
      "PORTFOLIO_BASE_URL must use http or https, got `{}`",
      url.scheme()
    );

    Ok(url)
  }

  pub(crate) fn from_vars<F>(var: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url =
      Self::base_url(&var("PORTFOLIO_BASE_URL").unwrap_or_else(|| {
        info!("PORTFOLIO_BASE_URL not set, using default: {DEFAULT_BASE_URL}");
        DEFAULT_BASE_URL.to_string()
      }))?;

    let feed_request = var("PORTFOLIO_MAX_COUNT").map_or_else(
      || {
        info!("PORTFOLIO_MAX_COUNT not set, using default: {DEFAULT_MAX_COUNT}");
        FeedRequest::new(DEFAULT_MAX_COUNT)
      },
      |value| FeedRequest::raw(&value),
    );

    let secret = if let Some(path) = var("PORTFOLIO_MODERATION_SECRET_FILE") {
      fs::read_to_string(&path)
        .with_context(|| format!("could not read moderation secret `{path}`"))?
        .trim()
        .to_string()
    } else if let Some(secret) = var("PORTFOLIO_MODERATION_SECRET") {
      secret
    } else {
      warn!("PORTFOLIO_MODERATION_SECRET not set, using placeholder secret");
      DEFAULT_MODERATION_SECRET.to_string()
    };

    Ok(Self {
      base_url,
      feed_request,
      moderation: ModerationGate::new(secret),
    })
  }

  pub(crate) fn load() -> Result<Self> {
    Self::from_vars(|key| env::var(key).ok())
  }

  pub(crate) fn log_file() -> Result<PathBuf> {
    Self::log_file_from_vars(|key| env::var(key).ok())
  }

  pub(crate) fn log_file_from_vars<F>(var: F) -> Result<PathBuf>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(path) = var("PORTFOLIO_LOG_FILE") {
      return Ok(PathBuf::from(path));
    }

    let state_dir = if let Some(dir) = var("XDG_STATE_HOME") {
      PathBuf::from(dir)
    } else if let Some(home) = var("HOME") {
      PathBuf::from(home).join(".local").join("state")
    } else {
      env::current_dir()?.join(".local").join("state")
    };

    Ok(state_dir.join("portfolio").join("portfolio.log"))
  }
}
