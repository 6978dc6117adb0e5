use super::*;

pub(crate) fn init(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| {
      format!("could not create log directory `{}`", parent.display())
    })?;
  }

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file `{}`", path.display()))?;

  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_target(true)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("could not install logger: {error}"))?;

  Ok(())
}
