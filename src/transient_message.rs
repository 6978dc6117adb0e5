use super::*;

#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  fallback: String,
  text: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(4);

  pub(crate) fn fallback(&self) -> &str {
    &self.fallback
  }

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(text: String, fallback: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      fallback,
      text,
    }
  }

  pub(crate) fn set_fallback(&mut self, fallback: &str) {
    fallback.clone_into(&mut self.fallback);
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
