use super::*;

/// Client-side check in front of the delete-all action.
///
/// This is a UI gate, not access control: the secret ships with the client
/// and the delete endpoint itself accepts unauthenticated requests.
#[derive(Clone)]
pub(crate) struct ModerationGate {
  secret: String,
}

impl ModerationGate {
  pub(crate) fn admits(&self, supplied: &str) -> bool {
    supplied == self.secret
  }

  pub(crate) fn new(secret: impl Into<String>) -> Self {
    Self {
      secret: secret.into(),
    }
  }
}

impl fmt::Debug for ModerationGate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ModerationGate")
      .field("secret", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn admits_only_exact_secret() {
    let gate = ModerationGate::new("hunter2");

    assert!(gate.admits("hunter2"));
    assert!(!gate.admits("hunter"));
    assert!(!gate.admits("hunter2 "));
    assert!(!gate.admits(""));
  }

  #[test]
  fn debug_output_hides_secret() {
    let gate = ModerationGate::new("hunter2");

    assert!(!format!("{gate:?}").contains("hunter2"));
  }
}
