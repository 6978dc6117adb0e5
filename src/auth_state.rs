use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LoginStatus {
  pub(crate) authenticated: bool,
  pub(crate) fragment: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum AuthState {
  SignedIn {
    fragment: String,
  },
  SignedOut {
    fragment: String,
  },
  #[default]
  Unknown,
}

impl AuthState {
  fn fragment(&self) -> Option<&str> {
    match self {
      Self::SignedIn { fragment } | Self::SignedOut { fragment } => {
        Some(fragment)
      }
      Self::Unknown => None,
    }
  }

  pub(crate) fn identity(&self) -> String {
    self
      .fragment()
      .map(markup_to_text)
      .filter(|text| !text.is_empty())
      .unwrap_or_else(|| match self {
        Self::SignedIn { .. } => "Signed in".to_string(),
        Self::SignedOut { .. } => "Signed out".to_string(),
        Self::Unknown => "Checking login status...".to_string(),
      })
  }

  pub(crate) fn is_signed_in(&self) -> bool {
    matches!(self, Self::SignedIn { .. })
  }

  pub(crate) fn link(&self) -> Option<String> {
    self.fragment().and_then(first_link)
  }
}

impl From<LoginStatus> for AuthState {
  fn from(status: LoginStatus) -> Self {
    if status.authenticated {
      Self::SignedIn {
        fragment: status.fragment,
      }
    } else {
      Self::SignedOut {
        fragment: status.fragment,
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_code_decides_sign_in() {
    let signed_in = AuthState::from(LoginStatus {
      authenticated: true,
      fragment: "<p>Hello a@x.com</p>".to_string(),
    });

    let signed_out = AuthState::from(LoginStatus {
      authenticated: false,
      fragment: String::new(),
    });

    assert!(signed_in.is_signed_in());
    assert!(!signed_out.is_signed_in());
    assert!(!AuthState::Unknown.is_signed_in());
  }

  #[test]
  fn identity_falls_back_when_fragment_is_empty() {
    let state = AuthState::SignedOut {
      fragment: "  ".to_string(),
    };

    assert_eq!(state.identity(), "Signed out");
    assert_eq!(AuthState::Unknown.identity(), "Checking login status...");
  }

  #[test]
  fn identity_renders_fragment_as_text() {
    let state = AuthState::SignedIn {
      fragment: "<p>Hello a@x.com</p>".to_string(),
    };

    assert_eq!(state.identity(), "Hello a@x.com");
  }

  #[test]
  fn link_comes_from_fragment() {
    let state = AuthState::SignedOut {
      fragment: r#"<p>Login <a href="/_ah/login?continue=%2F">here</a>.</p>"#
        .to_string(),
    };

    assert_eq!(state.link().as_deref(), Some("/_ah/login?continue=%2F"));
    assert_eq!(AuthState::Unknown.link(), None);
  }
}
