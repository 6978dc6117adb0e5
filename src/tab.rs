#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Tab {
  Comments,
  Games,
  #[default]
  Home,
}

impl Tab {
  pub(crate) const ALL: [Tab; 3] = [Tab::Home, Tab::Comments, Tab::Games];

  pub(crate) fn index(self) -> usize {
    Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Comments => "comments",
      Self::Games => "games",
      Self::Home => "home",
    }
  }

  pub(crate) fn next(self) -> Self {
    Self::ALL[(self.index() + 1) % Self::ALL.len()]
  }

  pub(crate) fn previous(self) -> Self {
    let count = Self::ALL.len();
    Self::ALL[(self.index() + count - 1) % count]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tabs_wrap_in_both_directions() {
    assert_eq!(Tab::Home.next(), Tab::Comments);
    assert_eq!(Tab::Games.next(), Tab::Home);
    assert_eq!(Tab::Home.previous(), Tab::Games);
    assert_eq!(Tab::Comments.previous(), Tab::Home);
  }
}
