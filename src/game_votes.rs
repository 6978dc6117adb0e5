use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct GameVotes {
  tallies: BTreeMap<String, u64>,
}

impl GameVotes {
  pub(crate) fn bars(&self) -> Vec<(&str, u64)> {
    self
      .tallies
      .iter()
      .map(|(game, count)| (game.as_str(), *count))
      .collect()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.tallies.is_empty()
  }

  pub(crate) fn leader(&self) -> Option<(&str, u64)> {
    self
      .tallies
      .iter()
      .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
      .map(|(game, count)| (game.as_str(), *count))
  }

  pub(crate) fn total(&self) -> u64 {
    self.tallies.values().sum()
  }
}
