use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FeedRequest {
  max_count: String,
}

impl FeedRequest {
  pub(crate) fn max_count(&self) -> &str {
    &self.max_count
  }

  pub(crate) fn new(max_count: u32) -> Self {
    Self {
      max_count: max_count.to_string(),
    }
  }

  pub(crate) fn query(&self) -> [(&'static str, &str); 1] {
    [("maxCount", self.max_count.as_str())]
  }

  pub(crate) fn raw(input: &str) -> Self {
    Self {
      max_count: input.trim().to_string(),
    }
  }
}

impl Display for FeedRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "maxCount={}", self.max_count)
  }
}
