use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Comment {
  #[serde(rename = "userEmail", alias = "authorIdentifier", alias = "author")]
  pub(crate) author: String,
  pub(crate) message: String,
}

impl Comment {
  #[cfg(test)]
  pub(crate) fn new(author: &str, message: &str) -> Self {
    Self {
      author: author.to_string(),
      message: message.to_string(),
    }
  }
}
