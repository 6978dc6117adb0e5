use super::*;

#[derive(Debug, Error)]
pub(crate) enum FeedError {
  #[error("could not decode response: {0}")]
  DecodeFailure(String),
  #[error("could not reach server: {0}")]
  NetworkFailure(String),
  #[error("server responded with {status}")]
  ServiceFailure { status: StatusCode },
}

impl From<reqwest::Error> for FeedError {
  fn from(error: reqwest::Error) -> Self {
    if error.is_decode() {
      Self::DecodeFailure(error.to_string())
    } else if let Some(status) = error.status() {
      Self::ServiceFailure { status }
    } else {
      Self::NetworkFailure(error.to_string())
    }
  }
}

impl From<serde_json::Error> for FeedError {
  fn from(error: serde_json::Error) -> Self {
    Self::DecodeFailure(error.to_string())
  }
}
