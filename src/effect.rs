use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  ClearFeed,
  FetchFeed { request: FeedRequest },
  OpenUrl { url: String },
  Reload { request: FeedRequest },
  SubmitComment { message: String },
  SubmitVote { game: String },
}
