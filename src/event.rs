use super::*;

pub(crate) enum Event {
  CommentSubmitted { result: Result<(), FeedError> },
  Feed { result: Result<Vec<Comment>, FeedError> },
  FeedCleared { result: Result<(), FeedError> },
  Reloaded { snapshot: Snapshot },
  VoteSubmitted { result: Result<(), FeedError> },
}
