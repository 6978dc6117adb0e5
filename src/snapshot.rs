use super::*;

#[derive(Debug)]
pub(crate) struct Snapshot {
  pub(crate) feed: Result<Vec<Comment>, FeedError>,
  pub(crate) greeting_text: Result<String, FeedError>,
  pub(crate) login_status: Result<LoginStatus, FeedError>,
  pub(crate) votes: Result<GameVotes, FeedError>,
}
