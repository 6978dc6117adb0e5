use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  delete_url: Url,
  game_votes_url: Url,
  greeting_url: Url,
  listing_url: Url,
  login_status_url: Url,
}

impl Client {
  const DELETE_PATH: &str = "/delete-data";

  const GAME_VOTES_PATH: &str = "/GameDataServlet";

  const GREETING_PATH: &str = "/data";

  const LISTING_PATH: &str = "/jsonData";

  const LOGIN_STATUS_PATH: &str = "/login-status";

  pub(crate) async fn clear_feed(&self) -> Result<(), FeedError> {
    debug!(url = %self.delete_url, "clearing comments");

    let response = self.client.post(self.delete_url.clone()).send().await?;

    debug!(status = %response.status(), "clear request answered");

    Ok(())
  }

  pub(crate) async fn fetch_game_votes(&self) -> Result<GameVotes, FeedError> {
    debug!(url = %self.game_votes_url, "fetching game votes");

    let body = self
      .client
      .get(self.game_votes_url.clone())
      .send()
      .await?
      .error_for_status()?
      .bytes()
      .await?;

    Ok(serde_json::from_slice::<GameVotes>(&body)?)
  }

  pub(crate) async fn fetch_greeting_text(&self) -> Result<String, FeedError> {
    debug!(url = %self.greeting_url, "fetching greeting text");

    Ok(
      self
        .client
        .get(self.greeting_url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?,
    )
  }

  pub(crate) async fn fetch_login_status(
    &self,
  ) -> Result<LoginStatus, FeedError> {
    debug!(url = %self.login_status_url, "fetching login status");

    let response = self
      .client
      .get(self.login_status_url.clone())
      .send()
      .await?;

    let authenticated = response.status().is_success();

    Ok(LoginStatus {
      authenticated,
      fragment: response.text().await?,
    })
  }

  pub(crate) fn new(base_url: &Url) -> Result<Self> {
    let endpoint = |path: &str| {
      base_url
        .join(path)
        .with_context(|| format!("could not build endpoint for `{path}`"))
    };

    Ok(Self {
      client: reqwest::Client::new(),
      delete_url: endpoint(Self::DELETE_PATH)?,
      game_votes_url: endpoint(Self::GAME_VOTES_PATH)?,
      greeting_url: endpoint(Self::GREETING_PATH)?,
      listing_url: endpoint(Self::LISTING_PATH)?,
      login_status_url: endpoint(Self::LOGIN_STATUS_PATH)?,
    })
  }

  pub(crate) async fn reload(&self, request: &FeedRequest) -> Snapshot {
    let (feed, greeting_text, login_status, votes) = futures::join!(
      self.request_feed(request),
      self.fetch_greeting_text(),
      self.fetch_login_status(),
      self.fetch_game_votes(),
    );

    Snapshot {
      feed,
      greeting_text,
      login_status,
      votes,
    }
  }

  pub(crate) async fn request_feed(
    &self,
    request: &FeedRequest,
  ) -> Result<Vec<Comment>, FeedError> {
    debug!(url = %self.listing_url, %request, "requesting comments");

    let body = self
      .client
      .get(self.listing_url.clone())
      .query(&request.query())
      .send()
      .await?
      .error_for_status()?
      .bytes()
      .await?;

    Ok(serde_json::from_slice::<Vec<Comment>>(&body)?)
  }

  pub(crate) async fn submit_comment(
    &self,
    message: &str,
  ) -> Result<(), FeedError> {
    debug!(url = %self.listing_url, "submitting comment");

    self
      .client
      .post(self.listing_url.clone())
      .form(&[("userComment", message)])
      .send()
      .await?;

    Ok(())
  }

  pub(crate) async fn submit_vote(&self, game: &str) -> Result<(), FeedError> {
    debug!(url = %self.game_votes_url, game, "submitting vote");

    self
      .client
      .post(self.game_votes_url.clone())
      .form(&[("game", game)])
      .send()
      .await?;

    Ok(())
  }
}
