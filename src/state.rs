use super::*;

pub(crate) struct State {
  active_tab: Tab,
  auth: AuthState,
  base_url: Url,
  deferred_report: Option<String>,
  feed: Feed,
  feed_request: FeedRequest,
  greeting: Greeting,
  help: HelpView,
  message: String,
  moderation: ModerationGate,
  notice: Option<Notice>,
  pending_effects: Vec<Effect>,
  prompt: Option<PromptInput>,
  rng: StdRng,
  transient_message: Option<TransientMessage>,
  votes: GameVotes,
}

impl State {
  pub(crate) fn active_tab(&self) -> Tab {
    self.active_tab
  }

  pub(crate) fn auth(&self) -> &AuthState {
    &self.auth
  }

  fn begin_reload(&mut self) {
    self.feed.begin();
    self.greeting.reroll(&mut self.rng);

    if !self.status_is_covered() {
      self.message = LOADING_STATUS.into();
    }

    self.pending_effects.push(Effect::Reload {
      request: self.feed_request.clone(),
    });
  }

  fn cancel_prompt(&mut self) {
    if let Some(prompt) = self.prompt.take() {
      self.message = prompt.message_backup;
    }

    self.flush_report();
  }

  fn confirm_and_clear(&mut self, supplied: &str) {
    if self.moderation.admits(supplied) {
      info!("moderation secret accepted, clearing comments");

      self.feed.begin();
      self.pending_effects.push(Effect::ClearFeed);
      self.notice = Some(Notice::success("All comments deleted."));
    } else {
      info!("moderation secret rejected");

      self.notice = Some(Notice::failure("Wrong password. Nothing deleted."));
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => {
        self.help.hide(&mut self.message);
        self.flush_report();
      }
      Command::DismissNotice => self.notice = None,
      Command::StartPrompt(kind) => self.start_prompt(kind),
      Command::CancelPrompt => self.cancel_prompt(),
      Command::SubmitPrompt => self.submit_prompt(),
      Command::SwitchTabLeft => self.active_tab = self.active_tab.previous(),
      Command::SwitchTabRight => self.active_tab = self.active_tab.next(),
      Command::FetchFeed => self.request_feed(),
      Command::Reload => self.begin_reload(),
      Command::NewGreeting => self.greeting.reroll(&mut self.rng),
      Command::OpenLoginLink => self.open_login_link(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn feed(&self) -> &Feed {
    &self.feed
  }

  pub(crate) fn feed_request(&self) -> &FeedRequest {
    &self.feed_request
  }

  fn flush_report(&mut self) {
    if self.status_is_covered() {
      return;
    }

    if let Some(message) = self.deferred_report.take() {
      self.set_transient_message(message);
    }
  }

  pub(crate) fn greeting(&self) -> &Greeting {
    &self.greeting
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Feed { result } => self.settle_feed(result),
      Event::FeedCleared { result } => {
        self.feed.settle();
        self.retire_loading_status();

        match result {
          Ok(()) => self.begin_reload(),
          Err(error) => {
            warn!("could not clear comments: {error}");
            self.report(format!("Could not delete comments: {error}"));
          }
        }
      }
      Event::Reloaded { snapshot } => {
        let Snapshot {
          feed,
          greeting_text,
          login_status,
          votes,
        } = snapshot;

        match login_status {
          Ok(status) => self.auth = AuthState::from(status),
          Err(error) => warn!("could not load login status: {error}"),
        }

        match greeting_text {
          Ok(text) => self.greeting.set_text(text),
          Err(error) => warn!("could not load greeting text: {error}"),
        }

        match votes {
          Ok(votes) => self.votes = votes,
          Err(error) => warn!("could not load game votes: {error}"),
        }

        self.settle_feed(feed);
      }
      Event::CommentSubmitted { result } => match result {
        Ok(()) => self.begin_reload(),
        Err(error) => {
          warn!("could not submit comment: {error}");
          self.report(format!("Could not post comment: {error}"));
        }
      },
      Event::VoteSubmitted { result } => match result {
        Ok(()) => self.begin_reload(),
        Err(error) => {
          warn!("could not submit vote: {error}");
          self.report(format!("Could not record vote: {error}"));
        }
      },
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(
    base_url: Url,
    feed_request: FeedRequest,
    moderation: ModerationGate,
    mut rng: StdRng,
  ) -> Self {
    Self {
      active_tab: Tab::default(),
      auth: AuthState::default(),
      base_url,
      deferred_report: None,
      feed: Feed::default(),
      feed_request,
      greeting: Greeting::random(&mut rng),
      help: HelpView::new(),
      message: STATUS.into(),
      moderation,
      notice: None,
      pending_effects: Vec::new(),
      prompt: None,
      rng,
      transient_message: None,
      votes: GameVotes::default(),
    }
  }

  pub(crate) fn notice(&self) -> Option<&Notice> {
    self.notice.as_ref()
  }

  fn open_login_link(&mut self) {
    let Some(link) = self.auth.link() else {
      self.set_transient_message("No login link available yet.".into());
      return;
    };

    match self.base_url.join(&link) {
      Ok(url) => self.pending_effects.push(Effect::OpenUrl {
        url: url.to_string(),
      }),
      Err(error) => {
        self.set_transient_message(format!("Could not open link: {error}"));
      }
    }
  }

  pub(crate) fn prompt_command(&mut self, key: KeyEvent) -> Option<Command> {
    let prompt = self.prompt.as_mut()?;

    let command = match key.code {
      KeyCode::Esc => Command::CancelPrompt,
      KeyCode::Enter => Command::SubmitPrompt,
      KeyCode::Backspace => {
        prompt.buffer.pop();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) && ch == 'c' {
          return Some(Command::Quit);
        }

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Some(Command::None);
        }

        prompt.buffer.push(ch);
        Command::None
      }
      _ => Command::None,
    };

    self.update_prompt_message();

    Some(command)
  }

  fn report(&mut self, message: String) {
    if self.status_is_covered() {
      self.deferred_report = Some(message);
    } else {
      self.set_transient_message(message);
    }
  }

  fn request_feed(&mut self) {
    self.feed.begin();

    if !self.status_is_covered() {
      self.message = LOADING_STATUS.into();
    }

    self.pending_effects.push(Effect::FetchFeed {
      request: self.feed_request.clone(),
    });
  }

  fn retire_loading_status(&mut self) {
    if self.feed.state() == FeedState::Loading {
      return;
    }

    if self.message == LOADING_STATUS {
      self.message = STATUS.into();
    }

    if let Some(prompt) = &mut self.prompt
      && prompt.message_backup == LOADING_STATUS
    {
      prompt.message_backup = STATUS.into();
    }

    self.help.replace_backup(LOADING_STATUS, STATUS);

    if let Some(transient) = &mut self.transient_message
      && transient.fallback() == LOADING_STATUS
    {
      transient.set_fallback(STATUS);
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let fallback = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.fallback().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), fallback));

    self.message = message;
  }

  fn settle_feed(&mut self, result: Result<Vec<Comment>, FeedError>) {
    let result = self.feed.complete(result);

    self.retire_loading_status();

    match result {
      Ok(count) => {
        if !self.status_is_covered() {
          self.set_transient_message(match count {
            1 => "Loaded 1 comment".to_string(),
            _ => format!("Loaded {count} comments"),
          });
        }
      }
      Err(error) => {
        warn!("could not load comments: {error}");
        self.report(format!("Could not load comments: {error}"));
      }
    }
  }

  fn start_prompt(&mut self, kind: PromptKind) {
    if self.prompt.is_some() {
      return;
    }

    if kind == PromptKind::Comment && !self.auth.is_signed_in() {
      self.set_transient_message("Sign in to leave a comment (press o).".into());
      return;
    }

    let mut prompt = PromptInput::new(kind, self.message.clone());

    if kind == PromptKind::MaxCount {
      prompt.buffer = self.feed_request.max_count().to_string();
    }

    self.prompt = Some(prompt);

    self.update_prompt_message();
  }

  fn status_is_covered(&self) -> bool {
    self.help.is_visible() || self.prompt.is_some()
  }

  fn submit_prompt(&mut self) {
    let Some(prompt) = self.prompt.take() else {
      return;
    };

    self.message = prompt.message_backup;

    self.flush_report();

    let input = prompt.buffer.trim();

    match prompt.kind {
      PromptKind::MaxCount => {
        self.feed_request = FeedRequest::raw(input);
        self.active_tab = Tab::Comments;
        self.request_feed();
      }
      PromptKind::Secret => self.confirm_and_clear(&prompt.buffer),
      PromptKind::Comment if !input.is_empty() => {
        self.pending_effects.push(Effect::SubmitComment {
          message: input.to_string(),
        });
      }
      PromptKind::Vote if !input.is_empty() => {
        self.pending_effects.push(Effect::SubmitVote {
          game: input.to_string(),
        });
      }
      PromptKind::Comment | PromptKind::Vote => {}
    }
  }

  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn update_prompt_message(&mut self) {
    if let Some(prompt) = &self.prompt {
      self.message = truncate(&prompt.prompt(), 80);
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.fallback().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn votes(&self) -> &GameVotes {
    &self.votes
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SECRET: &str = "hunter2";

  fn state() -> State {
    State::new(
      Url::parse("http://localhost:8080").unwrap(),
      FeedRequest::new(10),
      ModerationGate::new(SECRET),
      StdRng::seed_from_u64(3),
    )
  }

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      assert_eq!(
        state.prompt_command(key(KeyCode::Char(ch))),
        Some(Command::None)
      );
    }
  }

  fn sample() -> Vec<Comment> {
    vec![Comment::new("a@x.com", "hi"), Comment::new("b@x.com", "yo")]
  }

  fn loaded_state() -> State {
    let mut state = state();

    state.dispatch_command(Command::FetchFeed);
    state.handle_event(Event::Feed { result: Ok(sample()) });

    state
  }

  fn signed_in(state: &mut State) {
    state.handle_event(Event::Reloaded {
      snapshot: Snapshot {
        feed: Ok(Vec::new()),
        greeting_text: Ok("Hello!".into()),
        login_status: Ok(LoginStatus {
          authenticated: true,
          fragment: r#"<p>a@x.com <a href="/_ah/logout">Logout</a></p>"#
            .into(),
        }),
        votes: Ok(GameVotes::default()),
      },
    });
  }

  #[test]
  fn max_count_prompt_requests_exact_limit() {
    let mut state = state();

    state.dispatch_command(Command::StartPrompt(PromptKind::MaxCount));

    for _ in 0..2 {
      state.prompt_command(key(KeyCode::Backspace));
    }

    type_text(&mut state, "2");

    let dispatch = state.dispatch_command(Command::SubmitPrompt);

    assert_eq!(
      dispatch.effects,
      vec![Effect::FetchFeed {
        request: FeedRequest::new(2)
      }]
    );
    assert_eq!(state.feed().state(), FeedState::Loading);
    assert_eq!(state.active_tab(), Tab::Comments);

    state.handle_event(Event::Feed { result: Ok(sample()) });

    assert_eq!(state.feed().state(), FeedState::Idle);
    assert_eq!(
      state.feed().view().markup(),
      "<b>a@x.com</b>: hi<br><b>b@x.com</b>: yo<br>"
    );
  }

  #[test]
  fn max_count_input_is_passed_through() {
    let mut state = state();

    state.dispatch_command(Command::StartPrompt(PromptKind::MaxCount));
    state.prompt_command(key(KeyCode::Backspace));
    state.prompt_command(key(KeyCode::Backspace));
    type_text(&mut state, "abc");

    let dispatch = state.dispatch_command(Command::SubmitPrompt);

    assert_eq!(
      dispatch.effects,
      vec![Effect::FetchFeed {
        request: FeedRequest::raw("abc")
      }]
    );
  }

  #[test]
  fn service_failure_leaves_view_unchanged() {
    let mut state = loaded_state();

    let before = state.feed().view().clone();

    state.dispatch_command(Command::FetchFeed);

    state.handle_event(Event::Feed {
      result: Err(FeedError::ServiceFailure {
        status: StatusCode::BAD_REQUEST,
      }),
    });

    assert_eq!(state.feed().view(), &before);
    assert_eq!(state.feed().state(), FeedState::Idle);
    assert!(state.message().starts_with("Could not load comments"));
  }

  #[test]
  fn decode_failure_leaves_view_unchanged() {
    let mut state = loaded_state();

    let before = state.feed().view().clone();

    state.dispatch_command(Command::FetchFeed);

    state.handle_event(Event::Feed {
      result: Err(FeedError::DecodeFailure("expected a sequence".into())),
    });

    assert_eq!(state.feed().view(), &before);
  }

  #[test]
  fn correct_secret_clears_once_and_reports_success() {
    let mut state = state();

    let dispatch =
      state.dispatch_command(Command::StartPrompt(PromptKind::Secret));
    assert!(dispatch.effects.is_empty());

    type_text(&mut state, SECRET);

    assert!(!state.message().contains(SECRET));

    let dispatch = state.dispatch_command(Command::SubmitPrompt);

    assert_eq!(dispatch.effects, vec![Effect::ClearFeed]);
    assert_eq!(
      state.notice().map(|notice| notice.kind),
      Some(NoticeKind::Success)
    );
    assert_eq!(state.feed().state(), FeedState::Loading);
  }

  #[test]
  fn wrong_secret_reports_failure_without_clearing() {
    let mut state = loaded_state();

    let before = state.feed().view().clone();

    state.dispatch_command(Command::StartPrompt(PromptKind::Secret));
    type_text(&mut state, "guess");

    let dispatch = state.dispatch_command(Command::SubmitPrompt);

    assert!(dispatch.effects.is_empty());
    assert_eq!(
      state.notice().map(|notice| notice.kind),
      Some(NoticeKind::Failure)
    );
    assert_eq!(state.feed().view(), &before);
    assert_eq!(state.feed().state(), FeedState::Idle);

    state.dispatch_command(Command::DismissNotice);
    assert!(state.notice().is_none());
  }

  #[test]
  fn successful_clear_reloads_and_shows_empty_feed() {
    let mut state = loaded_state();

    state.confirm_and_clear(SECRET);
    state.pending_effects.clear();

    state.handle_event(Event::FeedCleared { result: Ok(()) });

    assert_eq!(
      state.take_effects(),
      vec![Effect::Reload {
        request: FeedRequest::new(10)
      }]
    );
    assert_eq!(state.feed().state(), FeedState::Loading);

    state.handle_event(Event::Reloaded {
      snapshot: Snapshot {
        feed: Ok(Vec::new()),
        greeting_text: Ok("Hello!".into()),
        login_status: Ok(LoginStatus {
          authenticated: false,
          fragment: String::new(),
        }),
        votes: Ok(GameVotes::default()),
      },
    });

    assert!(state.feed().view().is_empty());
    assert_eq!(state.feed().view().markup(), "");
    assert_eq!(state.feed().state(), FeedState::Idle);
  }

  #[test]
  fn failed_clear_keeps_view_and_reports() {
    let mut state = loaded_state();

    let before = state.feed().view().clone();

    state.confirm_and_clear(SECRET);
    state.pending_effects.clear();

    state.handle_event(Event::FeedCleared {
      result: Err(FeedError::NetworkFailure("connection refused".into())),
    });

    assert!(state.pending_effects.is_empty());
    assert_eq!(state.feed().view(), &before);
    assert_eq!(state.feed().state(), FeedState::Idle);
    assert!(state.message().starts_with("Could not delete comments"));
  }

  #[test]
  fn overlapping_fetches_apply_the_later_response() {
    let mut state = state();

    state.dispatch_command(Command::FetchFeed);
    state.dispatch_command(Command::FetchFeed);

    state.handle_event(Event::Feed {
      result: Ok(vec![Comment::new("late", "second")]),
    });

    assert_eq!(state.feed().state(), FeedState::Loading);

    state.handle_event(Event::Feed { result: Ok(sample()) });

    assert_eq!(state.feed().state(), FeedState::Idle);
    assert_eq!(state.feed().view().comments(), sample().as_slice());
  }

  #[test]
  fn compose_requires_sign_in() {
    let mut state = state();

    state.dispatch_command(Command::StartPrompt(PromptKind::Comment));

    assert!(state.prompt.is_none());
    assert!(state.message().starts_with("Sign in"));

    signed_in(&mut state);

    state.dispatch_command(Command::StartPrompt(PromptKind::Comment));
    type_text(&mut state, "nice site");

    let dispatch = state.dispatch_command(Command::SubmitPrompt);

    assert_eq!(
      dispatch.effects,
      vec![Effect::SubmitComment {
        message: "nice site".into()
      }]
    );
  }

  #[test]
  fn submitted_comment_triggers_reload() {
    let mut state = state();

    state.handle_event(Event::CommentSubmitted { result: Ok(()) });

    assert!(matches!(
      state.pending_effects.as_slice(),
      [Effect::Reload { .. }]
    ));
  }

  #[test]
  fn blank_vote_is_ignored() {
    let mut state = state();

    state.dispatch_command(Command::StartPrompt(PromptKind::Vote));
    type_text(&mut state, "   ");

    assert!(state.dispatch_command(Command::SubmitPrompt).effects.is_empty());
  }

  #[test]
  fn cancel_prompt_restores_status() {
    let mut state = state();

    state.dispatch_command(Command::StartPrompt(PromptKind::Vote));
    assert_eq!(state.message(), "Vote for game: ");

    assert_eq!(
      state.prompt_command(key(KeyCode::Esc)),
      Some(Command::CancelPrompt)
    );

    state.dispatch_command(Command::CancelPrompt);

    assert_eq!(state.message(), STATUS);
  }

  #[test]
  fn prompt_opened_while_loading_restores_idle_status() {
    let mut state = state();

    state.dispatch_command(Command::FetchFeed);
    assert_eq!(state.message(), LOADING_STATUS);

    state.dispatch_command(Command::StartPrompt(PromptKind::Vote));
    state.handle_event(Event::Feed { result: Ok(Vec::new()) });

    assert_eq!(state.feed().state(), FeedState::Idle);
    assert_eq!(state.message(), "Vote for game: ");

    state.dispatch_command(Command::CancelPrompt);

    assert_eq!(state.message(), STATUS);
  }

  #[test]
  fn help_opened_while_loading_restores_idle_status() {
    let mut state = state();

    state.dispatch_command(Command::Reload);
    state.dispatch_command(Command::ShowHelp);

    state.handle_event(Event::Reloaded {
      snapshot: Snapshot {
        feed: Ok(Vec::new()),
        greeting_text: Ok("Hello!".into()),
        login_status: Err(FeedError::NetworkFailure("reset".into())),
        votes: Ok(GameVotes::default()),
      },
    });

    assert_eq!(state.message(), HELP_STATUS);

    state.dispatch_command(Command::HideHelp);

    assert_eq!(state.feed().state(), FeedState::Idle);
    assert_eq!(state.message(), STATUS);
  }

  #[test]
  fn transient_message_shown_while_loading_falls_back_to_idle_status() {
    let mut state = state();

    state.dispatch_command(Command::FetchFeed);
    state.dispatch_command(Command::OpenLoginLink);
    state.handle_event(Event::Feed { result: Ok(sample()) });

    assert_eq!(state.message(), "Loaded 2 comments");
    assert_eq!(
      state.transient_message.as_ref().map(TransientMessage::fallback),
      Some(STATUS)
    );
  }

  #[test]
  fn failure_during_prompt_is_shown_once_prompt_closes() {
    let mut state = state();

    state.dispatch_command(Command::FetchFeed);
    state.dispatch_command(Command::StartPrompt(PromptKind::Vote));
    type_text(&mut state, "Halo");

    state.handle_event(Event::Feed {
      result: Err(FeedError::NetworkFailure("connection refused".into())),
    });

    assert_eq!(state.message(), "Vote for game: Halo");

    state.dispatch_command(Command::CancelPrompt);

    assert!(state.message().starts_with("Could not load comments"));
    assert_eq!(
      state.transient_message.as_ref().map(TransientMessage::fallback),
      Some(STATUS)
    );
  }

  #[test]
  fn failure_during_help_is_shown_once_help_closes() {
    let mut state = state();

    state.dispatch_command(Command::ShowHelp);

    state.handle_event(Event::VoteSubmitted {
      result: Err(FeedError::ServiceFailure {
        status: StatusCode::INTERNAL_SERVER_ERROR,
      }),
    });

    assert_eq!(state.message(), HELP_STATUS);

    state.dispatch_command(Command::HideHelp);

    assert!(state.message().starts_with("Could not record vote"));
  }

  #[test]
  fn login_link_resolves_against_base_url() {
    let mut state = state();

    signed_in(&mut state);

    let dispatch = state.dispatch_command(Command::OpenLoginLink);

    assert_eq!(
      dispatch.effects,
      vec![Effect::OpenUrl {
        url: "http://localhost:8080/_ah/logout".into()
      }]
    );
  }

  #[test]
  fn reload_keeps_previous_parts_that_fail() {
    let mut state = state();

    signed_in(&mut state);

    state.dispatch_command(Command::Reload);

    state.handle_event(Event::Reloaded {
      snapshot: Snapshot {
        feed: Ok(sample()),
        greeting_text: Err(FeedError::NetworkFailure("reset".into())),
        login_status: Err(FeedError::NetworkFailure("reset".into())),
        votes: Err(FeedError::NetworkFailure("reset".into())),
      },
    });

    assert!(state.auth().is_signed_in());
    assert_eq!(state.greeting().text(), Some("Hello!"));
    assert_eq!(state.feed().view().comments(), sample().as_slice());
  }
}
