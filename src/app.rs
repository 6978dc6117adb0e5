use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_lines(feed: &Feed) -> Vec<Line<'_>> {
    let view = feed.view();

    if view.is_empty() {
      let text = match feed.state() {
        FeedState::Loading => LOADING_STATUS,
        FeedState::Idle => "No comments yet.",
      };

      return vec![Line::from(vec![Span::raw(BASE_INDENT), Span::raw(text)])];
    }

    view
      .comments()
      .iter()
      .map(|comment| {
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            comment.author.as_str(),
            Style::default()
              .fg(Color::White)
              .add_modifier(Modifier::BOLD),
          ),
          Span::raw(": "),
          Span::styled(
            comment.message.as_str(),
            Style::default().fg(Color::Gray),
          ),
        ])
      })
      .collect()
  }

  fn dispatch(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let tab_titles: Vec<Line> = Tab::ALL
      .iter()
      .map(|tab| Line::from(tab.label().to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab().index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    match self.state.active_tab() {
      Tab::Home => self.draw_home(frame, layout[1]),
      Tab::Comments => self.draw_comments(frame, layout[1]),
      Tab::Games => self.draw_games(frame, layout[1]),
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);

    if let Some(notice) = self.state.notice() {
      notice.draw(frame);
    }
  }

  fn draw_comments(&self, frame: &mut Frame, area: Rect) {
    let feed = self.state.feed();

    let title = match feed.state() {
      FeedState::Idle => format!(
        "Comments ({})",
        self.state.feed_request().max_count()
      ),
      FeedState::Loading => format!(
        "Comments ({}) - loading",
        self.state.feed_request().max_count()
      ),
    };

    let comments = Paragraph::new(Self::comment_lines(feed))
      .block(Block::default().title(title).borders(Borders::TOP))
      .wrap(Wrap { trim: false });

    frame.render_widget(comments, area);
  }

  fn draw_games(&self, frame: &mut Frame, area: Rect) {
    let votes = self.state.votes();

    let block = Block::default()
      .title(match votes.leader() {
        Some((game, count)) => format!(
          "Game votes ({} total, leading: {} with {count})",
          votes.total(),
          truncate(game, 30)
        ),
        None => "Game votes".to_string(),
      })
      .borders(Borders::TOP);

    if votes.is_empty() {
      let empty = Paragraph::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("No votes yet. Press v to vote."),
      ]))
      .block(block);

      frame.render_widget(empty, area);

      return;
    }

    let bars = votes.bars();

    let bar_count = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);

    let bar_width = (area.width / bar_count).saturating_sub(1).clamp(3, 16);

    let chart = BarChart::default()
      .block(block)
      .data(bars.as_slice())
      .bar_width(bar_width)
      .bar_gap(1)
      .bar_style(Style::default().fg(Color::Cyan))
      .value_style(
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
  }

  fn draw_home(&self, frame: &mut Frame, area: Rect) {
    let greeting = self.state.greeting();

    let auth = self.state.auth();

    let mut lines = vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          greeting.quote(),
          Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
        ),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ];

    if let Some(text) = greeting.text() {
      lines.extend(text.lines().map(|line| {
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(line, Style::default().fg(Color::Gray)),
        ])
      }));

      lines.push(Line::from(Span::raw(BASE_INDENT)));
    }

    let identity_width = usize::from(area.width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    for line in wrap_text(&auth.identity(), identity_width) {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(line, Style::default().fg(Color::DarkGray)),
      ]));
    }

    if auth.link().is_some() {
      let hint = if auth.is_signed_in() {
        "Press o to log out, c to leave a comment."
      } else {
        "Press o to log in."
      };

      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
      ]));
    }

    let home = Paragraph::new(lines)
      .block(Block::default().title("Hello").borders(Borders::TOP))
      .wrap(Wrap { trim: false });

    frame.render_widget(home, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::ClearFeed => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::FeedCleared {
            result: client.clear_feed().await,
          });
        });
      }
      Effect::FetchFeed { request } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Feed {
            result: client.request_feed(&request).await,
          });
        });
      }
      Effect::Reload { request } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Reloaded {
            snapshot: client.reload(&request).await,
          });
        });
      }
      Effect::SubmitComment { message } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentSubmitted {
            result: client.submit_comment(&message).await,
          });
        });
      }
      Effect::SubmitVote { game } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::VoteSubmitted {
            result: client.submit_vote(&game).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!("could not open {url}: {error}");
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_effects() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.dispatch(Command::Reload);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.notice().is_some() {
        Notice::handle_key(key)
      } else if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.prompt_command(key) {
        command
      } else {
        Command::from_key(key)
      };

      if self.dispatch(command) {
        break;
      }
    }

    Ok(())
  }
}
