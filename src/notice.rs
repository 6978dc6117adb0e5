use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeKind {
  Failure,
  Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
  pub(crate) kind: NoticeKind,
  pub(crate) text: String,
}

impl Notice {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    let body = format!("{}\n\n{NOTICE_HINT}", self.text);

    let area = popup_area(frame.area(), &body);

    let (title, color) = match self.kind {
      NoticeKind::Failure => ("Failed", Color::Red),
      NoticeKind::Success => ("Done", Color::Green),
    };

    frame.render_widget(Clear, area);

    let notice = Paragraph::new(body)
      .block(
        Block::default()
          .title(title)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(color)),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(notice, area);
  }

  pub(crate) fn failure(text: impl Into<String>) -> Self {
    Self {
      kind: NoticeKind::Failure,
      text: text.into(),
    }
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      Command::Quit
    } else {
      Command::DismissNotice
    }
  }

  pub(crate) fn success(text: impl Into<String>) -> Self {
    Self {
      kind: NoticeKind::Success,
      text: text.into(),
    }
  }
}
