use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = popup_area(frame.area(), HELP_TEXT);

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self.message_backup.take().unwrap_or_else(|| STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn replace_backup(&mut self, stale: &str, fresh: &str) {
    if let Some(backup) = &mut self.message_backup
      && *backup == stale
    {
      fresh.clone_into(backup);
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(message.clone());

    *message = HELP_STATUS.into();

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_and_hide_restore_status() {
    let mut help = HelpView::new();
    let mut message = "Loaded 3 comments".to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, "Loaded 3 comments");
  }

  #[test]
  fn replaced_backup_is_restored_on_hide() {
    let mut help = HelpView::new();
    let mut message = LOADING_STATUS.to_string();

    help.show(&mut message);
    help.replace_backup("Loaded 3 comments", "unrelated");
    help.replace_backup(LOADING_STATUS, STATUS);
    help.hide(&mut message);

    assert_eq!(message, STATUS);
  }
}
