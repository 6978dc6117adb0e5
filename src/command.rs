use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelPrompt,
  DismissNotice,
  FetchFeed,
  HideHelp,
  NewGreeting,
  None,
  OpenLoginLink,
  Quit,
  Reload,
  ShowHelp,
  StartPrompt(PromptKind),
  SubmitPrompt,
  SwitchTabLeft,
  SwitchTabRight,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        Self::Quit
      }
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') => Self::SwitchTabLeft,
      KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
        Self::SwitchTabRight
      }
      KeyCode::Char('r') => Self::Reload,
      KeyCode::Char('f') => Self::FetchFeed,
      KeyCode::Char('g') => Self::NewGreeting,
      KeyCode::Char('o' | 'O') => Self::OpenLoginLink,
      KeyCode::Char('m') => Self::StartPrompt(PromptKind::MaxCount),
      KeyCode::Char('c') => Self::StartPrompt(PromptKind::Comment),
      KeyCode::Char('d') => Self::StartPrompt(PromptKind::Secret),
      KeyCode::Char('v') => Self::StartPrompt(PromptKind::Vote),
      _ => Self::None,
    }
  }
}
