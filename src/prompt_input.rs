use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PromptKind {
  Comment,
  MaxCount,
  Secret,
  Vote,
}

impl PromptKind {
  fn label(self) -> &'static str {
    match self {
      Self::Comment => "Comment",
      Self::MaxCount => "Max comments",
      Self::Secret => "Password",
      Self::Vote => "Vote for game",
    }
  }
}

pub(crate) struct PromptInput {
  pub(crate) buffer: String,
  pub(crate) kind: PromptKind,
  pub(crate) message_backup: String,
}

impl PromptInput {
  pub(crate) fn new(kind: PromptKind, message_backup: String) -> Self {
    Self {
      buffer: String::new(),
      kind,
      message_backup,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    let shown = match self.kind {
      PromptKind::Secret => mask(&self.buffer),
      _ => self.buffer.clone(),
    };

    format!("{}: {shown}", self.kind.label())
  }
}
