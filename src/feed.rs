use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FeedState {
  Idle,
  Loading,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FeedView {
  comments: Vec<Comment>,
  markup: String,
}

impl FeedView {
  pub(crate) fn comments(&self) -> &[Comment] {
    &self.comments
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.comments.is_empty()
  }

  pub(crate) fn markup(&self) -> &str {
    &self.markup
  }

  pub(crate) fn new(comments: Vec<Comment>) -> Self {
    let markup = render_feed(&comments);

    Self { comments, markup }
  }
}

#[derive(Debug, Default)]
pub(crate) struct Feed {
  outstanding: usize,
  view: FeedView,
}

impl Feed {
  pub(crate) fn begin(&mut self) {
    self.outstanding = self.outstanding.saturating_add(1);
  }

  pub(crate) fn complete(
    &mut self,
    result: Result<Vec<Comment>, FeedError>,
  ) -> Result<usize, FeedError> {
    self.settle();

    // Overlapping responses are applied in arrival order, last one wins.
    let comments = result?;

    self.view = FeedView::new(comments);

    debug!(
      comments = self.view.comments().len(),
      markup = self.view.markup(),
      "feed view replaced"
    );

    Ok(self.view.comments().len())
  }

  pub(crate) fn settle(&mut self) {
    self.outstanding = self.outstanding.saturating_sub(1);
  }

  pub(crate) fn state(&self) -> FeedState {
    if self.outstanding == 0 {
      FeedState::Idle
    } else {
      FeedState::Loading
    }
  }

  pub(crate) fn view(&self) -> &FeedView {
    &self.view
  }
}

pub(crate) fn render_feed(comments: &[Comment]) -> String {
  comments.iter().fold(String::new(), |mut markup, comment| {
    markup.push_str("<b>");
    markup.push_str(&html_escape::encode_text(&comment.author));
    markup.push_str("</b>: ");
    markup.push_str(&html_escape::encode_text(&comment.message));
    markup.push_str("<br>");
    markup
  })
}
