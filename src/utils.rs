use super::*;

pub(crate) fn first_link(markup: &str) -> Option<String> {
  let start = markup.find("href=")? + "href=".len();

  let rest = &markup[start..];

  let quote = rest.chars().next().filter(|ch| matches!(ch, '"' | '\''))?;

  let value = &rest[quote.len_utf8()..];

  let end = value.find(quote)?;

  let link = html_escape::decode_html_entities(value[..end].trim());

  (!link.is_empty()).then(|| link.into_owned())
}

pub(crate) fn markup_to_text(markup: &str) -> String {
  html2text::from_read(markup.as_bytes(), usize::MAX)
    .map(|text| text.trim().to_owned())
    .unwrap_or_default()
}

pub(crate) fn mask(text: &str) -> String {
  "*".repeat(text.chars().count())
}

pub(crate) fn popup_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text.lines().fold((0usize, 0usize), |(count, width), line| {
      (count.saturating_add(1), width.max(line.chars().count()))
    });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(2)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn first_link_reads_double_and_single_quotes() {
    assert_eq!(
      first_link(r#"<a href="/login">in</a>"#).as_deref(),
      Some("/login")
    );

    assert_eq!(
      first_link("<a href='/logout?x=1&amp;y=2'>out</a>").as_deref(),
      Some("/logout?x=1&y=2")
    );
  }

  #[test]
  fn first_link_ignores_unquoted_or_missing_links() {
    assert_eq!(first_link("<p>no links</p>"), None);
    assert_eq!(first_link("<a href=/bare>x</a>"), None);
    assert_eq!(first_link(r#"<a href="">x</a>"#), None);
  }

  #[test]
  fn markup_to_text_strips_tags() {
    assert_eq!(markup_to_text("<p>Hello there</p>\n"), "Hello there");
    assert_eq!(markup_to_text(""), "");
  }

  #[test]
  fn popup_area_is_centered_and_clamped() {
    let area = Rect::new(0, 0, 40, 20);

    assert_eq!(popup_area(area, "hello\nworld"), Rect::new(16, 8, 7, 4));

    let tiny = Rect::new(0, 0, 4, 3);
    let popup = popup_area(tiny, "a much longer line of text");

    assert!(popup.width <= tiny.width && popup.height <= tiny.height);
  }

  #[test]
  fn mask_hides_every_character() {
    assert_eq!(mask("pässword"), "********");
    assert_eq!(mask(""), "");
  }
}
