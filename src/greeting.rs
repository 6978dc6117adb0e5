use super::*;

const GREETINGS: &[&str] = &[
  "\"Carpe diem. Seize the day, boys. Make your lives extraordinary.\" -Dead Poets Society",
  "\"Roads? Where we're going we don't need roads.\" -Back to the Future",
  "I was born in Kumasi, Ghana.",
  "My favorite video game to play is League of Legends.",
];

#[derive(Clone, Debug, Default)]
pub(crate) struct Greeting {
  quote: &'static str,
  text: Option<String>,
}

impl Greeting {
  pub(crate) fn quote(&self) -> &'static str {
    self.quote
  }

  pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let mut greeting = Self::default();
    greeting.reroll(rng);
    greeting
  }

  pub(crate) fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.quote = GREETINGS.choose(rng).copied().unwrap_or_default();
  }

  pub(crate) fn set_text(&mut self, text: String) {
    self.text = Some(text.trim().to_string());
  }

  pub(crate) fn text(&self) -> Option<&str> {
    self.text.as_deref()
  }
}
