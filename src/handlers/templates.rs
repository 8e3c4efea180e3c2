//! Template structs for the study page.

use askama::Template;

use crate::study::CardView;

/// Full study page
#[derive(Template)]
#[template(path = "study.html")]
pub struct StudyTemplate<'a> {
  pub title: &'a str,
  pub view: CardView,
}

/// Card fragment swapped in by `card-actions.js` after each action
#[derive(Template)]
#[template(path = "card.html")]
pub struct CardTemplate {
  pub view: CardView,
}
