//! Askama page templates.
//!
//! Templates live in `templates/` next to this crate's `Cargo.toml` and are
//! compiled into the binary.

use askama::Template;
use axum::response::Html;
use feedback_core::{
  catalog::Catalog,
  fixture::DEMO_LETTER_ID,
  letter::{Concern, Letter, LetterForm, School},
};

use crate::{config::MailConfig, error::Error};

pub const NEW_LETTER_TITLE: &str = "BSD Feedback Form";
pub const EDIT_LETTER_TITLE: &str = "Edit";
pub const PREVIEW_TITLE: &str = "Letter to the BSD Superintendent";
pub const DEMO_PREVIEW_TITLE: &str = "TEST PAGE DO NOT SHARE";

/// Preview heading for letter `id`. The demo letter is marked as a test page.
pub fn preview_title(id: &str) -> &'static str {
  if id == DEMO_LETTER_ID { DEMO_PREVIEW_TITLE } else { PREVIEW_TITLE }
}

/// Render `page` into an HTML response body.
pub fn render(page: &impl Template) -> Result<Html<String>, Error> {
  Ok(Html(page.render()?))
}

// ─── Form ────────────────────────────────────────────────────────────────────

pub struct SchoolChoice<'a> {
  pub school:  &'a School,
  pub checked: bool,
}

pub struct ConcernChoice<'a> {
  pub concern: &'a Concern,
  pub checked: bool,
}

/// The create/edit form. Every catalog entry is offered; entries already on
/// the letter are pre-checked.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage<'a> {
  pub title:    &'a str,
  pub form:     &'a LetterForm,
  pub schools:  Vec<SchoolChoice<'a>>,
  pub concerns: Vec<ConcernChoice<'a>>,
}

impl<'a> FormPage<'a> {
  pub fn new(title: &'a str, catalog: &'a Catalog, form: &'a LetterForm) -> Self {
    let schools = catalog
      .schools()
      .iter()
      .map(|school| SchoolChoice {
        school,
        checked: form.is_school_checked(&school.slug),
      })
      .collect();
    let concerns = catalog
      .concerns()
      .iter()
      .map(|concern| ConcernChoice {
        concern,
        checked: form.is_concern_checked(&concern.slug),
      })
      .collect();
    Self { title, form, schools, concerns }
  }
}

// ─── Preview ─────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewPage<'a> {
  pub title:  &'a str,
  pub letter: &'a Letter,
  pub mail:   &'a MailConfig,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage<'a> {
  pub message: &'a str,
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorPage<'a> {
  pub error: &'a str,
}
