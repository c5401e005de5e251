//! Conversions between the flat [`LetterForm`] and the stored [`Letter`].
//!
//! Both directions are total. Store-owned fields (`created_at`, `send_count`,
//! `sent_receipts`) are never set here.

use crate::{
  catalog::Catalog,
  letter::{Letter, LetterForm},
};

/// Resolve a form into an entity, copying catalog entries by value.
/// Slugs with no catalog entry are dropped.
pub fn to_entity(catalog: &Catalog, form: &LetterForm) -> Letter {
  Letter {
    id: form.id.clone(),
    email: form.email.clone(),
    name: form.name.clone(),
    num_children: form.num_children,
    schools: form
      .school_slugs
      .iter()
      .filter_map(|slug| catalog.school(slug).cloned())
      .collect(),
    concerns: form
      .concern_slugs
      .iter()
      .filter_map(|slug| catalog.concern(slug).cloned())
      .collect(),
    freeform: form.freeform.clone(),
    ..Letter::default()
  }
}

/// Flatten an entity back into a form with every embedded choice checked.
pub fn to_form(letter: &Letter) -> LetterForm {
  let mut form = LetterForm {
    id: letter.id.clone(),
    email: letter.email.clone(),
    name: letter.name.clone(),
    num_children: letter.num_children,
    freeform: letter.freeform.clone(),
    ..LetterForm::default()
  };

  for school in &letter.schools {
    form.school_slugs.push(school.slug.clone());
    form.schools_checked.insert(school.slug.clone(), true);
  }
  for concern in &letter.concerns {
    form.concern_slugs.push(concern.slug.clone());
    form.concerns_checked.insert(concern.slug.clone(), true);
  }

  form
}
