pub mod form;
pub mod letter;

/// Path of the preview page for letter `id`.
pub(crate) fn preview_path(id: &str) -> String { format!("/letter/preview/{id}") }
