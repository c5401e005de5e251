//! The reference catalog of schools and concerns.
//!
//! Built once at startup and shared read-only. Lookups by slug never fail:
//! an unknown slug simply has no entry.

use std::collections::HashMap;

use crate::letter::{Concern, School};

/// Immutable slug-indexed catalogs of [`School`]s and [`Concern`]s.
#[derive(Debug, Clone)]
pub struct Catalog {
  schools:       Vec<School>,
  concerns:      Vec<Concern>,
  school_index:  HashMap<String, usize>,
  concern_index: HashMap<String, usize>,
}

impl Catalog {
  /// Build a catalog from entries in display order. A later entry with a
  /// duplicate slug shadows the earlier one for lookups.
  pub fn new(schools: Vec<School>, concerns: Vec<Concern>) -> Self {
    let school_index = schools
      .iter()
      .enumerate()
      .map(|(i, s)| (s.slug.clone(), i))
      .collect();
    let concern_index = concerns
      .iter()
      .enumerate()
      .map(|(i, c)| (c.slug.clone(), i))
      .collect();
    Self { schools, concerns, school_index, concern_index }
  }

  /// The district's fixed catalog.
  pub fn district() -> Self { Self::new(district_schools(), district_concerns()) }

  pub fn schools(&self) -> &[School] { &self.schools }

  pub fn concerns(&self) -> &[Concern] { &self.concerns }

  pub fn school(&self, slug: &str) -> Option<&School> {
    self.school_index.get(slug).map(|&i| &self.schools[i])
  }

  pub fn concern(&self, slug: &str) -> Option<&Concern> {
    self.concern_index.get(slug).map(|&i| &self.concerns[i])
  }
}

// ─── District data ───────────────────────────────────────────────────────────

fn school(name: &str, slug: &str) -> School {
  School { name: name.to_owned(), slug: slug.to_owned() }
}

fn concern(title: &str, description: &str, slug: &str) -> Concern {
  Concern {
    title:       title.to_owned(),
    description: description.to_owned(),
    slug:        slug.to_owned(),
  }
}

fn district_schools() -> Vec<School> {
  vec![
    school("Burlingame Intermediate School", "bis"),
    school("Franklin Elementary School", "franklin"),
    school("Hoover Elementary School", "hoover"),
    school("Lincoln Elementary School", "lincoln"),
    school("McKinley Elementary School", "mckinley"),
    school("Roosevelt Elementary School", "roosevelt"),
    school("Washington Elementary School", "washington"),
  ]
}

fn district_concerns() -> Vec<Concern> {
  vec![
    concern(
      "I have no concerns",
      "I actually have no concerns. I'm happy with the direction BSD has taken \
       and every step of the plan is clear to me.",
      "no-concerns",
    ),
    concern(
      "Have our teachers been heard?",
      "How did the administration and teachers work collaboratively on the \
       proposed plans? How do we (as parents) know teachers approve and support \
       the hybrid model and its potential for success for students continuing \
       to learn remotely and those returning to the classroom? What surveys or \
       polls have the district used to gage how teachers are feeling about the \
       potential reopening of schools? Please provide details on why the plan \
       has been laid out the way it is presented so that we can have a better \
       understanding of the considerations, safety precautions and programs \
       that are being put in place.",
      "teachers-heard",
    ),
    concern(
      "What will Distance Learning Look Like?",
      "Why did the school district decide to open with a hybrid model while \
       infection rate is increasing, instead of starting with distance learning \
       and slowly easing into the hybrid model with a phased approach like \
       other districts within the county? The administration mentions SB 98 \
       limits the district’s ability to offer distance learning as a \
       stand-alone model except on a per-parent request for medical necessity \
       or if determined necessary by a local health agency. How then are other \
       SMC districts, such as Millbrae, Menlo Park and SMFCSD, planning to \
       start the year 100% distance learning then phasing in hybrid? With the \
       inevitability of a second Covid wave and the annual flu season coming, \
       distance learning will likely be with us in some form for the \
       foreseeable future. What has the district learned from the spring to \
       improve upon the distance learning curriculum and experience to have \
       consistency for all BSD students?",
      "distance-learning",
    ),
    concern(
      "What is the Safety Protocol for Classroom Instruction?",
      "What rigorous safety protocols are being put in place for students and \
       teachers returning to the classroom? Will they be tested before the \
       first day of school? How often will they be tested thereafter? Will \
       there be daily temperature checks? How often will the school be \
       disinfected and how will this be adequately done without hiring \
       additional custodial personnel? Will there be recess, PE, socializing or \
       collaborating? If there is no social/emotional learning, what is the \
       value?",
      "safety-protocol",
    ),
    concern(
      "What Happens in an Outbreak?",
      "If we return to classroom instruction of any kind, what happens when a \
       student, teacher, school staffer or parent tests positive for Covid-19? \
       What happens if they show symptoms and get tested, but have to wait \
       several days for the results? What happens to the other students in \
       that class? What about the other cohort that shares the classroom? If \
       the teacher contracts Covid, will there be a replacement ready? Does the \
       district plan to hire extra subs?",
      "outbreak-plans",
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn district_catalog_has_fixed_entries() {
    let catalog = Catalog::district();
    assert_eq!(catalog.schools().len(), 7);
    assert_eq!(catalog.concerns().len(), 5);
    assert_eq!(catalog.schools()[0].slug, "bis");
    assert_eq!(catalog.concerns()[4].slug, "outbreak-plans");
  }

  #[test]
  fn lookup_by_slug() {
    let catalog = Catalog::district();
    assert_eq!(
      catalog.school("bis").map(|s| s.name.as_str()),
      Some("Burlingame Intermediate School")
    );
    assert_eq!(
      catalog.concern("no-concerns").map(|c| c.title.as_str()),
      Some("I have no concerns")
    );
  }

  #[test]
  fn unknown_slug_has_no_entry() {
    let catalog = Catalog::district();
    assert!(catalog.school("hogwarts").is_none());
    assert!(catalog.concern("").is_none());
  }
}
