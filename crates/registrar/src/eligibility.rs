//! Pure eligibility rules.
//!
//! Every check operates on fully resolved [`SectionContext`] values and an
//! injected `today`, so the rules are synchronous and deterministic. The
//! service performs the catalog lookups before calling in here.

use std::collections::HashMap;

use catalog::{Course, Section, Semester, SemesterOrder, SemesterStatus};
use chrono::NaiveDate;
use common::{Credits, SemesterName};

use crate::error::Rejection;

/// A section together with its course and semester records.
#[derive(Debug, Clone)]
pub struct SectionContext {
    pub section: Section,
    pub course: Course,
    pub semester: Semester,
}

impl SectionContext {
    /// Creates a context from resolved records.
    pub fn new(section: Section, course: Course, semester: Semester) -> Self {
        Self {
            section,
            course,
            semester,
        }
    }
}

/// Checks whether `candidate` may coexist with existing registrations of the
/// same course.
///
/// A course may be attempted again only as a retake: every prior attempt's
/// semester must have ended, and the candidate's semester must start later
/// than each attempt's. Anything else is `CourseAlreadyRegistered`.
pub fn check_retake(
    candidate: &SectionContext,
    registered: &[SectionContext],
    today: NaiveDate,
) -> Result<(), Rejection> {
    for attempt in registered {
        if attempt.course.id != candidate.course.id {
            continue;
        }
        let ended = attempt.semester.status(today) == SemesterStatus::Ended;
        let later = candidate.semester.compare_to(&attempt.semester) == SemesterOrder::Later;
        if !(ended && later) {
            return Err(Rejection::CourseAlreadyRegistered(
                candidate.course.id.clone(),
            ));
        }
    }
    Ok(())
}

/// Checks whether `candidate` may be added to the cart.
pub fn check_cart_add(
    candidate: &SectionContext,
    cart: &[SectionContext],
    registered: &[SectionContext],
    today: NaiveDate,
) -> Result<(), Rejection> {
    for item in cart {
        if item.section.id == candidate.section.id {
            return Err(Rejection::AlreadyInCart(candidate.section.id));
        }
        if item.course.id == candidate.course.id {
            return Err(Rejection::CourseAlreadyInCart(candidate.course.id.clone()));
        }
    }
    check_retake(candidate, registered, today)
}

/// Checks whether `candidate` is registrable right now.
///
/// Prerequisites are satisfied when some registered section's course appears
/// in the candidate course's prereq set and the candidate's semester starts
/// later than that attempt's. A section whose semester is no longer upcoming
/// cannot be registered.
pub fn check_registration(
    candidate: &SectionContext,
    registered: &[SectionContext],
    today: NaiveDate,
) -> Result<(), Rejection> {
    if candidate.course.has_prereqs() {
        let satisfied = registered.iter().any(|attempt| {
            candidate.course.prereqs.contains(&attempt.course.id)
                && candidate.semester.compare_to(&attempt.semester) == SemesterOrder::Later
        });
        if !satisfied {
            return Err(Rejection::PrereqNotMet(candidate.course.id.clone()));
        }
    }

    if candidate.semester.status(today) != SemesterStatus::Upcoming {
        return Err(Rejection::SectionStarted(candidate.section.id));
    }

    Ok(())
}

/// Checks the whole cart against the per-semester credit cap.
///
/// Running totals are seeded from the registered sections, then cart
/// sections accumulate in cart order; the first semester whose total would
/// exceed `cap` fails the check.
pub fn check_credit_load(
    cart: &[SectionContext],
    registered: &[SectionContext],
    cap: Credits,
) -> Result<(), Rejection> {
    let mut totals: HashMap<SemesterName, Credits> = HashMap::new();
    for attempt in registered {
        *totals
            .entry(attempt.semester.name.clone())
            .or_insert(Credits::zero()) += attempt.section.credits;
    }

    for item in cart {
        let total = totals
            .entry(item.semester.name.clone())
            .or_insert(Credits::zero());
        *total += item.section.credits;
        if *total > cap {
            return Err(Rejection::CreditOverload(item.semester.name.clone()));
        }
    }

    Ok(())
}
