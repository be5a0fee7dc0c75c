//! The student enrollment aggregate.

use std::collections::HashSet;

use common::{SectionId, StudentId};
use serde::{Deserialize, Serialize};

/// A student's enrollment state: an ordered cart and a registered set.
///
/// Fields are private; all mutation flows through the enrollment service,
/// which enforces the eligibility rules before calling the crate-internal
/// mutators below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    cart: Vec<SectionId>,
    registered: HashSet<SectionId>,
}

impl Student {
    /// Creates a student with an empty cart and no registrations.
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            cart: Vec::new(),
            registered: HashSet::new(),
        }
    }

    /// The student's identity.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Cart contents in insertion order.
    pub fn cart(&self) -> &[SectionId] {
        &self.cart
    }

    /// The set of registered sections.
    pub fn registered(&self) -> &HashSet<SectionId> {
        &self.registered
    }

    /// Returns true if the section is in the cart.
    pub fn in_cart(&self, section_id: SectionId) -> bool {
        self.cart.contains(&section_id)
    }

    /// Returns true if the section is registered.
    pub fn is_registered(&self, section_id: SectionId) -> bool {
        self.registered.contains(&section_id)
    }

    /// Appends a section to the cart. Caller has already run the cart
    /// checks; duplicates are a bug here.
    pub(crate) fn add_to_cart(&mut self, section_id: SectionId) {
        debug_assert!(!self.cart.contains(&section_id));
        self.cart.push(section_id);
    }

    /// Removes a section from the cart, returning whether it was present.
    pub(crate) fn remove_from_cart(&mut self, section_id: SectionId) -> bool {
        let before = self.cart.len();
        self.cart.retain(|s| *s != section_id);
        self.cart.len() < before
    }

    /// Empties the cart.
    pub(crate) fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Adds a section to the registered set.
    pub(crate) fn add_registration(&mut self, section_id: SectionId) {
        self.registered.insert(section_id);
    }

    /// Removes a section from the registered set, returning whether it was
    /// present.
    pub(crate) fn remove_registration(&mut self, section_id: SectionId) -> bool {
        self.registered.remove(&section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_is_empty() {
        let s = Student::new(StudentId::new());
        assert!(s.cart().is_empty());
        assert!(s.registered().is_empty());
    }

    #[test]
    fn cart_preserves_insertion_order() {
        let mut s = Student::new(StudentId::new());
        s.add_to_cart(SectionId::new(3));
        s.add_to_cart(SectionId::new(1));
        s.add_to_cart(SectionId::new(2));
        assert_eq!(
            s.cart(),
            &[SectionId::new(3), SectionId::new(1), SectionId::new(2)]
        );
    }

    #[test]
    fn remove_from_cart_reports_presence() {
        let mut s = Student::new(StudentId::new());
        s.add_to_cart(SectionId::new(1));
        assert!(s.remove_from_cart(SectionId::new(1)));
        assert!(!s.remove_from_cart(SectionId::new(1)));
    }

    #[test]
    fn registration_membership() {
        let mut s = Student::new(StudentId::new());
        s.add_registration(SectionId::new(7));
        assert!(s.is_registered(SectionId::new(7)));
        assert!(s.remove_registration(SectionId::new(7)));
        assert!(!s.is_registered(SectionId::new(7)));
    }
}
