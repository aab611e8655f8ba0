//! The per-district broadcast list.
//!
//! A `BroadcastList` is the session-scoped working set of phone numbers for
//! one district. It is seeded by copying the district's catalog numbers and
//! grows only through validated, server-confirmed additions driven by the
//! submission workflow. It is never written back to the catalog.

use crate::domain::PhoneNumber;
use crate::models::District;

/// Working set of recipient numbers for one district during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastList {
    numbers: Vec<String>,
}

impl BroadcastList {
    /// Initialize a list by copying a district's seed numbers.
    ///
    /// Order-preserving; duplicates in the seed data are kept as-is. The
    /// returned list owns its numbers, so two lists initialized from the
    /// same district are fully independent.
    pub fn for_district(district: &District) -> Self {
        Self {
            numbers: district.phone_numbers.clone(),
        }
    }

    /// Append a validated number to the end of the list.
    ///
    /// Taking a `&PhoneNumber` makes the admission precondition a type-level
    /// fact: only numbers that passed validation can reach this point. The
    /// workflow additionally requires backend confirmation before calling.
    pub fn append(&mut self, number: &PhoneNumber) {
        self.numbers.push(number.as_str().to_string());
    }

    /// The current recipient numbers, in insertion order.
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Number of recipients currently in the list.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbarara() -> District {
        District::new(
            "Mbarara",
            vec!["+256701123456".to_string(), "+256772234567".to_string()],
        )
    }

    #[test]
    fn test_seed_copy_preserves_order() {
        let list = BroadcastList::for_district(&mbarara());
        assert_eq!(
            list.numbers(),
            &["+256701123456".to_string(), "+256772234567".to_string()]
        );
    }

    #[test]
    fn test_seed_duplicates_are_kept() {
        let district = District::new(
            "Kabale",
            vec!["+256701654321".to_string(), "+256701654321".to_string()],
        );
        let list = BroadcastList::for_district(&district);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_append_grows_by_one_at_the_end() {
        let mut list = BroadcastList::for_district(&mbarara());
        let before = list.len();

        let number = PhoneNumber::new("+256709998877").unwrap();
        list.append(&number);

        assert_eq!(list.len(), before + 1);
        assert_eq!(list.numbers().last().unwrap(), "+256709998877");
    }

    #[test]
    fn test_lists_are_independent() {
        let district = mbarara();
        let mut first = BroadcastList::for_district(&district);
        let second = BroadcastList::for_district(&district);

        assert_eq!(first, second);

        let number = PhoneNumber::new("+256709998877").unwrap();
        first.append(&number);

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert_eq!(district.phone_numbers.len(), 2);
    }

    #[test]
    fn test_empty_district() {
        let district = District::new("Empty", vec![]);
        let list = BroadcastList::for_district(&district);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
