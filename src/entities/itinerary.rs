use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{index_out_of_bounds_error, Error};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub place: String,
    pub date_added: NaiveDate,
}

/// Ordered trip plan. Entries are append/remove only and duplicates are kept:
/// the same place may be planned on several days.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary {
    entries: Vec<ItineraryEntry>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self))]
    pub fn append(&mut self, place: &str, when: NaiveDate) -> usize {
        self.entries.push(ItineraryEntry {
            place: place.to_string(),
            date_added: when,
        });

        self.entries.len() - 1
    }

    /// Removes the entry at `index`; later entries shift down by one.
    #[tracing::instrument(skip(self))]
    pub fn remove_at(&mut self, index: usize) -> Result<ItineraryEntry, Error> {
        if index >= self.entries.len() {
            return Err(index_out_of_bounds_error(index, self.entries.len()));
        }

        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[ItineraryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ItineraryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn append_keeps_duplicates_in_order() {
        let mut itinerary = Itinerary::new();

        itinerary.append("Guellala", day(1));
        itinerary.append("Guellala", day(2));

        assert_eq!(itinerary.len(), 2);
        assert!(itinerary.entries().iter().all(|e| e.place == "Guellala"));
        assert_eq!(itinerary.get(0).unwrap().date_added, day(1));
        assert_eq!(itinerary.get(1).unwrap().date_added, day(2));
    }

    #[test]
    fn remove_at_shifts_later_entries() {
        let mut itinerary = Itinerary::new();
        itinerary.append("Guellala", day(1));
        itinerary.append("Guellala", day(2));

        let removed = itinerary.remove_at(0).unwrap();

        assert_eq!(removed.date_added, day(1));
        assert_eq!(
            itinerary.entries(),
            &[ItineraryEntry {
                place: "Guellala".into(),
                date_added: day(2)
            }]
        );
    }

    #[test]
    fn remove_middle_entry() {
        let mut itinerary = Itinerary::new();
        for (i, place) in ["A", "B", "C", "D"].iter().enumerate() {
            itinerary.append(place, day(i as u32 + 1));
        }

        itinerary.remove_at(1).unwrap();

        let names: Vec<&str> = itinerary.entries().iter().map(|e| e.place.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn removing_the_only_entry_empties_the_itinerary() {
        let mut itinerary = Itinerary::new();
        itinerary.append("Houmt Souk", day(3));

        itinerary.remove_at(0).unwrap();

        assert!(itinerary.is_empty());
    }

    #[test]
    fn out_of_range_removal_fails_without_change() {
        let mut itinerary = Itinerary::new();
        itinerary.append("Houmt Souk", day(3));

        let err = itinerary.remove_at(1).unwrap_err();

        assert_eq!(err.code, crate::error::INDEX_OUT_OF_BOUNDS);
        assert_eq!(itinerary.len(), 1);
        assert!(Itinerary::new().remove_at(0).is_err());
    }
}
