use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{FilterCriteria, Itinerary, Place, Rating};
use crate::error::Error;

/// Personal collections of one visitor. Lookups of unknown place names read
/// as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub favorites: BTreeSet<String>,
    /// In first-rated order. Re-rating a place keeps its position.
    pub ratings: Vec<(String, Rating)>,
    pub visited: BTreeMap<String, NaiveDate>,
    pub itinerary: Itinerary,
}

impl SessionState {
    /// Flips membership of `place` and returns the new membership.
    pub fn toggle_favorite(&mut self, place: &str) -> bool {
        if self.favorites.remove(place) {
            return false;
        }

        self.favorites.insert(place.to_string());
        true
    }

    pub fn is_favorite(&self, place: &str) -> bool {
        self.favorites.contains(place)
    }

    /// Overwrites any earlier rating. An invalid value leaves the state untouched.
    pub fn set_rating(&mut self, place: &str, value: i64) -> Result<Rating, Error> {
        let rating = Rating::new(value)?;

        match self.ratings.iter_mut().find(|(name, _)| name == place) {
            Some((_, current)) => *current = rating,
            None => self.ratings.push((place.to_string(), rating)),
        }

        Ok(rating)
    }

    pub fn rating(&self, place: &str) -> Option<Rating> {
        self.ratings
            .iter()
            .find(|(name, _)| name == place)
            .map(|(_, rating)| *rating)
    }

    /// Last write wins.
    pub fn mark_visited(&mut self, place: &str, when: NaiveDate) {
        self.visited.insert(place.to_string(), when);
    }

    pub fn visited_on(&self, place: &str) -> Option<NaiveDate> {
        self.visited.get(place).copied()
    }

    /// Highest rated place; ties go to the place rated first.
    pub fn top_rated(&self) -> Option<(&str, Rating)> {
        let mut best: Option<(&str, Rating)> = None;

        for (name, rating) in &self.ratings {
            match best {
                Some((_, top)) if top >= *rating => {}
                _ => best = Some((name.as_str(), *rating)),
            }
        }

        best
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub visitor_name: Option<String>,
    pub started_at: DateTime<Utc>,
    pub state: SessionState,
    /// `None` until the visitor customizes the filters.
    pub criteria: Option<FilterCriteria>,
    /// Sticky discovery pick, cleared whenever the criteria change.
    pub pick: Option<Place>,
}

impl Session {
    pub fn new(visitor_name: Option<String>) -> Self {
        let visitor_name = visitor_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            id: Uuid::new_v4(),
            visitor_name,
            started_at: Utc::now(),
            state: SessionState::default(),
            criteria: None,
            pick: None,
        }
    }

    pub fn greeting(&self) -> Option<String> {
        self.visitor_name
            .as_ref()
            .map(|name| format!("Welcome to Djerba, {}!", name))
    }

    pub fn is_customized(&self) -> bool {
        self.criteria.is_some()
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = Some(criteria);
        self.pick = None;
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = None;
        self.pick = None;
    }
}
