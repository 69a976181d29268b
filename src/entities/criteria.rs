use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::entities::{Attribute, Coordinates};
use crate::error::{invalid_criteria_error, Error};

/// Allow-sets per categorical field plus the distance bound. An empty set
/// matches nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub categories: BTreeSet<String>,
    pub age_groups: BTreeSet<String>,
    pub moods: BTreeSet<String>,
    pub price_levels: BTreeSet<String>,
    pub accessibility: BTreeSet<String>,
    pub max_distance_km: f64,
    pub center: Coordinates,
}

/// Distinct values per categorical field, in first-seen catalog order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub age_groups: Vec<String>,
    pub moods: Vec<String>,
    pub price_levels: Vec<String>,
    pub accessibility: Vec<String>,
}

/// Criteria as submitted by the visitor. The center is fixed by configuration
/// and is not part of the update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaUpdate {
    pub categories: BTreeSet<String>,
    pub age_groups: BTreeSet<String>,
    pub moods: BTreeSet<String>,
    pub price_levels: BTreeSet<String>,
    pub accessibility: BTreeSet<String>,
    pub max_distance_km: f64,
}

impl FilterCriteria {
    pub fn all_selected(options: &FilterOptions, center: Coordinates, max_distance_km: f64) -> Self {
        let collect = |values: &Vec<String>| values.iter().cloned().collect::<BTreeSet<_>>();

        Self {
            categories: collect(&options.categories),
            age_groups: collect(&options.age_groups),
            moods: collect(&options.moods),
            price_levels: collect(&options.price_levels),
            accessibility: collect(&options.accessibility),
            max_distance_km,
            center,
        }
    }

    pub fn allowed(&self, field: Attribute) -> &BTreeSet<String> {
        match field {
            Attribute::Category => &self.categories,
            Attribute::AgeGroup => &self.age_groups,
            Attribute::Mood => &self.moods,
            Attribute::PriceLevel => &self.price_levels,
            Attribute::Accessibility => &self.accessibility,
        }
    }
}

impl FilterOptions {
    pub fn values(&self, field: Attribute) -> &[String] {
        match field {
            Attribute::Category => &self.categories,
            Attribute::AgeGroup => &self.age_groups,
            Attribute::Mood => &self.moods,
            Attribute::PriceLevel => &self.price_levels,
            Attribute::Accessibility => &self.accessibility,
        }
    }

    pub(crate) fn values_mut(&mut self, field: Attribute) -> &mut Vec<String> {
        match field {
            Attribute::Category => &mut self.categories,
            Attribute::AgeGroup => &mut self.age_groups,
            Attribute::Mood => &mut self.moods,
            Attribute::PriceLevel => &mut self.price_levels,
            Attribute::Accessibility => &mut self.accessibility,
        }
    }
}

impl CriteriaUpdate {
    pub fn into_criteria(
        self,
        center: Coordinates,
        bounds: RangeInclusive<f64>,
    ) -> Result<FilterCriteria, Error> {
        if !self.max_distance_km.is_finite() || !bounds.contains(&self.max_distance_km) {
            return Err(invalid_criteria_error(format!(
                "max_distance_km must be between {} and {}, got {}",
                bounds.start(),
                bounds.end(),
                self.max_distance_km
            )));
        }

        Ok(FilterCriteria {
            categories: self.categories,
            age_groups: self.age_groups,
            moods: self.moods,
            price_levels: self.price_levels,
            accessibility: self.accessibility,
            max_distance_km: self.max_distance_km,
            center,
        })
    }
}
