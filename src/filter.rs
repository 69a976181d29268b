use crate::distance::{distance_km, within};
use crate::entities::{Attribute, FilterCriteria, Place};

/// Whether `place` satisfies every allow-set and the distance bound.
pub fn matches(place: &Place, criteria: &FilterCriteria) -> bool {
    matches_attributes(place, criteria)
        && within(criteria.center, place.coordinates, criteria.max_distance_km)
}

fn matches_attributes(place: &Place, criteria: &FilterCriteria) -> bool {
    Attribute::ALL
        .iter()
        .all(|field| criteria.allowed(*field).contains(place.attribute(*field)))
}

/// Stable filter over the catalog: output keeps catalog order.
pub fn filter<'a>(places: &'a [Place], criteria: &FilterCriteria) -> Vec<&'a Place> {
    places.iter().filter(|place| matches(place, criteria)).collect()
}

/// Like [`filter`], paired with each place's distance from the center.
pub fn filter_with_distance<'a>(
    places: &'a [Place],
    criteria: &FilterCriteria,
) -> Vec<(&'a Place, f64)> {
    places
        .iter()
        .filter(|place| matches_attributes(place, criteria))
        .map(|place| (place, distance_km(criteria.center, place.coordinates)))
        .filter(|(_, distance)| *distance <= criteria.max_distance_km)
        .collect()
}
