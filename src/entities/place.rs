use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// One row of the catalog. `name` is the key used by every session lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub age_group: String,
    pub mood: String,
    pub price_level: String,
    pub accessibility: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub image: String,
}

impl Place {
    /// Value of the categorical field `field` for this place.
    pub fn attribute(&self, field: Attribute) -> &str {
        match field {
            Attribute::Category => &self.category,
            Attribute::AgeGroup => &self.age_group,
            Attribute::Mood => &self.mood,
            Attribute::PriceLevel => &self.price_level,
            Attribute::Accessibility => &self.accessibility,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Category,
    AgeGroup,
    Mood,
    PriceLevel,
    Accessibility,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Category,
        Attribute::AgeGroup,
        Attribute::Mood,
        Attribute::PriceLevel,
        Attribute::Accessibility,
    ];
}
