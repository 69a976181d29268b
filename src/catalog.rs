use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::entities::{Attribute, Coordinates, FilterOptions, Place};
use crate::error::{catalog_error, Error};

/// Immutable table of places, loaded once and shared read-only.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    places: Vec<Place>,
    index: HashMap<String, usize>,
    options: FilterOptions,
}

/// A catalog row as it appears in the source, before validation.
#[derive(Debug, Deserialize)]
struct Row {
    name: String,
    category: String,
    age_group: String,
    mood: String,
    price_level: String,
    accessibility: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}

impl Row {
    fn into_place(self, line: usize) -> Result<Place, Error> {
        let (latitude, longitude) = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Err(catalog_error(format!(
                    "row {} ({:?}): missing coordinates",
                    line, self.name
                )))
            }
        };

        Ok(Place {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            age_group: self.age_group.trim().to_string(),
            mood: self.mood.trim().to_string(),
            price_level: self.price_level.trim().to_string(),
            accessibility: self.accessibility.trim().to_string(),
            coordinates: Coordinates::new(latitude, longitude),
            description: self.description,
            image: self.image.trim().to_string(),
        })
    }
}

impl Catalog {
    /// Validates names and coordinates. Duplicate names reject the whole catalog.
    pub fn new(places: Vec<Place>) -> Result<Self, Error> {
        let mut index = HashMap::with_capacity(places.len());
        let mut options = FilterOptions::default();

        for (position, place) in places.iter().enumerate() {
            if place.name.trim().is_empty() {
                return Err(catalog_error(format!("place #{} has an empty name", position + 1)));
            }

            if !place.coordinates.is_valid() {
                return Err(catalog_error(format!(
                    "place {:?} has invalid coordinates {:?}",
                    place.name, place.coordinates
                )));
            }

            if let Some(first) = index.insert(place.name.clone(), position) {
                return Err(catalog_error(format!(
                    "duplicate place name {:?} (entries #{} and #{})",
                    place.name,
                    first + 1,
                    position + 1
                )));
            }

            for field in Attribute::ALL {
                let value = place.attribute(field);
                let values = options.values_mut(field);

                if !values.iter().any(|known| known == value) {
                    values.push(value.to_string());
                }
            }
        }

        Ok(Self {
            places,
            index,
            options,
        })
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_reader(file)?,
            Some("csv") => Self::from_csv_reader(file)?,
            other => {
                return Err(catalog_error(format!(
                    "unsupported catalog format: {:?}",
                    other.unwrap_or("")
                )))
            }
        };

        tracing::info!(places = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut places = vec![];

        for (i, row) in reader.deserialize::<Row>().enumerate() {
            // line 1 is the header
            places.push(row?.into_place(i + 2)?);
        }

        Self::new(places)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let rows: Vec<Row> = serde_json::from_reader(reader)?;

        let places = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.into_place(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(places)
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn find(&self, name: &str) -> Option<&Place> {
        self.index.get(name).map(|&position| &self.places[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
