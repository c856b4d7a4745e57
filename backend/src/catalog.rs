use std::{
    collections::HashMap,
    fs::File,
    io::{self, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};
use shared::{CitySummary, Waypoint};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid catalog definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no cities")]
    Empty,
    #[error("duplicate attraction id {0}")]
    DuplicateAttraction(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub slug: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attraction {
    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint {
            id: self.id.clone(),
            lat: self.lat,
            lon: self.lon,
            name: Some(self.name.clone()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    cities: Vec<City>,
}

/// Destination data loaded once at startup and shared read-only across
/// requests. Attraction ids are unique catalog-wide so they can serve as
/// waypoint ids directly.
pub struct Catalog {
    cities: Vec<City>,
    attraction_index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let catalog_file: CatalogFile = serde_json::from_reader(reader)?;
        Self::from_cities(catalog_file.cities)
    }

    pub fn from_cities(cities: Vec<City>) -> Result<Self, CatalogError> {
        if cities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut attraction_index = HashMap::new();
        for (city_idx, city) in cities.iter().enumerate() {
            for (attraction_idx, attraction) in city.attractions.iter().enumerate() {
                let previous = attraction_index
                    .insert(attraction.id.clone(), (city_idx, attraction_idx));
                if previous.is_some() {
                    return Err(CatalogError::DuplicateAttraction(attraction.id.clone()));
                }
            }
        }

        Ok(Self {
            cities,
            attraction_index,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.slug == slug)
    }

    pub fn attraction(&self, id: &str) -> Option<&Attraction> {
        let (city_idx, attraction_idx) = *self.attraction_index.get(id)?;
        Some(&self.cities[city_idx].attractions[attraction_idx])
    }

    pub fn attraction_count(&self) -> usize {
        self.attraction_index.len()
    }

    pub fn summaries(&self) -> Vec<CitySummary> {
        self.cities
            .iter()
            .map(|city| CitySummary {
                slug: city.slug.clone(),
                name: city.name.clone(),
                lat: city.lat,
                lon: city.lon,
                attraction_count: city.attractions.len(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "cities": [
            {
                "slug": "marrakech",
                "name": "Marrakech",
                "lat": 31.6295,
                "lon": -7.9811,
                "attractions": [
                    {
                        "id": "jemaa-el-fnaa",
                        "name": "Jemaa el-Fnaa",
                        "lat": 31.6258,
                        "lon": -7.9891,
                        "category": "square"
                    },
                    {
                        "id": "koutoubia",
                        "name": "Koutoubia Mosque",
                        "lat": 31.6242,
                        "lon": -7.9885,
                        "category": "monument"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_and_lookup() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).expect("catalog");
        assert_eq!(catalog.cities().len(), 1);
        assert_eq!(catalog.attraction_count(), 2);

        let city = catalog.city("marrakech").expect("city");
        assert_eq!(city.name, "Marrakech");
        assert!(catalog.city("fes").is_none());

        let attraction = catalog.attraction("koutoubia").expect("attraction");
        assert_eq!(attraction.name, "Koutoubia Mosque");
        assert!(catalog.attraction("unknown").is_none());
    }

    #[test]
    fn test_attraction_converts_to_waypoint() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).expect("catalog");
        let waypoint = catalog.attraction("jemaa-el-fnaa").unwrap().to_waypoint();
        assert_eq!(waypoint.id, "jemaa-el-fnaa");
        assert_eq!(waypoint.name.as_deref(), Some("Jemaa el-Fnaa"));
        assert_eq!(waypoint.lat, 31.6258);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::from_reader(r#"{"cities": []}"#.as_bytes());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_attraction_id_rejected() {
        let json = r#"{
            "cities": [
                {
                    "slug": "a",
                    "name": "A",
                    "lat": 0.0,
                    "lon": 0.0,
                    "attractions": [
                        {"id": "dup", "name": "One", "lat": 0.0, "lon": 0.0, "category": "x"},
                        {"id": "dup", "name": "Two", "lat": 1.0, "lon": 1.0, "category": "x"}
                    ]
                }
            ]
        }"#;
        let result = Catalog::from_reader(json.as_bytes());
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateAttraction(id)) if id == "dup"
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let catalog = Catalog::from_file(file.path()).expect("catalog");
        assert_eq!(catalog.cities().len(), 1);

        assert!(matches!(
            Catalog::from_file("does/not/exist.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
