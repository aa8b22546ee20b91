//! Peru's departments, provinces and districts, keyed by ubigeo code.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Region {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SubRegion {
    pub id: String,
    pub name: String,
    #[serde(rename = "department_id")]
    pub region_id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct District {
    pub id: String,
    pub name: String,
    #[serde(rename = "province_id")]
    pub sub_region_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceData {
    pub regions: Vec<Region>,
    pub sub_regions: Vec<SubRegion>,
    pub districts: Vec<District>,
}

const DEPARTAMENTOS: &str = include_str!("../../data/departamentos.json");
const PROVINCIAS: &str = include_str!("../../data/provincias.json");
const DISTRITOS: &str = include_str!("../../data/distritos.json");

static PERU: Lazy<ReferenceData> = Lazy::new(|| {
    match ReferenceData::from_json(DEPARTAMENTOS, PROVINCIAS, DISTRITOS) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to parse bundled location data: {}", e);
            ReferenceData::default()
        }
    }
});

impl ReferenceData {
    pub fn from_json(regions: &str, sub_regions: &str, districts: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            regions: serde_json::from_str(regions)?,
            sub_regions: serde_json::from_str(sub_regions)?,
            districts: serde_json::from_str(districts)?,
        })
    }

    /// Dataset bundled with the site.
    pub fn peru() -> &'static ReferenceData {
        &PERU
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn sub_region(&self, id: &str) -> Option<&SubRegion> {
        self.sub_regions.iter().find(|p| p.id == id)
    }

    pub fn sub_regions_of<'a>(&'a self, region_id: &'a str) -> impl Iterator<Item = &'a SubRegion> + 'a {
        self.sub_regions.iter().filter(move |p| p.region_id == region_id)
    }

    pub fn districts_of<'a>(&'a self, sub_region_id: &'a str) -> impl Iterator<Item = &'a District> + 'a {
        self.districts.iter().filter(move |d| d.sub_region_id == sub_region_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses() {
        let data = ReferenceData::from_json(DEPARTAMENTOS, PROVINCIAS, DISTRITOS).unwrap();
        assert_eq!(data.regions.len(), 25);
        assert_eq!(data.region("15").map(|r| r.name.as_str()), Some("Lima"));
        assert_eq!(data.region("08").map(|r| r.name.as_str()), Some("Cusco"));
    }

    #[test]
    fn every_child_points_at_an_existing_parent() {
        let data = ReferenceData::peru();
        assert!(data.sub_regions.iter().all(|p| data.region(&p.region_id).is_some()));
        assert!(data.districts.iter().all(|d| data.sub_region(&d.sub_region_id).is_some()));
    }

    #[test]
    fn ids_are_unique() {
        let data = ReferenceData::peru();
        let mut ids: Vec<&str> = data.sub_regions.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), data.sub_regions.len());
    }

    #[test]
    fn children_are_filtered_by_parent() {
        let data = ReferenceData::peru();
        let lima: Vec<&str> = data.sub_regions_of("15").map(|p| p.name.as_str()).collect();
        assert_eq!(lima.first(), Some(&"Lima"));
        assert!(!lima.contains(&"Cusco"));
        assert!(data.districts_of("1501").any(|d| d.name == "Santiago de Surco"));
        assert_eq!(data.districts_of("nope").count(), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ReferenceData::from_json("[{\"id\": 1}]", "[]", "[]").is_err());
    }
}
