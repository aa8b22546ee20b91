use super::reference::{District, ReferenceData, SubRegion};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Country {
    Peru,
    Argentina,
    Other,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Peru, Country::Argentina, Country::Other];

    pub fn label(self) -> &'static str {
        match self {
            Country::Peru => "Perú",
            Country::Argentina => "Argentina",
            Country::Other => "Otro",
        }
    }

    pub fn from_label(label: &str) -> Option<Country> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Only Peru has location data to drill into.
    pub fn has_regions(self) -> bool {
        self == Country::Peru
    }
}

/// Country → department → province → district. Setting a level clears
/// everything below it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationSelection {
    pub country: Option<Country>,
    pub region_id: Option<String>,
    pub sub_region_id: Option<String>,
    pub district_name: Option<String>,
    pub address: String,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl LocationSelection {
    pub fn set_country(&mut self, country: Option<Country>) {
        if !country.map_or(false, Country::has_regions) {
            self.clear_region();
        }
        self.country = country;
    }

    pub fn set_region(&mut self, region_id: String) {
        self.region_id = non_empty(region_id);
        self.clear_sub_region();
    }

    pub fn set_sub_region(&mut self, sub_region_id: String) {
        self.sub_region_id = non_empty(sub_region_id);
        self.district_name = None;
    }

    pub fn set_district(&mut self, district_name: String) {
        self.district_name = non_empty(district_name);
    }

    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    fn clear_region(&mut self) {
        self.region_id = None;
        self.clear_sub_region();
    }

    fn clear_sub_region(&mut self) {
        self.sub_region_id = None;
        self.district_name = None;
    }

    pub fn shows_regions(&self) -> bool {
        self.country.map_or(false, Country::has_regions)
    }

    pub fn sub_region_options<'a>(&'a self, data: &'a ReferenceData) -> Vec<&'a SubRegion> {
        match &self.region_id {
            Some(id) => data.sub_regions_of(id).collect(),
            None => Vec::new(),
        }
    }

    pub fn district_options<'a>(&'a self, data: &'a ReferenceData) -> Vec<&'a District> {
        match &self.sub_region_id {
            Some(id) => data.districts_of(id).collect(),
            None => Vec::new(),
        }
    }

    pub fn region_name<'a>(&self, data: &'a ReferenceData) -> &'a str {
        self.region_id
            .as_deref()
            .and_then(|id| data.region(id))
            .map_or("", |r| r.name.as_str())
    }

    pub fn sub_region_name<'a>(&self, data: &'a ReferenceData) -> &'a str {
        self.sub_region_id
            .as_deref()
            .and_then(|id| data.sub_region(id))
            .map_or("", |p| p.name.as_str())
    }

    pub fn district(&self) -> &str {
        self.district_name.as_deref().unwrap_or("")
    }
}

/// Map shown next to the form: the picked address once a district is known,
/// the office otherwise.
pub fn map_embed_url(selection: &LocationSelection, data: &ReferenceData) -> String {
    if selection.district_name.is_none() {
        return config::DEFAULT_MAP_EMBED.to_string();
    }
    let query = format!(
        "{}, {}, {}, {}, {}",
        selection.address,
        selection.district(),
        selection.sub_region_name(data),
        selection.region_name(data),
        Country::Peru.label()
    );
    format!("https://www.google.com/maps?q={}&output=embed", urlencoding::encode(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> &'static ReferenceData {
        ReferenceData::peru()
    }

    fn full_lima_selection() -> LocationSelection {
        let mut sel = LocationSelection::default();
        sel.set_country(Some(Country::Peru));
        sel.set_region("15".into());
        sel.set_sub_region("1501".into());
        sel.set_district("Miraflores".into());
        sel
    }

    #[test]
    fn country_labels_round_trip() {
        for country in Country::ALL {
            assert_eq!(Country::from_label(country.label()), Some(country));
        }
        assert_eq!(Country::from_label(""), None);
    }

    #[test]
    fn changing_region_clears_dependents_and_refilters() {
        let mut sel = full_lima_selection();

        sel.set_region("08".into());

        assert_eq!(sel.sub_region_id, None);
        assert_eq!(sel.district_name, None);
        let options = sel.sub_region_options(data());
        assert!(!options.is_empty());
        assert!(options.iter().all(|p| p.region_id == "08"));
        assert!(options.iter().any(|p| p.name == "Urubamba"));
    }

    #[test]
    fn changing_sub_region_clears_district_only() {
        let mut sel = full_lima_selection();

        sel.set_sub_region("1502".into());

        assert_eq!(sel.region_id.as_deref(), Some("15"));
        assert_eq!(sel.district_name, None);
    }

    #[test]
    fn leaving_peru_clears_every_level() {
        let mut sel = full_lima_selection();
        sel.set_address("Av. Primavera 2390".into());

        sel.set_country(Some(Country::Argentina));

        assert_eq!(sel.region_id, None);
        assert_eq!(sel.sub_region_id, None);
        assert_eq!(sel.district_name, None);
        assert!(!sel.shows_regions());
        assert_eq!(sel.address, "Av. Primavera 2390");
    }

    #[test]
    fn clearing_country_clears_every_level() {
        let mut sel = full_lima_selection();
        sel.set_country(None);
        assert_eq!(sel, LocationSelection::default());
    }

    #[test]
    fn reselecting_peru_keeps_the_selection() {
        let mut sel = full_lima_selection();
        sel.set_country(Some(Country::Peru));
        assert_eq!(sel, full_lima_selection());
    }

    #[test]
    fn option_lists_are_empty_without_parent() {
        let sel = LocationSelection::default();
        assert!(sel.sub_region_options(data()).is_empty());
        assert!(sel.district_options(data()).is_empty());
    }

    #[test]
    fn district_options_never_leak_other_provinces() {
        let sel = full_lima_selection();
        let options = sel.district_options(data());
        assert_eq!(options.len(), 43);
        assert!(options.iter().all(|d| d.sub_region_id == "1501"));
    }

    #[test]
    fn empty_value_unsets_a_level() {
        let mut sel = full_lima_selection();
        sel.set_region(String::new());
        assert_eq!(sel.region_id, None);
        assert!(sel.sub_region_options(data()).is_empty());
    }

    #[test]
    fn names_resolve_through_reference_data() {
        let sel = full_lima_selection();
        assert_eq!(sel.region_name(data()), "Lima");
        assert_eq!(sel.sub_region_name(data()), "Lima");
        assert_eq!(sel.district(), "Miraflores");
        assert_eq!(LocationSelection::default().region_name(data()), "");
    }

    #[test]
    fn map_points_at_office_until_district_known() {
        let mut sel = LocationSelection::default();
        sel.set_country(Some(Country::Peru));
        sel.set_region("15".into());
        assert_eq!(map_embed_url(&sel, data()), config::DEFAULT_MAP_EMBED);
    }

    #[test]
    fn map_queries_full_address() {
        let mut sel = full_lima_selection();
        sel.set_address("Av. Larco 101".into());
        assert_eq!(
            map_embed_url(&sel, data()),
            "https://www.google.com/maps?q=Av.%20Larco%20101%2C%20Miraflores%2C%20Lima%2C%20Lima%2C%20Per%C3%BA&output=embed"
        );
    }
}
