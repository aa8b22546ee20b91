use serde::Serialize;

use super::error::{ContactError, Field};
use crate::location::picker::LocationSelection;
use crate::location::reference::ReferenceData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Director,
    Coordinator,
    Transport,
    Admin,
    Other,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Director,
        Position::Coordinator,
        Position::Transport,
        Position::Admin,
        Position::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Director => "Director(a)",
            Position::Coordinator => "Coordinador(a) académico",
            Position::Transport => "Encargado(a) de transporte",
            Position::Admin => "Administrador(a)",
            Position::Other => "Otro",
        }
    }

    pub fn from_label(label: &str) -> Option<Position> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub school: String,
    pub name: String,
    pub position: Option<Position>,
    pub email: String,
    pub vehicles: String,
    pub location: LocationSelection,
}

/// Template parameters of the inquiry mail. Keys follow the relay template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InquiryParams {
    pub school: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub vehicles: String,
    pub country: String,
    #[serde(rename = "departamento")]
    pub region: String,
    #[serde(rename = "provincia")]
    pub sub_region: String,
    #[serde(rename = "distrito")]
    pub district: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AcknowledgmentParams {
    pub name: String,
    pub email: String,
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.school.trim().is_empty() {
            return Err(ContactError::Invalid(Field::School));
        }
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid(Field::Name));
        }
        if self.position.is_none() {
            return Err(ContactError::Invalid(Field::Position));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Invalid(Field::Email));
        }
        let vehicles = self.vehicles.trim();
        if !vehicles.is_empty() && vehicles.parse::<u32>().is_err() {
            return Err(ContactError::Invalid(Field::Vehicles));
        }
        Ok(())
    }

    /// Human-readable copy of the form, location ids resolved to names.
    pub fn inquiry(&self, data: &ReferenceData) -> InquiryParams {
        let location = &self.location;
        InquiryParams {
            school: self.school.trim().to_string(),
            name: self.name.trim().to_string(),
            position: self.position.map_or("", Position::label).to_string(),
            email: self.email.trim().to_string(),
            vehicles: self.vehicles.trim().to_string(),
            country: location.country.map_or("", |c| c.label()).to_string(),
            region: location.region_name(data).to_string(),
            sub_region: location.sub_region_name(data).to_string(),
            district: location.district().to_string(),
            address: location.address.trim().to_string(),
        }
    }

    pub fn acknowledgment(&self) -> AcknowledgmentParams {
        AcknowledgmentParams {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::picker::Country;

    fn filled() -> ContactForm {
        let mut form = ContactForm {
            school: "Colegio Trilce".into(),
            name: " Ana Torres ".into(),
            position: Some(Position::Director),
            email: "ana@trilce.edu.pe".into(),
            vehicles: "12".into(),
            ..Default::default()
        };
        form.location.set_country(Some(Country::Peru));
        form.location.set_region("15".into());
        form.location.set_sub_region("1501".into());
        form.location.set_district("Santiago de Surco".into());
        form.location.set_address("Prolongación Primavera 2390".into());
        form
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.school = "  ".into();
        form.email = String::new();
        assert_eq!(form.validate(), Err(ContactError::Invalid(Field::School)));

        let mut form = filled();
        form.position = None;
        assert_eq!(form.validate(), Err(ContactError::Invalid(Field::Position)));
    }

    #[test]
    fn email_must_have_local_part_and_domain() {
        for bad in ["ana", "@trilce.pe", "ana@trilce", "ana@.pe", "ana @trilce.pe"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(ContactError::Invalid(Field::Email)), "{bad}");
        }
    }

    #[test]
    fn vehicles_optional_but_numeric() {
        let mut form = filled();
        form.vehicles = String::new();
        assert_eq!(form.validate(), Ok(()));
        form.vehicles = "-3".into();
        assert_eq!(form.validate(), Err(ContactError::Invalid(Field::Vehicles)));
        form.vehicles = "muchos".into();
        assert_eq!(form.validate(), Err(ContactError::Invalid(Field::Vehicles)));
    }

    #[test]
    fn inquiry_resolves_location_names() {
        let params = filled().inquiry(ReferenceData::peru());
        assert_eq!(params.name, "Ana Torres");
        assert_eq!(params.position, "Director(a)");
        assert_eq!(params.country, "Perú");
        assert_eq!(params.region, "Lima");
        assert_eq!(params.sub_region, "Lima");
        assert_eq!(params.district, "Santiago de Surco");
    }

    #[test]
    fn inquiry_serializes_with_template_keys() {
        let value = serde_json::to_value(filled().inquiry(ReferenceData::peru())).unwrap();
        assert_eq!(value["departamento"], "Lima");
        assert_eq!(value["provincia"], "Lima");
        assert_eq!(value["distrito"], "Santiago de Surco");
        assert_eq!(value["vehicles"], "12");
    }

    #[test]
    fn inquiry_outside_peru_leaves_location_blank() {
        let mut form = filled();
        form.location.set_country(Some(Country::Other));
        let params = form.inquiry(ReferenceData::peru());
        assert_eq!(params.country, "Otro");
        assert_eq!((params.region.as_str(), params.sub_region.as_str(), params.district.as_str()), ("", "", ""));
    }

    #[test]
    fn acknowledgment_carries_name_and_email() {
        assert_eq!(
            filled().acknowledgment(),
            AcknowledgmentParams { name: "Ana Torres".into(), email: "ana@trilce.edu.pe".into() }
        );
    }

    #[test]
    fn position_labels_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_label(position.label()), Some(position));
        }
    }
}
