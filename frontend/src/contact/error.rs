use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    School,
    Name,
    Position,
    Email,
    Vehicles,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::School => "school",
            Field::Name => "name",
            Field::Position => "position",
            Field::Email => "email",
            Field::Vehicles => "vehicles",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("missing or invalid {} field", .0.label())]
    Invalid(Field),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("mail relay answered with status {status}")]
    Relay { status: u16 },
}

pub const SUCCESS_NOTICE: &str = "¡Gracias! Recibimos tu solicitud y te contactaremos pronto.";
pub const FAILURE_NOTICE: &str = "No pudimos enviar tu solicitud. Inténtalo nuevamente en unos minutos.";

impl ContactError {
    /// What the visitor sees. Delivery problems all read the same.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Invalid(Field::School) => "Ingresa el nombre de tu colegio.",
            ContactError::Invalid(Field::Name) => "Ingresa tu nombre.",
            ContactError::Invalid(Field::Position) => "Selecciona tu cargo.",
            ContactError::Invalid(Field::Email) => "Ingresa un correo electrónico válido.",
            ContactError::Invalid(Field::Vehicles) => "El número de vehículos debe ser un entero positivo.",
            ContactError::Encode(_) | ContactError::Network(_) | ContactError::Relay { .. } => FAILURE_NOTICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_failures_share_one_message() {
        let errors = [
            ContactError::Encode("x".into()),
            ContactError::Network("offline".into()),
            ContactError::Relay { status: 400 },
        ];
        assert!(errors.iter().all(|e| e.user_message() == FAILURE_NOTICE));
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(ContactError::Invalid(Field::Email).to_string(), "missing or invalid email field");
        assert_eq!(ContactError::Relay { status: 412 }.to_string(), "mail relay answered with status 412");
    }
}
