//! Draft form state and field binding.
//!
//! DESIGN
//! ======
//! Forms keep every input as the string the user typed. A change event
//! overwrites exactly one named field; coercion to numbers and timestamps
//! happens once, at submit time, in [`RideDraft::to_offer`].

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::types::{Credentials, RegistrationProfile, RideOffer, RideStatus, departure_time};

/// HTML input type a field is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Number,
    DateTimeLocal,
}

impl InputKind {
    #[must_use]
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::DateTimeLocal => "datetime-local",
        }
    }
}

/// Static description of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name; matches the backend JSON key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

/// A form draft whose fields are addressable by name.
pub trait FieldBinding {
    /// Inputs in render order. All of them are required.
    const FIELDS: &'static [FieldSpec];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Merge one changed field into the draft, leaving the others untouched.
    ///
    /// Returns `false` and changes nothing when `name` is not a field.
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Name of the first required field left empty.
    fn first_missing(&self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|spec| self.field(spec.name).map_or(true, str::is_empty))
            .map(|spec| spec.name)
    }
}

/// Error converting a draft into a request body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("field `{0}` is required")]
    Missing(&'static str),
    #[error("field `{field}` has invalid value `{value}`")]
    Invalid { field: &'static str, value: String },
}

/// In-progress values of the ride creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RideDraft {
    pub start_point: String,
    pub end_point: String,
    pub route: String,
    pub departure_time: String,
    pub available_seats: String,
    pub fare: String,
    /// Sent with every creation request; not exposed as an input.
    pub status: RideStatus,
}

impl RideDraft {
    /// Coerce the draft into a creation body.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Missing`] for the first empty field and
    /// [`DraftError::Invalid`] when a numeric or date-time field does not parse.
    pub fn to_offer(&self) -> Result<RideOffer, DraftError> {
        if let Some(name) = self.first_missing() {
            return Err(DraftError::Missing(name));
        }

        let departure_time = departure_time::parse(&self.departure_time).ok_or_else(|| DraftError::Invalid {
            field: "horaSalida",
            value: self.departure_time.clone(),
        })?;
        let available_seats = self
            .available_seats
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::Invalid { field: "cuposDisponibles", value: self.available_seats.clone() })?;
        let fare = self
            .fare
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|fare| fare.is_finite())
            .ok_or_else(|| DraftError::Invalid { field: "tarifa", value: self.fare.clone() })?;

        Ok(RideOffer {
            id: None,
            start_point: self.start_point.trim().to_owned(),
            end_point: self.end_point.trim().to_owned(),
            route: self.route.trim().to_owned(),
            departure_time,
            available_seats,
            fare,
            status: self.status,
        })
    }
}

impl FieldBinding for RideDraft {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "puntoInicio", label: "Punto de inicio", kind: InputKind::Text },
        FieldSpec { name: "puntoFinal", label: "Punto final", kind: InputKind::Text },
        FieldSpec { name: "ruta", label: "Ruta", kind: InputKind::Text },
        FieldSpec { name: "horaSalida", label: "Hora de salida", kind: InputKind::DateTimeLocal },
        FieldSpec { name: "cuposDisponibles", label: "Cupos disponibles", kind: InputKind::Number },
        FieldSpec { name: "tarifa", label: "Tarifa", kind: InputKind::Number },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "puntoInicio" => &self.start_point,
            "puntoFinal" => &self.end_point,
            "ruta" => &self.route,
            "horaSalida" => &self.departure_time,
            "cuposDisponibles" => &self.available_seats,
            "tarifa" => &self.fare,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "puntoInicio" => Some(&mut self.start_point),
            "puntoFinal" => Some(&mut self.end_point),
            "ruta" => Some(&mut self.route),
            "horaSalida" => Some(&mut self.departure_time),
            "cuposDisponibles" => Some(&mut self.available_seats),
            "tarifa" => Some(&mut self.fare),
            _ => None,
        }
    }
}

impl FieldBinding for Credentials {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "correo", label: "Correo", kind: InputKind::Email },
        FieldSpec { name: "contraseña", label: "Contraseña", kind: InputKind::Password },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "correo" => Some(self.email.as_str()),
            "contraseña" => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "correo" => Some(&mut self.email),
            "contraseña" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl FieldBinding for RegistrationProfile {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "nombre", label: "Nombre", kind: InputKind::Text },
        FieldSpec { name: "apellido", label: "Apellido", kind: InputKind::Text },
        FieldSpec { name: "correo", label: "Correo", kind: InputKind::Email },
        FieldSpec { name: "contraseña", label: "Contraseña", kind: InputKind::Password },
        FieldSpec { name: "telefono", label: "Teléfono", kind: InputKind::Text },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "nombre" => Some(self.first_name.as_str()),
            "apellido" => Some(self.last_name.as_str()),
            "correo" => Some(self.email.as_str()),
            "contraseña" => Some(self.password.as_str()),
            "telefono" => Some(self.phone.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "nombre" => Some(&mut self.first_name),
            "apellido" => Some(&mut self.last_name),
            "correo" => Some(&mut self.email),
            "contraseña" => Some(&mut self.password),
            "telefono" => Some(&mut self.phone),
            _ => None,
        }
    }
}
