//! Wire DTOs for the Wheels REST backend.
//!
//! DESIGN
//! ======
//! Rust field names are English; JSON keys follow the backend's schema
//! through `serde(rename)` so request bodies match what the server expects
//! and list payloads decode without a mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a ride offer as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideStatus {
    /// Open for bookings. Every ride created from the client starts here.
    #[default]
    #[serde(rename = "DISPONIBLE")]
    Available,
    /// No seats left.
    #[serde(rename = "COMPLETO")]
    Full,
    #[serde(rename = "EN_CURSO")]
    InProgress,
    #[serde(rename = "FINALIZADO")]
    Finished,
    #[serde(rename = "CANCELADO")]
    Cancelled,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl RideStatus {
    /// Human-readable label for list rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Full => "Completo",
            Self::InProgress => "En curso",
            Self::Finished => "Finalizado",
            Self::Cancelled => "Cancelado",
            Self::Unknown => "Desconocido",
        }
    }
}

/// A single scheduled ride.
///
/// The canonical copy lives server-side; the client only holds the list it
/// last fetched and the draft it is about to post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideOffer {
    /// Server-assigned identifier, used as the list key. Never sent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "puntoInicio", default, deserialize_with = "null_as_default")]
    pub start_point: String,
    #[serde(rename = "puntoFinal", default, deserialize_with = "null_as_default")]
    pub end_point: String,
    /// Free-form route description.
    #[serde(rename = "ruta", default, deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(rename = "horaSalida", with = "departure_time")]
    pub departure_time: NaiveDateTime,
    #[serde(rename = "cuposDisponibles")]
    pub available_seats: u32,
    #[serde(rename = "tarifa")]
    pub fare: f64,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub status: RideStatus,
}

impl RideOffer {
    /// `"origin → destination"` heading used by list views.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} → {}", self.start_point, self.end_point)
    }

    /// Departure time in the day-first local format shown to users.
    #[must_use]
    pub fn departure_label(&self) -> String {
        self.departure_time.format("%d/%m/%Y %H:%M").to_string()
    }

    /// Fare with a currency sign and two decimals.
    #[must_use]
    pub fn fare_label(&self) -> String {
        format!("${:.2}", self.fare)
    }
}

/// Decode `null` or an absent key as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter for ride departure times.
///
/// Serializes as `YYYY-MM-DDTHH:MM:SS`. Accepts that form (with optional
/// fractional seconds), the browser `datetime-local` form `YYYY-MM-DDTHH:MM`,
/// and RFC 3339 with a `Z` or numeric offset, kept as the wall-clock time at
/// that offset.
pub mod departure_time {
    use chrono::{DateTime, NaiveDateTime};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    /// Parse any accepted departure-time form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|at| at.naive_local()))
    }

    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(WIRE_FORMAT))
    }

    /// # Errors
    ///
    /// Fails when the value is not a string in one of the accepted forms.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid departure time: {raw}")))
    }
}

/// Login form body.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contraseña")]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form body.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contraseña")]
    pub password: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}
