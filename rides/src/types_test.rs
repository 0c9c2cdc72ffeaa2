use super::*;
use chrono::NaiveDate;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid date")
}

fn sample_ride() -> RideOffer {
    RideOffer {
        id: None,
        start_point: "Campus".to_owned(),
        end_point: "Centro".to_owned(),
        route: "Av. 30".to_owned(),
        departure_time: at(7, 30),
        available_seats: 3,
        fare: 5000.0,
        status: RideStatus::Available,
    }
}

// =============================================================
// RideOffer wire shape
// =============================================================

#[test]
fn ride_offer_serializes_backend_keys_without_id() {
    let json = serde_json::to_value(sample_ride()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "puntoInicio": "Campus",
            "puntoFinal": "Centro",
            "ruta": "Av. 30",
            "horaSalida": "2025-03-14T07:30:00",
            "cuposDisponibles": 3,
            "tarifa": 5000.0,
            "estado": "DISPONIBLE"
        })
    );
}

#[test]
fn ride_list_decodes_in_server_order() {
    let body = r#"[
        {"id": 9, "puntoInicio": "A", "puntoFinal": "B", "ruta": "r1",
         "horaSalida": "2025-03-14T09:00:00", "cuposDisponibles": 1, "tarifa": 10, "estado": "COMPLETO"},
        {"id": 2, "puntoInicio": "C", "puntoFinal": "D", "ruta": "r2",
         "horaSalida": "2025-03-14T07:30", "cuposDisponibles": 4, "tarifa": 2.5, "estado": "DISPONIBLE",
         "conductor": {"id": 6}}
    ]"#;
    let rides: Vec<RideOffer> = serde_json::from_str(body).expect("decode");
    assert_eq!(rides.iter().map(|r| r.id).collect::<Vec<_>>(), vec![Some(9), Some(2)]);
    assert_eq!(rides[0].status, RideStatus::Full);
    assert_eq!(rides[1].departure_time, at(7, 30));
}

#[test]
fn unknown_status_decodes_as_unknown() {
    let status: RideStatus = serde_json::from_str("\"RESERVADO\"").expect("decode");
    assert_eq!(status, RideStatus::Unknown);
}

#[test]
fn missing_status_defaults_to_available() {
    let body = r#"{"puntoInicio": "A", "puntoFinal": "B", "ruta": "r",
        "horaSalida": "2025-03-14T07:30:00", "cuposDisponibles": 1, "tarifa": 1}"#;
    let ride: RideOffer = serde_json::from_str(body).expect("decode");
    assert_eq!(ride.status, RideStatus::Available);
    assert_eq!(ride.id, None);
}

#[test]
fn departure_time_accepts_rfc3339_offsets() {
    assert_eq!(departure_time::parse("2025-03-14T07:30:00Z"), Some(at(7, 30)));
    assert_eq!(departure_time::parse("2025-03-14T07:30:00.250-05:00").map(|t| t.format("%H:%M").to_string()), Some("07:30".to_owned()));
}

#[test]
fn one_odd_record_does_not_fail_the_list() {
    let body = r#"[
        {"id": 1, "puntoInicio": "A", "puntoFinal": "B", "ruta": "r1",
         "horaSalida": "2025-03-14T07:30:00", "cuposDisponibles": 1, "tarifa": 10, "estado": "DISPONIBLE"},
        {"id": 2, "puntoInicio": "C", "puntoFinal": "D", "ruta": null,
         "horaSalida": "2025-03-14T07:30:00Z", "cuposDisponibles": 2, "tarifa": 5, "estado": null}
    ]"#;
    let rides: Vec<RideOffer> = serde_json::from_str(body).expect("decode");
    assert_eq!(rides.len(), 2);
    assert_eq!(rides[1].route, "");
    assert_eq!(rides[1].departure_time, at(7, 30));
    assert_eq!(rides[1].status, RideStatus::Available);
}

#[test]
fn missing_text_fields_decode_empty() {
    let body = r#"{"horaSalida": "2025-03-14T07:30", "cuposDisponibles": 1, "tarifa": 1}"#;
    let ride: RideOffer = serde_json::from_str(body).expect("decode");
    assert!(ride.start_point.is_empty());
    assert_eq!(ride.heading(), " → ");
}

#[test]
fn invalid_departure_time_is_rejected() {
    let body = r#"{"puntoInicio": "A", "puntoFinal": "B", "ruta": "r",
        "horaSalida": "mañana", "cuposDisponibles": 1, "tarifa": 1}"#;
    assert!(serde_json::from_str::<RideOffer>(body).is_err());
}

// =============================================================
// departure_time
// =============================================================

#[test]
fn departure_time_parses_fractional_seconds() {
    assert_eq!(departure_time::parse("2025-03-14T07:30:00.250").map(|t| t.date()), Some(at(7, 30).date()));
}

#[test]
fn departure_time_parses_datetime_local_input() {
    assert_eq!(departure_time::parse(" 2025-03-14T07:30 "), Some(at(7, 30)));
}

#[test]
fn departure_time_rejects_date_only() {
    assert_eq!(departure_time::parse("2025-03-14"), None);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn ride_labels_format_for_display() {
    let ride = sample_ride();
    assert_eq!(ride.heading(), "Campus → Centro");
    assert_eq!(ride.departure_label(), "14/03/2025 07:30");
    assert_eq!(ride.fare_label(), "$5000.00");
}

#[test]
fn status_labels_are_distinct() {
    assert_eq!(RideStatus::Available.label(), "Disponible");
    assert_ne!(RideStatus::Full.label(), RideStatus::Unknown.label());
}

// =============================================================
// Form bodies
// =============================================================

#[test]
fn registration_profile_uses_backend_keys() {
    let profile = RegistrationProfile {
        first_name: "Ana".to_owned(),
        last_name: "Lopez".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p1".to_owned(),
        phone: "555".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&profile).expect("serialize"),
        serde_json::json!({
            "nombre": "Ana",
            "apellido": "Lopez",
            "correo": "a@x.com",
            "contraseña": "p1",
            "telefono": "555"
        })
    );
}

#[test]
fn credentials_debug_redacts_password() {
    let credentials = Credentials { email: "a@x.com".to_owned(), password: "hunter2".to_owned() };
    let rendered = format!("{credentials:?}");
    assert!(rendered.contains("a@x.com"));
    assert!(!rendered.contains("hunter2"));
}
