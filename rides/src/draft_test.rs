use super::*;

fn filled_draft() -> RideDraft {
    let mut draft = RideDraft::default();
    draft.set_field("puntoInicio", "Campus");
    draft.set_field("puntoFinal", "Centro");
    draft.set_field("ruta", "Av. 30");
    draft.set_field("horaSalida", "2025-03-14T07:30");
    draft.set_field("cuposDisponibles", "3");
    draft.set_field("tarifa", "4500.5");
    draft
}

// =============================================================
// Field binding
// =============================================================

#[test]
fn set_field_touches_only_named_field() {
    let mut draft = filled_draft();
    let before = draft.clone();
    assert!(draft.set_field("ruta", "Calle 5"));
    assert_eq!(draft.route, "Calle 5");
    assert_eq!(RideDraft { route: before.route.clone(), ..draft.clone() }, before);
}

#[test]
fn set_field_last_write_wins() {
    let mut draft = RideDraft::default();
    draft.set_field("tarifa", "1");
    draft.set_field("tarifa", "2");
    assert_eq!(draft.field("tarifa"), Some("2"));
}

#[test]
fn set_field_ignores_unknown_names() {
    let mut draft = filled_draft();
    let before = draft.clone();
    assert!(!draft.set_field("estado", "CANCELADO"));
    assert_eq!(draft, before);
}

#[test]
fn every_declared_field_is_bindable() {
    let mut draft = RideDraft::default();
    for spec in RideDraft::FIELDS {
        assert!(draft.set_field(spec.name, "x"), "{} should bind", spec.name);
        assert_eq!(draft.field(spec.name), Some("x"));
    }
    let mut profile = RegistrationProfile::default();
    for spec in RegistrationProfile::FIELDS {
        assert!(profile.set_field(spec.name, "x"), "{} should bind", spec.name);
    }
    let mut credentials = Credentials::default();
    for spec in Credentials::FIELDS {
        assert!(credentials.set_field(spec.name, "x"), "{} should bind", spec.name);
    }
}

#[test]
fn input_kinds_map_to_html_types() {
    let kinds: Vec<_> = RideDraft::FIELDS.iter().map(|f| f.kind.html_type()).collect();
    assert_eq!(kinds, vec!["text", "text", "text", "datetime-local", "number", "number"]);
    assert_eq!(Credentials::FIELDS[0].kind.html_type(), "email");
    assert_eq!(Credentials::FIELDS[1].kind.html_type(), "password");
}

#[test]
fn first_missing_reports_render_order() {
    let mut profile = RegistrationProfile::default();
    assert_eq!(profile.first_missing(), Some("nombre"));
    profile.set_field("nombre", "Ana");
    assert_eq!(profile.first_missing(), Some("apellido"));
}

// =============================================================
// RideDraft::to_offer
// =============================================================

#[test]
fn default_draft_is_empty_and_available() {
    let draft = RideDraft::default();
    assert!(draft.start_point.is_empty());
    assert!(draft.fare.is_empty());
    assert_eq!(draft.status, RideStatus::Available);
}

#[test]
fn to_offer_coerces_fields() {
    let offer = filled_draft().to_offer().expect("offer");
    assert_eq!(offer.id, None);
    assert_eq!(offer.start_point, "Campus");
    assert_eq!(offer.available_seats, 3);
    assert!((offer.fare - 4500.5).abs() < f64::EPSILON);
    assert_eq!(offer.departure_time.to_string(), "2025-03-14 07:30:00");
    assert_eq!(offer.status, RideStatus::Available);
}

#[test]
fn to_offer_requires_every_field() {
    let mut draft = filled_draft();
    draft.set_field("puntoFinal", "");
    assert_eq!(draft.to_offer(), Err(DraftError::Missing("puntoFinal")));
}

#[test]
fn to_offer_rejects_non_numeric_seats() {
    let mut draft = filled_draft();
    draft.set_field("cuposDisponibles", "-1");
    assert_eq!(
        draft.to_offer(),
        Err(DraftError::Invalid { field: "cuposDisponibles", value: "-1".to_owned() })
    );
}

#[test]
fn to_offer_rejects_non_finite_fare() {
    let mut draft = filled_draft();
    draft.set_field("tarifa", "NaN");
    assert!(matches!(draft.to_offer(), Err(DraftError::Invalid { field: "tarifa", .. })));
}

#[test]
fn to_offer_rejects_bad_departure_time() {
    let mut draft = filled_draft();
    draft.set_field("horaSalida", "14/03/2025");
    assert!(matches!(draft.to_offer(), Err(DraftError::Invalid { field: "horaSalida", .. })));
}
