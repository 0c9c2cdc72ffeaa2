use super::*;
use rides::RideStatus;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("wheels").chain(args.iter().copied())).expect("parse")
}

fn sample_ride() -> RideOffer {
    let mut draft = RideDraft::default();
    draft.set_field("puntoInicio", "Campus");
    draft.set_field("puntoFinal", "Centro");
    draft.set_field("ruta", "Av. 30");
    draft.set_field("horaSalida", "2025-03-14T07:30");
    draft.set_field("cuposDisponibles", "3");
    draft.set_field("tarifa", "4500");
    draft.to_offer().expect("offer")
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn global_options_have_defaults() {
    let cli = parse(&["logout"]);
    assert!(matches!(cli.command, Command::Logout));
    if std::env::var_os("WHEELS_BASE_URL").is_none() {
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }
}

#[test]
fn register_args_bind_backend_fields() {
    let cli = parse(&[
        "register",
        "--first-name",
        "Ana",
        "--last-name",
        "Lopez",
        "--email",
        "a@x.com",
        "--password",
        "p1",
        "--phone",
        "555",
    ]);
    let Command::Register(args) = cli.command else {
        panic!("expected register");
    };
    let profile = args.profile();
    assert_eq!(profile.field("nombre"), Some("Ana"));
    assert_eq!(profile.field("apellido"), Some("Lopez"));
    assert_eq!(profile.field("correo"), Some("a@x.com"));
    assert_eq!(profile.field("contraseña"), Some("p1"));
    assert_eq!(profile.field("telefono"), Some("555"));
    assert_eq!(profile.first_missing(), None);
}

#[test]
fn login_args_bind_credentials() {
    let cli = parse(&["login", "--email", "a@x.com", "--password", "p1"]);
    let Command::Login(args) = cli.command else {
        panic!("expected login");
    };
    let credentials = args.credentials();
    assert_eq!(credentials.field("correo"), Some("a@x.com"));
    assert_eq!(credentials.field("contraseña"), Some("p1"));
}

#[test]
fn rides_create_builds_a_valid_draft() {
    let cli = parse(&[
        "rides",
        "create",
        "--from",
        "Campus",
        "--to",
        "Centro",
        "--route",
        "Av. 30",
        "--departure",
        "2025-03-14T07:30",
        "--seats",
        "3",
        "--fare",
        "4500",
    ]);
    let Command::Rides(RidesCommand { command: RidesSubcommand::Create(args) }) = cli.command else {
        panic!("expected rides create");
    };
    let offer = args.draft().to_offer().expect("offer");
    assert_eq!(offer, sample_ride());
    assert_eq!(offer.status, RideStatus::Available);
}

#[test]
fn rides_create_requires_every_field() {
    let result = Cli::try_parse_from(["wheels", "rides", "create", "--from", "Campus"]);
    assert!(result.is_err());
}

// =============================================================
// Output
// =============================================================

#[test]
fn report_prints_success_and_fails_on_error_notices() {
    assert!(report(Notice::LoggedIn).is_ok());
    let err = report(Notice::InvalidCredentials).expect_err("failure");
    assert_eq!(err.to_string(), "Credenciales incorrectas");
}

#[test]
fn finish_without_notice_succeeds() {
    assert!(finish(Transition::default()).is_ok());
}

#[test]
fn missing_session_points_at_login() {
    let err = CliError::from(SessionError::MissingToken);
    assert_eq!(err.to_string(), "no session token stored; run `wheels login` first");
}

#[test]
fn write_rides_renders_empty_placeholder() {
    let mut out = Vec::new();
    write_rides(&mut out, &[]).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), "No hay viajes aún\n");
}

#[test]
fn write_rides_renders_each_ride_in_order() {
    let mut second = sample_ride();
    second.start_point = "Norte".to_owned();
    let mut out = Vec::new();
    write_rides(&mut out, &[sample_ride(), second]).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    let first_at = text.find("Campus").expect("first");
    let second_at = text.find("Norte").expect("second");
    assert!(first_at < second_at);
    assert!(text.contains("14/03/2025 07:30"));
    assert!(text.contains("cupos:   3"));
}
