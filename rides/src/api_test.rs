use super::*;

// =============================================================
// endpoints
// =============================================================

#[test]
fn create_ride_path_includes_driver_id() {
    let token = crate::session::AuthToken::parse(&format!(
        "eyJ.{}.sig",
        base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, r#"{"sub":"6"}"#)
    ))
    .expect("token");
    let driver = token.driver_id().expect("driver");
    assert_eq!(endpoints::create_ride(&driver), "/viajes/6");
}

#[test]
fn url_joins_without_double_slash() {
    assert_eq!(endpoints::url("http://localhost:8080/", endpoints::RIDES), "http://localhost:8080/viajes");
    assert_eq!(endpoints::url("http://api", endpoints::LOGIN), "http://api/auth/login");
}

// =============================================================
// LoginReply decoding
// =============================================================

#[test]
fn plain_text_token_is_bare() {
    let reply = LoginReply::from_body("eyJhbGciOiJIUzI1NiJ9.e30.sig\n");
    assert_eq!(reply, LoginReply::Bare("eyJhbGciOiJIUzI1NiJ9.e30.sig".to_owned()));
    assert_eq!(reply.into_token().map(|t| t.as_str().to_owned()), Some("eyJhbGciOiJIUzI1NiJ9.e30.sig".to_owned()));
}

#[test]
fn json_string_token_is_bare() {
    let reply = LoginReply::from_body("\"eyJabc\"");
    assert_eq!(reply, LoginReply::Bare("eyJabc".to_owned()));
}

#[test]
fn bare_message_without_prefix_yields_no_token() {
    assert!(LoginReply::from_body("Credenciales inválidas").into_token().is_none());
    assert!(LoginReply::from_body("\"\"").into_token().is_none());
}

#[test]
fn padded_token_string_is_not_trimmed_into_a_token() {
    assert!(LoginReply::from_body("\" eyJabc \"").into_token().is_none());
    assert!(LoginReply::from_body(" eyJabc").into_token().is_none());
}

#[test]
fn numeric_body_is_coerced_to_bare_string() {
    assert_eq!(LoginReply::from_body("401"), LoginReply::Bare("401".to_owned()));
}

#[test]
fn structured_ok_yields_token() {
    let reply = LoginReply::from_body(r#"{"status":"ok","token":"eyJok"}"#);
    assert_eq!(reply, LoginReply::Structured(LoginResult::Ok { token: "eyJok".to_owned() }));
    assert_eq!(reply.into_token().map(|t| t.as_str().to_owned()), Some("eyJok".to_owned()));
}

#[test]
fn structured_error_yields_no_token() {
    let reply = LoginReply::from_body(r#"{"status":"error","message":"bad password"}"#);
    assert_eq!(
        reply,
        LoginReply::Structured(LoginResult::Error { message: Some("bad password".to_owned()) })
    );
    assert!(reply.into_token().is_none());
}

#[test]
fn untagged_object_yields_no_token() {
    assert!(LoginReply::from_body(r#"{"token":"eyJx"}"#).into_token().is_none());
}

#[test]
fn api_error_messages_name_the_failure() {
    let err = ApiError::Status { status: 500, body: "boom".to_owned() };
    assert_eq!(err.to_string(), "server responded 500: boom");
    assert_eq!(ApiError::Unavailable.to_string(), "backend not available in this build");
}
