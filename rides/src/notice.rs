//! Transient user-facing notifications.
//!
//! Every failure a screen can hit collapses into one of these; none of them
//! is a rendered state. The browser shows them in a blocking alert, the CLI
//! prints them.

/// Outcome message for a submitted form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    RideCreated,
    RideCreateFailed,
    LoggedIn,
    InvalidCredentials,
    LoginFailed,
    Registered,
    RegisterFailed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::RideCreated => "Viaje creado con éxito",
            Self::RideCreateFailed => "Error creando el viaje",
            Self::LoggedIn => "Inicio de sesión exitoso",
            Self::InvalidCredentials => "Credenciales incorrectas",
            Self::LoginFailed => "Error al iniciar sesión",
            Self::Registered => "Registro exitoso, ahora puedes iniciar sesión",
            Self::RegisterFailed => "Error al registrarte",
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Self::RideCreateFailed | Self::InvalidCredentials | Self::LoginFailed | Self::RegisterFailed
        )
    }
}
