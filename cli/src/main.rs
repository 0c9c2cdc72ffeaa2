//! Terminal client for the Wheels ride-sharing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each subcommand mirrors one browser screen and runs the same flow from
//! `rides`: `register` and `login` submit their forms, `logout` forgets the
//! stored token, and `rides list` / `rides create` drive the dashboard. The
//! session token persists in a plain file between invocations.

mod api;
mod store;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rides::flow::{self, Mount};
use rides::{
    ApiError, Credentials, Dashboard, DraftError, FieldBinding, Notice, RegistrationProfile, RideDraft, RideOffer,
    SessionError, Transition, WheelsApi,
};
use tracing_subscriber::EnvFilter;

use crate::api::ReqwestApi;
use crate::store::{FileSessionStore, default_session_file};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}; run `wheels login` first")]
    Session(#[from] SessionError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
    #[error("{}", .0.message())]
    Failed(Notice),
}

#[derive(Parser, Debug)]
#[command(name = "wheels", about = "Wheels ride-sharing terminal client")]
struct Cli {
    #[arg(long, env = "WHEELS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Defaults to `$HOME/.wheels/session`.
    #[arg(long, env = "WHEELS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register(RegisterArgs),
    /// Sign in and store the session token.
    Login(LoginArgs),
    /// Forget the stored session token.
    Logout,
    Rides(RidesCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "WHEELS_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    phone: String,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "WHEELS_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct RidesCommand {
    #[command(subcommand)]
    command: RidesSubcommand,
}

#[derive(Subcommand, Debug)]
enum RidesSubcommand {
    /// Print every ride offer.
    List,
    /// Offer a ride as the signed-in user.
    Create(CreateRideArgs),
}

#[derive(Args, Debug)]
struct CreateRideArgs {
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
    #[arg(long)]
    route: String,
    /// Local departure time, `YYYY-MM-DDTHH:MM`.
    #[arg(long)]
    departure: String,
    #[arg(long)]
    seats: String,
    #[arg(long)]
    fare: String,
}

impl RegisterArgs {
    fn profile(&self) -> RegistrationProfile {
        let mut profile = RegistrationProfile::default();
        profile.set_field("nombre", &self.first_name);
        profile.set_field("apellido", &self.last_name);
        profile.set_field("correo", &self.email);
        profile.set_field("contraseña", &self.password);
        profile.set_field("telefono", &self.phone);
        profile
    }
}

impl LoginArgs {
    fn credentials(&self) -> Credentials {
        let mut credentials = Credentials::default();
        credentials.set_field("correo", &self.email);
        credentials.set_field("contraseña", &self.password);
        credentials
    }
}

impl CreateRideArgs {
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("puntoInicio", self.from.as_str()),
            ("puntoFinal", self.to.as_str()),
            ("ruta", self.route.as_str()),
            ("horaSalida", self.departure.as_str()),
            ("cuposDisponibles", self.seats.as_str()),
            ("tarifa", self.fare.as_str()),
        ]
    }

    fn draft(&self) -> RideDraft {
        let mut draft = RideDraft::default();
        for (name, value) in self.fields() {
            draft.set_field(name, value);
        }
        draft
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn session_store(path: Option<PathBuf>) -> FileSessionStore {
    let path = path.unwrap_or_else(|| default_session_file(std::env::var_os("HOME").as_deref().map(Path::new)));
    FileSessionStore::new(path)
}

/// Print a success notice, or turn a failure notice into an error.
fn report(notice: Notice) -> Result<(), CliError> {
    if notice.is_error() {
        return Err(CliError::Failed(notice));
    }
    println!("{}", notice.message());
    Ok(())
}

fn finish(transition: Transition) -> Result<(), CliError> {
    if let Some(route) = transition.navigate {
        tracing::debug!(route = route.path(), "next screen");
    }
    transition.notice.map_or(Ok(()), report)
}

fn write_rides(out: &mut impl Write, rides: &[RideOffer]) -> io::Result<()> {
    if rides.is_empty() {
        return writeln!(out, "No hay viajes aún");
    }
    for ride in rides {
        writeln!(out, "{}", ride.heading())?;
        writeln!(out, "  ruta:    {}", ride.route)?;
        writeln!(out, "  salida:  {}", ride.departure_label())?;
        writeln!(out, "  cupos:   {}", ride.available_seats)?;
        writeln!(out, "  tarifa:  {}", ride.fare_label())?;
        writeln!(out, "  estado:  {}", ride.status.label())?;
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = ReqwestApi::new(&cli.base_url)?;
    let session = session_store(cli.session_file);
    tracing::debug!(base_url = api.base_url(), session_file = %session.path().display(), "configured");

    match cli.command {
        Command::Register(args) => {
            let profile = args.profile();
            if let Some(name) = profile.first_missing() {
                return Err(DraftError::Missing(name).into());
            }
            finish(flow::register(&api, &profile).await)
        }
        Command::Login(args) => finish(flow::login(&api, &session, &args.credentials()).await),
        Command::Logout => finish(flow::logout(&session)),
        Command::Rides(rides) => match rides.command {
            RidesSubcommand::List => list_rides(&api, &session).await,
            RidesSubcommand::Create(args) => create_ride(api, session, &args).await,
        },
    }
}

async fn list_rides(api: &ReqwestApi, session: &FileSessionStore) -> Result<(), CliError> {
    let token = match flow::guard(session) {
        Mount::Load(token) => token,
        Mount::Redirect(_) => return Err(SessionError::MissingToken.into()),
    };
    let rides = api.list_rides(&token).await?;
    write_rides(&mut io::stdout().lock(), &rides)?;
    Ok(())
}

async fn create_ride(api: ReqwestApi, session: FileSessionStore, args: &CreateRideArgs) -> Result<(), CliError> {
    args.draft().to_offer()?;

    let mut dashboard = Dashboard::new(api, session);
    if dashboard.mount().await.is_some() {
        return Err(SessionError::MissingToken.into());
    }
    for (name, value) in args.fields() {
        dashboard.set_field(name, value);
    }
    if let Some(notice) = dashboard.submit().await {
        report(notice)?;
    }
    write_rides(&mut io::stdout().lock(), &dashboard.state().rides)?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
