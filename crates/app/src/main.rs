mod telemetry;

use std::fmt;
use std::sync::Arc;

use course_core::model::AssignmentId;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock};
use tracing::info;
use ui::{App, ServicesApp, UiApp, View, build_app_context};

const DEFAULT_GRADER: &str = "Profesor Titular";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAssignmentId { raw: String },
    InvalidView { raw: String },
    EmptyGrader,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAssignmentId { raw } => {
                write!(f, "invalid --assignment value: {raw}")
            }
            ArgsError::InvalidView { raw } => write!(f, "invalid --view value: {raw}"),
            ArgsError::EmptyGrader => write!(f, "grader name must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--grader <name>] [--assignment <id>] [--view <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --grader \"{DEFAULT_GRADER}\"");
    eprintln!("  --assignment <first assignment>");
    eprintln!("  --view dashboard");
    eprintln!();
    eprintln!("Views:");
    let names: Vec<&str> = View::SIDEBAR.iter().map(|view| view.slug()).collect();
    eprintln!("  {}", names.join(", "));
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_GRADER, COURSE_ASSIGNMENT_ID, LOG_LEVEL, LOG_FORMAT");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    grader: String,
    assignment: Option<AssignmentId>,
    view: View,
}

fn parse_assignment(raw: String) -> Result<AssignmentId, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidAssignmentId { raw })
}

fn parse_grader(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyGrader);
    }
    Ok(trimmed.to_owned())
}

impl Args {
    /// `env` looks up fallbacks for flags that were not passed.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut grader = env("COURSE_GRADER")
            .map(parse_grader)
            .transpose()?
            .unwrap_or_else(|| DEFAULT_GRADER.to_owned());
        let mut assignment = env("COURSE_ASSIGNMENT_ID")
            .map(parse_assignment)
            .transpose()?;
        let mut view = View::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--grader" => grader = parse_grader(require_value(args, "--grader")?)?,
                "--assignment" => {
                    assignment = Some(parse_assignment(require_value(args, "--assignment")?)?);
                }
                "--view" => {
                    let raw = require_value(args, "--view")?;
                    view = raw.parse().map_err(|_| ArgsError::InvalidView { raw })?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            grader,
            assignment,
            view,
        }))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    telemetry::init_tracing();
    info!(grader = %args.grader, view = %args.view, "launching course dashboard");

    let services = AppServices::seeded(Clock::system(), args.grader)?;
    let app: Arc<dyn UiApp> = Arc::new(ServicesApp::new(services, args.view, args.assignment));
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Course Dashboard")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
