use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::{Clock, LessonContent};
use services::{LessonSettings, LessonSettingsDraft};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,ui=info,services=info,lesson_core=info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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
    eprintln!("  cargo run -p app -- [--home <page-id>] [--fill-award <once|every>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --home page-home");
    eprintln!("  --fill-award once");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LESSON_HOME_PAGE, LESSON_FILL_AWARD, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    settings: LessonSettingsDraft,
    log: Option<String>,
    help: bool,
}

impl Args {
    /// Flags override the environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            settings: LessonSettingsDraft {
                home_page: env("LESSON_HOME_PAGE"),
                fill_award: env("LESSON_FILL_AWARD"),
            },
            log: None,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--home" => parsed.settings.home_page = Some(require_value(args, "--home")?),
                "--fill-award" => {
                    parsed.settings.fill_award = Some(require_value(args, "--fill-award")?);
                }
                "--log" => parsed.log = Some(require_value(args, "--log")?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

struct DesktopApp {
    content: Arc<LessonContent>,
    settings: LessonSettings,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn settings(&self) -> LessonSettings {
        self.settings.clone()
    }

    fn clock(&self) -> Clock {
        Clock::default()
    }
}

fn init_tracing(directive: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.log.as_deref())?;

    let settings = parsed.settings.validate()?;
    let content = Arc::new(LessonContent::links_and_frames()?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { content, settings });
    let context = build_app_context(&app)?;

    info!("launching lesson window");

    // Some window managers default new windows to always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Links & Frames")
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
