// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, ValueEnum};
use viewfinder::app::AppModel;
use viewfinder::errors::{AppError, AppResult};
use viewfinder::i18n;
use viewfinder::orientation::Orientation;

#[derive(Parser)]
#[command(name = "viewfinder")]
#[command(about = "Capture screen overlay controls for the COSMIC desktop")]
#[command(version)]
struct Cli {
    /// Device orientation the overlay controls start in (default: portrait)
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    LandscapeLeft,
    LandscapeRight,
    UpsideDown,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::LandscapeLeft => Orientation::LandscapeLeft,
            OrientationArg::LandscapeRight => Orientation::LandscapeRight,
            OrientationArg::UpsideDown => Orientation::PortraitUpsideDown,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=viewfinder=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    let orientation = cli
        .orientation
        .map(Orientation::from)
        .unwrap_or_default();

    // Starts the application's event loop with the initial orientation as flags.
    cosmic::app::run::<AppModel>(settings, orientation)
        .map_err(|err| AppError::Other(err.to_string()))?;

    Ok(())
}
