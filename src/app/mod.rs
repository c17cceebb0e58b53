// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Viewfinder
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `top_bar`: Overlay bar with the flash and rotate controls
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message dispatch
//! - `handlers`: Message handlers by functional domain

mod handlers;
mod menu;
mod settings;
mod state;
mod top_bar;
mod update;
mod view;

use crate::config::Config;
use crate::errors::AppError;
use crate::fl;
use crate::orientation::Orientation;
use crate::overlay::OverlayState;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message};
use tracing::error;

const REPOSITORY: &str = "https://github.com/cosmic-utils/viewfinder";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.viewfinder.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// The initial device orientation, parsed from the command line.
    type Flags = Orientation;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.viewfinder";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        orientation: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    let err = AppError::from(err);
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Logical camera roster the rotate button cycles through
        let available_cameras = vec![fl!("camera-front"), fl!("camera-rear")];
        let current_camera_index = config
            .last_camera_index
            .min(available_cameras.len().saturating_sub(1));

        let theme_dropdown_options = vec![
            fl!("theme-system"),
            fl!("theme-dark"),
            fl!("theme-light"),
        ];
        // Order must match Orientation::ALL
        let orientation_dropdown_options = vec![
            fl!("orientation-portrait"),
            fl!("orientation-landscape-left"),
            fl!("orientation-landscape-right"),
            fl!("orientation-upside-down"),
        ];

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            overlay: OverlayState::new(config.flash_mode, orientation),
            config,
            config_handler,
            available_cameras,
            current_camera_index,
            theme_dropdown_options,
            orientation_dropdown_options,
        };

        let theme_task = cosmic::command::set_theme(app.config.app_theme.theme());

        (app, theme_task)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![menu::menu_bar(&self.core)]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
