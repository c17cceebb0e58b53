// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, Message};
use crate::config::AppTheme;
use crate::constants::app_info;
use crate::fl;
use crate::orientation::Orientation;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows the theme preference and the orientation selector. The
    /// orientation selector stands in for the device orientation sensor.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(theme_index),
            Message::SetAppTheme,
        );

        let orientation_index = Orientation::ALL
            .iter()
            .position(|o| *o == self.overlay.orientation());
        let orientation_dropdown = widget::dropdown(
            &self.orientation_dropdown_options,
            orientation_index,
            Message::SelectOrientation,
        );

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("orientation"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(orientation_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(format!("Version {}", app_info::version()))
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(crate::app::state::ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
