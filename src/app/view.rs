// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the viewfinder surface with the top overlay bar stacked on top.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let viewfinder = self.build_viewfinder();
        let top_bar = self.build_top_bar();

        let preview_stack = cosmic::iced::widget::stack![
            viewfinder,
            widget::container(top_bar)
                .width(Length::Fill)
                .align_y(cosmic::iced::alignment::Vertical::Top)
        ];

        // Wrap everything in a black background container
        widget::container(preview_stack.width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Build the viewfinder surface
    ///
    /// Stands in for the live preview and names the active camera so a
    /// rotation request has visible effect.
    fn build_viewfinder(&self) -> Element<'_, Message> {
        let caption = self
            .available_cameras
            .get(self.current_camera_index)
            .cloned()
            .unwrap_or_else(|| crate::fl!("no-camera"));

        let caption_text = widget::container(
            widget::text(caption).size(ui::VIEWFINDER_CAPTION_TEXT_SIZE),
        )
        .style(|_theme| widget::container::Style {
            text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.5)),
            ..Default::default()
        });

        widget::container(caption_text)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}
