//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each piece of chrome is rendered by a separate submodule for clarity.

mod colors;
mod header;
mod help;
mod menu;
mod modal;
mod page;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use header::draw_header;
use help::draw_help_overlay;
use menu::draw_menu;
use modal::draw_modal;
use page::draw_page;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - header, scrolled page, bars, then overlays.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Scrolled page content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Draw the scrolled page
    draw_page(frame, chunks[1], app);

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Overlays: product modal, nav menu, help (topmost)
    if let Some(modal) = &app.modal {
        draw_modal(frame, app, modal);
    }
    if app.page.menu_open() {
        draw_menu(frame, app);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }
}
