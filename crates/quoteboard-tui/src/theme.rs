//! Color system for the quoteboard TUI
//!
//! - Blue: one-time (setup) figures
//! - Green: monthly (recurring) figures
//! - Cyan: selection, focus, keys
//! - Gray: inactive services, hints

use quoteboard_core::models::{BillingType, ColorScheme};
use ratatui::style::Color;

/// Status color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Green: active, monthly
    Success,
    /// Red: destructive actions (clear)
    Error,
    /// Yellow: notes, edit prompts
    Warning,
    /// Gray: inactive, hints
    Neutral,
    /// Cyan: selected, interactive
    Focus,
    /// Blue: one-time figures
    Info,
}

impl StatusColor {
    /// Convert to Ratatui Color based on color scheme
    pub fn to_color(self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => match self {
                StatusColor::Success => Color::Green,
                StatusColor::Error => Color::Red,
                StatusColor::Warning => Color::Yellow,
                StatusColor::Neutral => Color::DarkGray,
                StatusColor::Focus => Color::Cyan,
                StatusColor::Info => Color::LightBlue,
            },
            ColorScheme::Light => match self {
                StatusColor::Success => Color::Rgb(0, 128, 0),
                StatusColor::Error => Color::Rgb(200, 0, 0),
                StatusColor::Warning => Color::Rgb(180, 120, 0),
                StatusColor::Neutral => Color::Gray,
                StatusColor::Focus => Color::Rgb(0, 128, 128),
                StatusColor::Info => Color::Rgb(0, 70, 160),
            },
        }
    }
}

/// Billing bucket semantic color
pub struct BillingColor;

impl BillingColor {
    pub fn for_type(billing: BillingType, scheme: ColorScheme) -> Color {
        match billing {
            BillingType::OneTime => StatusColor::Info.to_color(scheme),
            BillingType::Monthly => StatusColor::Success.to_color(scheme),
        }
    }

    pub fn icon(billing: BillingType) -> &'static str {
        match billing {
            BillingType::OneTime => "▣",
            BillingType::Monthly => "↻",
        }
    }
}

/// Primary text color
pub fn text_color(scheme: ColorScheme) -> Color {
    match scheme {
        ColorScheme::Dark => Color::White,
        ColorScheme::Light => Color::Black,
    }
}
