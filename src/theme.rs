use crate::charts::Strength;
use crate::metrics::Tone;
use crate::scoring::ColorToken;
use ratatui::style::{Color, Modifier, Style};

/// Bank burgundy used for titles and reference lines
pub const BRAND: Color = Color::Rgb(134, 31, 65);

pub struct Theme;

impl Theme {
    /// Terminal color for a decision token
    pub fn token_color(token: ColorToken) -> Color {
        match token {
            ColorToken::Green => Color::Rgb(0, 121, 107),  // Teal green
            ColorToken::Amber => Color::Rgb(245, 127, 23), // Dark amber
            ColorToken::Red => Color::Rgb(198, 40, 40),    // Deep red
        }
    }

    /// Bold style for anything colored by the verdict
    pub fn token_style(token: ColorToken) -> Style {
        Style::default()
            .fg(Self::token_color(token))
            .add_modifier(Modifier::BOLD)
    }

    pub fn token_icon(token: ColorToken) -> &'static str {
        match token {
            ColorToken::Green => "\u{2714}",
            ColorToken::Amber => "\u{21bb}",
            ColorToken::Red => "\u{26d4}",
        }
    }

    pub fn strength_style(strength: Strength) -> Style {
        match strength {
            Strength::Strong => Style::default().fg(Color::Green),
            Strength::Weak => Style::default().fg(Color::Red),
        }
    }

    pub fn tone_style(tone: Tone) -> Style {
        match tone {
            Tone::Favorable => Style::default().fg(Color::Green),
            Tone::Adverse => Style::default().fg(Color::Red),
        }
    }

    /// Style for selected slider
    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Style for title
    pub fn title_style() -> Style {
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
    }

    /// Style for help text
    pub fn help_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn reference_style() -> Style {
        Style::default().fg(BRAND)
    }

    pub fn secondary_series_style() -> Style {
        Style::default().fg(Color::Gray)
    }
}
