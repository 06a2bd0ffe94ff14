//! Terminal colors resolved from the `[display]` config section.

use crossterm::style::Color;
use petal_config::colors::parse_color;
use petal_config::schema::DisplayConfig;
use tracing::warn;

/// Foreground colors per transcript element. `None` means plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub title: Option<Color>,
    pub user: Option<Color>,
    pub assistant: Option<Color>,
    pub error: Option<Color>,
}

fn resolve(name: &str, value: &str) -> Option<Color> {
    match parse_color(value) {
        Ok(c) => Some(Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }),
        Err(e) => {
            warn!("display.{name}: {e}; using the terminal default");
            None
        }
    }
}

impl Palette {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            title: resolve("title_color", &display.title_color),
            user: resolve("user_color", &display.user_color),
            assistant: resolve("assistant_color", &display.assistant_color),
            error: resolve("error_color", &display.error_color),
        }
    }

    pub fn plain() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_resolves_every_color() {
        let palette = Palette::from_config(&DisplayConfig::default());
        assert_eq!(
            palette.user,
            Some(Color::Rgb {
                r: 0xFF,
                g: 0xA2,
                b: 0xB9
            })
        );
        assert!(palette.title.is_some());
        assert!(palette.assistant.is_some());
        assert!(palette.error.is_some());
    }

    #[test]
    fn invalid_color_falls_back_to_plain() {
        let display = DisplayConfig {
            user_color: "pinkish".into(),
            ..DisplayConfig::default()
        };
        let palette = Palette::from_config(&display);
        assert!(palette.user.is_none());
        assert!(palette.assistant.is_some());
    }
}
