use webpify::config::{ColorMode, Config};
use webpify::presentation::ColorWhen;

use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    /// Prompts may be shown
    pub interactive: bool,
}

impl UiContext {
    pub fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let interactive = !json && caps.stdin_is_tty && caps.stdout_is_tty && !caps.is_ci;

        Self {
            json,
            color,
            unicode,
            interactive,
        }
    }
}
