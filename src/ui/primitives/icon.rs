use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skip,
    Arrow,
    Next,
    Image,
    Preview,
    Rewrite,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Skip => theme::icons::SKIP,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Next => theme::icons::NEXT,
                Icon::Image => theme::icons::IMAGE,
                Icon::Preview => theme::icons::PREVIEW,
                Icon::Rewrite => theme::icons::REWRITE,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Skip => theme::icons_ascii::SKIP,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Next => theme::icons_ascii::NEXT,
                Icon::Image => theme::icons_ascii::IMAGE,
                Icon::Preview => theme::icons_ascii::PREVIEW,
                Icon::Rewrite => theme::icons_ascii::REWRITE,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Preview => theme::colors::WARNING,
            Icon::Skip | Icon::Arrow | Icon::Next => theme::colors::DIM,
            Icon::Image | Icon::Rewrite => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
