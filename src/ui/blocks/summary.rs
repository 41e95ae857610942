use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Final result block: title, counters, notes, warnings and a next-step hint.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, String)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, value: impl ToString) {
        self.stats.push((label.into(), value.to_string()));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (Icon::Success, ColoredText::success(self.title.as_str()))
        } else {
            (Icon::Warning, ColoredText::warning(self.title.as_str()))
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let width = self
            .stats
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.stats {
            out.push_str(&format!("  {:<width$}  {}\n", label, value, width = width));
        }

        if !self.infos.is_empty() {
            out.push('\n');
            for info in &self.infos {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Success.colored(supports_color, supports_unicode),
                    info
                ));
            }
        }

        if !self.warnings.is_empty() {
            out.push('\n');
            for warning in &self.warnings {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            out.push('\n');
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Next.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
