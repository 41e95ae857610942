use webpify::WebpifyError;

use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// `Error: <message>` followed by one indented line per cause.
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::error("Error:").bold().render(supports_color),
        err
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    if let Some(hint) = err.downcast_ref::<WebpifyError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("hint:").render(supports_color),
            hint
        ));
    }
    out
}

fn hint_for(err: &WebpifyError) -> Option<&'static str> {
    match err {
        WebpifyError::InvalidImageRoot { .. } => {
            Some("pass a directory relative to the current directory, e.g. ./public/images")
        }
        WebpifyError::InvalidProjectRoot { .. } => {
            Some("--project-root must point at an existing directory")
        }
        WebpifyError::Config { .. } => Some("fix or remove the configuration file"),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "error": err.to_string(),
            "causes": err.chain().skip(1).map(|c| c.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", output);
    }

    let caps = detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color));
}
