//! Interactive input
//!
//! A terminal gets `dialoguer` prompts. Anything else is read as plain lines
//! from stdin, so the image directory can be piped in.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

const IMAGE_ROOT_PROMPT: &str = "Enter the image directory (e.g., ./public/images)";

/// Ask for the image directory.
pub fn ask_image_root(stdin_is_tty: bool) -> Result<String> {
    let answer = if stdin_is_tty {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(IMAGE_ROOT_PROMPT)
            .interact_text()
            .context("failed to read the image directory")?
    } else {
        eprintln!("{}:", IMAGE_ROOT_PROMPT);
        read_answer(io::stdin().lock())?
    };

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        bail!("no image directory given");
    }
    Ok(answer)
}

/// Confirm a destructive run. Only called on interactive terminals.
pub fn confirm_migration(image_count: usize) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Convert {} images and delete the originals?",
            image_count
        ))
        .default(true)
        .interact()
        .context("failed to read confirmation")
}

fn read_answer(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read the image directory from stdin")?;
    Ok(line)
}
