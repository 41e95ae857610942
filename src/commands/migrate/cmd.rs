//! Migrate command entry point

use anyhow::{Context, Result};
use webpify::config::Config;
use webpify::domain::ports::NoopEventSink;
use webpify::presentation::{create_migration_use_case, Cli};
use webpify::{MigrationReport, MigrationRequest, WebpifyError};

use super::console::ConsoleEventSink;
use super::prompt::{ask_image_root, confirm_migration};
use crate::ui::context::UiContext;
use crate::ui::terminal::detect_capabilities;
use crate::ui::views::migrate::{
    render_config_warning, render_migrate_header, render_migrate_summary, render_no_images,
};

pub fn cmd_migrate(cli: &Cli) -> Result<()> {
    let caps = detect_capabilities();
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;

    let typed = match &cli.image_root {
        Some(root) => root.clone(),
        None => ask_image_root(caps.stdin_is_tty)?,
    };
    let request = MigrationRequest::new(&typed, &cwd, cli.project_root.as_deref(), cli.dry_run);

    let (config, warnings) = Config::resolve(&request.project_root)?;
    let ui = UiContext::from_caps(cli.json, cli.color, &config, caps);
    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
    }

    let use_case = create_migration_use_case(config);
    let plan = match use_case.prepare(request) {
        Ok(plan) => plan,
        Err(WebpifyError::NoImagesFound { root, extension }) => {
            if ui.json {
                let output = serde_json::json!({
                    "image_root": root,
                    "message": format!("no .{} images found", extension),
                });
                println!("{}", output);
            } else {
                print!("{}", render_no_images(&root, &extension, ui.color, ui.unicode));
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if ui.json {
        let report = use_case.execute(&plan, &NoopEventSink);
        return print_json(&report);
    }

    print!("{}", render_migrate_header(&plan, ui.color, ui.unicode));
    if ui.interactive && !cli.yes && !cli.dry_run && !confirm_migration(plan.image_count())? {
        return Err(WebpifyError::Aborted.into());
    }

    let sink = ConsoleEventSink::new(
        ui,
        plan.request.image_root.clone(),
        plan.request.project_root.clone(),
    );
    let report = use_case.execute(&plan, &sink);
    print!("{}", render_migrate_summary(&report, ui.color, ui.unicode));
    Ok(())
}

fn print_json(report: &MigrationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
