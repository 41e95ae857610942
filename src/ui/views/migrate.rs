use std::path::Path;

use webpify::config::ConfigWarning;
use webpify::domain::entities::{
    ConversionFailure, ConvertedAsset, FileRewrite, MigrationReport, RewriteFailure, SkippedAsset,
};
use webpify::domain::services::format_size;
use webpify::MigrationPlan;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `path` relative to `base` when it lives under it, as given otherwise.
fn shown(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

fn counter(index: usize, total: usize, supports_color: bool) -> String {
    let width = total.to_string().len();
    ColoredText::dim(format!("[{:>width$}/{}]", index + 1, total, width = width))
        .render(supports_color)
}

pub fn render_migrate_header(
    plan: &MigrationPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let request = &plan.request;
    let (icon, title) = if request.dry_run {
        (Icon::Preview, "Webpify (dry run)")
    } else {
        (Icon::Image, "Webpify")
    };
    let mut header = CommandHeader::new(icon, title);
    header.add("Images", request.image_root.display().to_string());
    header.add("Project", request.project_root.display().to_string());
    header.add("Found", format!("{} images", plan.image_count()));
    header.render(supports_color, supports_unicode)
}

pub fn render_converted(
    index: usize,
    total: usize,
    asset: &ConvertedAsset,
    image_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} {} {}",
        counter(index, total, supports_color),
        Icon::Success.colored(supports_color, supports_unicode),
        shown(&asset.original, image_root),
        Icon::Arrow.colored(supports_color, supports_unicode),
        shown(&asset.converted, image_root)
    )
}

pub fn render_skipped(
    index: usize,
    total: usize,
    asset: &SkippedAsset,
    image_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} {}",
        counter(index, total, supports_color),
        Icon::Skip.colored(supports_color, supports_unicode),
        shown(&asset.path, image_root),
        ColoredText::dim(format!(
            "({}: {})",
            asset.reason,
            shown(&asset.destination, image_root)
        ))
        .render(supports_color)
    )
}

pub fn render_conversion_failed(
    index: usize,
    total: usize,
    failure: &ConversionFailure,
    image_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} {}",
        counter(index, total, supports_color),
        Icon::Error.colored(supports_color, supports_unicode),
        shown(&failure.path, image_root),
        ColoredText::error(failure.error.as_str()).render(supports_color)
    )
}

pub fn render_rewrite_started(file_count: usize, candidate_count: usize, supports_color: bool) -> String {
    format!(
        "\n{}",
        ColoredText::info(format!(
            "Updating references: {} code files, {} candidate references",
            file_count, candidate_count
        ))
        .bold()
        .render(supports_color)
    )
}

pub fn render_file_rewrite(
    rewrite: &FileRewrite,
    project_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let count = rewrite.replaced_count();
    let mut out = format!(
        "{} {} {}",
        Icon::Rewrite.colored(supports_color, supports_unicode),
        shown(&rewrite.path, project_root),
        ColoredText::dim(format!(
            "({} {})",
            count,
            if count == 1 { "reference" } else { "references" }
        ))
        .render(supports_color)
    );
    for sub in &rewrite.substitutions {
        out.push_str(&format!(
            "\n    {} {} {}",
            sub.from,
            Icon::Arrow.colored(supports_color, supports_unicode),
            sub.to
        ));
    }
    if let Some(diff) = &rewrite.diff {
        for line in diff.lines() {
            let styled = if line.starts_with('+') && !line.starts_with("+++") {
                ColoredText::success(line)
            } else if line.starts_with('-') && !line.starts_with("---") {
                ColoredText::error(line)
            } else {
                ColoredText::dim(line)
            };
            out.push_str(&format!("\n    {}", styled.render(supports_color)));
        }
    }
    out
}

pub fn render_rewrite_failed(
    failure: &RewriteFailure,
    project_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        shown(&failure.path, project_root),
        ColoredText::error(failure.error.as_str()).render(supports_color)
    )
}

pub fn render_migrate_summary(
    report: &MigrationReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if !report.is_success() {
        ResultSummary::partial("Migration Finished With Errors")
    } else if report.dry_run {
        ResultSummary::success("Dry Run Complete")
    } else {
        ResultSummary::success("Migration Complete")
    };

    summary.add_stat("Images converted", report.converted.len());
    if !report.skipped.is_empty() {
        summary.add_stat("Images skipped", report.skipped.len());
    }
    if !report.failures.is_empty() {
        summary.add_stat("Images failed", report.failures.len());
    }
    summary.add_stat("Code files scanned", report.code_files_scanned);
    summary.add_stat("Files updated", report.rewrites.len());
    summary.add_stat("References replaced", report.total_substitutions());
    summary.add_stat("Size before", format_size(report.size_before as i64));
    summary.add_stat("Size after", format_size(report.size_after as i64));
    summary.add_stat("Space saved", format_size(report.space_saved()));

    if report.candidates.is_empty() {
        summary.add_info("No converted images, no references to update");
    }
    if !report.failures.is_empty() {
        summary.add_warning(format!(
            "{} images could not be converted; their references were left alone",
            report.failures.len()
        ));
    }
    if !report.rewrite_failures.is_empty() {
        summary.add_warning(format!(
            "{} code files could not be updated",
            report.rewrite_failures.len()
        ));
    }

    if report.dry_run {
        summary.with_next_step("Run again without --dry-run to apply these changes");
    } else if !report.rewrites.is_empty() {
        summary.with_next_step("Review the updated files before committing");
    }

    summary.render(supports_color, supports_unicode)
}

pub fn render_no_images(root: &Path, extension: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!("No .{} images found in {}", extension, root.display()))
            .render(supports_color)
    )
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} unknown config key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out
}
