//! Migrate Use Case
//!
//! Orchestrates a migration run:
//! 1. Validate the roots and discover images (`prepare`)
//! 2. Convert each image, measuring the image root before and after
//! 3. Generate replacement candidates for the converted images
//! 4. Rewrite references across the project's code files
//!
//! Conversion and rewrite failures are recorded in the report. Only setup
//! problems are returned as errors.

use std::path::Path;

use crate::application::convert::{ConvertOptions, ImageConverter};
use crate::application::rewrite::{ReferenceRewriter, RewriteOptions};
use crate::config::Config;
use crate::domain::entities::{ConversionOutcome, MigrationReport};
use crate::domain::ports::{Encoder, FileSystem, MigrationEvent, MigrationEventSink};
use crate::domain::services::{scan, total_size, CandidateGenerator, PathFilter};
use crate::error::{WebpifyError, WebpifyResult};

use super::request::{MigrationPlan, MigrationRequest};

/// Migrate use case, parameterized by its file system and encoder
pub struct MigrationUseCase<FS, E>
where
    FS: FileSystem + Clone,
    E: Encoder,
{
    fs: FS,
    converter: ImageConverter<FS, E>,
    rewriter: ReferenceRewriter<FS>,
    config: Config,
}

impl<FS, E> MigrationUseCase<FS, E>
where
    FS: FileSystem + Clone,
    E: Encoder,
{
    pub fn new(fs: FS, encoder: E, config: Config) -> Self {
        let options = ConvertOptions {
            source_extension: config.scan.source_extension.clone(),
            overwrite_existing: config.convert.overwrite_existing,
        };
        Self {
            converter: ImageConverter::new(fs.clone(), encoder, options),
            rewriter: ReferenceRewriter::new(fs.clone()),
            fs,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the request and discover the images to convert.
    ///
    /// Nothing is written. Fails when either root is not a directory or when
    /// the image root holds no convertible image.
    pub fn prepare(&self, request: MigrationRequest) -> WebpifyResult<MigrationPlan> {
        if !self.fs.is_dir(&request.image_root) {
            return Err(WebpifyError::InvalidImageRoot {
                path: request.image_root,
            });
        }
        if !self.fs.is_dir(&request.project_root) {
            return Err(WebpifyError::InvalidProjectRoot {
                path: request.project_root,
            });
        }

        let filter = PathFilter::new(
            [self.config.scan.source_extension.as_str()],
            &self.config.scan.exclude_dirs,
        );
        let images = scan(&self.fs, &request.image_root, |p| filter.matches(p));
        log::info!(
            "found {} .{} images in {}",
            images.len(),
            self.config.scan.source_extension,
            request.image_root.display()
        );

        if images.is_empty() {
            return Err(WebpifyError::NoImagesFound {
                root: request.image_root,
                extension: self.config.scan.source_extension.clone(),
            });
        }

        Ok(MigrationPlan { request, images })
    }

    /// Convert the planned images and rewrite references to them.
    pub fn execute(&self, plan: &MigrationPlan, events: &dyn MigrationEventSink) -> MigrationReport {
        let request = &plan.request;
        let mut report = MigrationReport::new(request.image_root.clone(), request.dry_run);
        report.size_before = total_size(&self.fs, &request.image_root);

        events.on_event(MigrationEvent::Started {
            image_root: request.image_root.clone(),
            image_count: plan.image_count(),
            dry_run: request.dry_run,
        });

        let total = plan.image_count();
        for (index, image) in plan.images.iter().enumerate() {
            let outcome = if request.dry_run {
                self.converter.plan(image)
            } else {
                self.converter.convert(image)
            };
            match outcome {
                ConversionOutcome::Converted(asset) => {
                    events.on_event(MigrationEvent::Converted {
                        index,
                        total,
                        asset: asset.clone(),
                    });
                    report.converted.push(asset);
                }
                ConversionOutcome::Skipped(asset) => {
                    events.on_event(MigrationEvent::Skipped {
                        index,
                        total,
                        asset: asset.clone(),
                    });
                    report.skipped.push(asset);
                }
                ConversionOutcome::Failed(failure) => {
                    events.on_event(MigrationEvent::ConversionFailed {
                        index,
                        total,
                        failure: failure.clone(),
                    });
                    report.failures.push(failure);
                }
            }
        }

        report.size_after = if request.dry_run {
            report.size_before
        } else {
            total_size(&self.fs, &request.image_root)
        };

        let generator = CandidateGenerator::new(
            request.alias.clone(),
            &request.image_root,
            &self.config.candidates,
        );
        report.candidates = generator.collect(&report.converted);

        if report.candidates.is_empty() {
            log::info!("no images converted, nothing to update");
        } else {
            self.rewrite_references(&mut report, &request.project_root, events);
        }

        events.on_event(MigrationEvent::Completed {
            converted: report.converted.len(),
            skipped: report.skipped.len(),
            failed: report.failures.len(),
            files_rewritten: report.rewrites.len(),
            substitutions: report.total_substitutions(),
        });
        report
    }

    fn rewrite_references(
        &self,
        report: &mut MigrationReport,
        project_root: &Path,
        events: &dyn MigrationEventSink,
    ) {
        let code_filter = PathFilter::new(
            &self.config.scan.code_extensions,
            &self.config.scan.exclude_dirs,
        );
        let code_files = scan(&self.fs, project_root, |p| code_filter.matches(p));
        report.code_files_scanned = code_files.len();
        log::info!(
            "scanning {} code files for {} candidates",
            code_files.len(),
            report.candidates.len()
        );

        events.on_event(MigrationEvent::RewriteStarted {
            file_count: code_files.len(),
            candidate_count: report.candidates.len(),
        });
        let outcome = self.rewriter.rewrite(
            &code_files,
            &report.candidates,
            RewriteOptions {
                dry_run: report.dry_run,
            },
            events,
        );
        report.rewrites = outcome.rewrites;
        report.rewrite_failures = outcome.failures;

        log::info!(
            "{} references updated in {} files",
            report.total_substitutions(),
            report.rewrites.len()
        );
    }

    /// `prepare` then `execute`.
    pub fn run(
        &self,
        request: MigrationRequest,
        events: &dyn MigrationEventSink,
    ) -> WebpifyResult<MigrationReport> {
        let plan = self.prepare(request)?;
        Ok(self.execute(&plan, events))
    }
}
