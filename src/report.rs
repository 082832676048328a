// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of sweep results

use crate::cli::OutputFormat;
use crate::constants::report::DIVIDER;
use crate::error::Result;
use crate::types::{NamespaceFailure, ResourceIdentity, Snapshot, SweepReport};
use serde::Serialize;
use std::io::Write;

/// Receives every completed sweep
pub trait Reporter: Send {
    fn report(&mut self, resource: &ResourceIdentity, report: &SweepReport) -> Result<()>;
}

/// Build the reporter for the configured output format, writing to stdout
pub fn stdout_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonReporter::new(std::io::stdout())),
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, resource: &ResourceIdentity, report: &SweepReport) -> Result<()> {
        (**self).report(resource, report)
    }
}

/// Prints one labelled block per sweep:
///
/// ```text
/// -------------------- deployment: api -------------------
/// Namespace: a - Replicas: 3
/// --------------------
/// ```
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write + Send> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Reporter for TextReporter<W> {
    fn report(&mut self, resource: &ResourceIdentity, report: &SweepReport) -> Result<()> {
        writeln!(
            self.out,
            "{} {}: {} -------------------",
            DIVIDER, resource.kind, resource.name
        )?;
        for (namespace, replicas) in report.snapshot.iter() {
            writeln!(self.out, "Namespace: {} - Replicas: {}", namespace, replicas)?;
        }
        writeln!(self.out, "{}", DIVIDER)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    resource: &'a ResourceIdentity,
    replicas: &'a Snapshot,
    not_found: &'a [String],
    errors: &'a [NamespaceFailure],
}

/// Prints one JSON object per sweep, one per line
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write + Send> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn report(&mut self, resource: &ResourceIdentity, report: &SweepReport) -> Result<()> {
        let line = JsonLine {
            resource,
            replicas: &report.snapshot,
            not_found: &report.not_found,
            errors: &report.failed,
        };
        serde_json::to_writer(&mut self.out, &line).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
