// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Report exporters: flattened CSV and structured JSON/YAML dumps.

use crate::constants::report::{CSV_HEADER, STDOUT_PATH};
use crate::error::{DashboardError, Result};
use crate::report::FleetReport;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv', 'json' or 'yaml'",
                s
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Write the report to `path`, or to stdout when the path is `-`
pub fn export_to_path(report: &FleetReport, format: ReportFormat, path: &Path) -> Result<()> {
    if path == Path::new(STDOUT_PATH) {
        let stdout = io::stdout();
        return write_report(report, format, stdout.lock());
    }

    let file = File::create(path)?;
    write_report(report, format, BufWriter::new(file))?;
    info!("Wrote {} report to {}", format, path.display());
    Ok(())
}

pub fn write_report<W: Write>(report: &FleetReport, format: ReportFormat, out: W) -> Result<()> {
    match format {
        ReportFormat::Csv => write_csv(report, out),
        ReportFormat::Json => write_json(report, out),
        ReportFormat::Yaml => write_yaml(report, out),
    }
}

/// One header line, then one line per (namespace, application, component)
pub fn write_csv<W: Write>(report: &FleetReport, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for row in report.rows() {
        writer.write_record(row.fields()).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> DashboardError {
    DashboardError::ExportError(format!("Failed to write CSV: {}", e))
}

pub fn write_json<W: Write>(report: &FleetReport, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &report.summary())
        .map_err(|e| DashboardError::ExportError(format!("Failed to write JSON: {}", e)))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn write_yaml<W: Write>(report: &FleetReport, mut out: W) -> Result<()> {
    serde_yaml::to_writer(&mut out, &report.summary())
        .map_err(|e| DashboardError::ExportError(format!("Failed to write YAML: {}", e)))?;
    out.flush()?;
    Ok(())
}
