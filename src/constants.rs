// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Suffix that marks a namespace as a tenant workspace
pub const TENANT_SUFFIX: &str = "-tenant";

/// Maximum number of namespaces aggregated at the same time
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Report export settings
pub mod report {
    /// Output file used when none is configured
    pub const DEFAULT_OUTPUT: &str = "result.csv";
    /// Output path that selects stdout instead of a file
    pub const STDOUT_PATH: &str = "-";
    /// Column headers of the flattened report, in order
    pub const CSV_HEADER: [&str; 5] = [
        "Workspace",
        "AppName",
        "ComponentName",
        "IntegrationTests",
        "ReleasePlans",
    ];
    /// Delimiter for multi-valued columns
    pub const NAME_SEPARATOR: &str = ",";
}
