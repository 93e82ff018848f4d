// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod kubernetes;
pub mod lister;
pub mod report;
pub mod types;

#[cfg(test)]
pub mod test_utils;
