// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod cli;
pub mod conf;
pub mod defs;
pub mod partitions;
pub mod report;
pub mod utils;

pub use partitions::{AndroidPartition, Group, LocateError, PartitionModel, Partitions};
