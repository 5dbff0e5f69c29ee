// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::partitions::model::PartitionModel;

/// A partition whose root directory was confirmed inside a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndroidPartition {
    model: PartitionModel,
    path: PathBuf,
}

impl AndroidPartition {
    pub fn new(model: PartitionModel, path: PathBuf) -> Self {
        Self { model, path }
    }

    pub fn model(&self) -> PartitionModel {
        self.model
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &'static str {
        self.model.name()
    }
}

impl fmt::Display for AndroidPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.model.name(), self.path.display())
    }
}
