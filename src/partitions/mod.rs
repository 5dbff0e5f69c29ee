// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod locations;
pub mod model;
pub mod partition;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use self::{
    locations::{CandidateList, SearchPolicy},
    model::{Group, PartitionModel},
    partition::AndroidPartition,
};
use crate::defs;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("{model} partition not found. Searched in: {}", display_locations(.searched))]
    MandatoryPartitionNotFound {
        model: PartitionModel,
        searched: Vec<PathBuf>,
    },
}

fn display_locations(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Partitions located inside an extracted firmware dump.
///
/// System and vendor are always present; construction fails without them.
/// Every other partition is looked up best-effort and may be missing.
#[derive(Debug)]
pub struct Partitions {
    dump_path: PathBuf,
    system: AndroidPartition,
    vendor: AndroidPartition,
    others: Vec<AndroidPartition>,
}

impl Partitions {
    pub fn new(dump_path: &Path) -> Result<Self, LocateError> {
        Self::with_prop_files(dump_path, &default_prop_files())
    }

    /// Like [`Partitions::new`], probing `canonical` ahead of the extended
    /// property file catalog.
    pub fn with_prop_files(dump_path: &Path, canonical: &[PathBuf]) -> Result<Self, LocateError> {
        log::info!("Searching partitions in {}", dump_path.display());
        let prop_files = locations::combined_prop_locations(canonical);

        let system_locations = locations::search_locations(dump_path, PartitionModel::System.name());
        let system = locate_mandatory(PartitionModel::System, system_locations, &prop_files)?;

        let vendor_locations = vendor_search_locations(dump_path, system.path());
        let vendor = locate_mandatory(PartitionModel::Vendor, vendor_locations, &prop_files)?;

        let mut partitions = Self {
            dump_path: dump_path.to_path_buf(),
            system,
            vendor,
            others: Vec::new(),
        };

        let optional = PartitionModel::from_group(Group::Ssi)
            .filter(|model| *model != PartitionModel::System)
            .chain(
                PartitionModel::from_group(Group::Treble)
                    .filter(|model| *model != PartitionModel::Vendor),
            );

        for model in optional {
            partitions.search_for_partition(model, &prop_files);
        }

        log::info!("Located {} partitions", partitions.all().len());
        Ok(partitions)
    }

    pub fn dump_path(&self) -> &Path {
        &self.dump_path
    }

    pub fn system(&self) -> &AndroidPartition {
        &self.system
    }

    pub fn vendor(&self) -> &AndroidPartition {
        &self.vendor
    }

    pub fn get(&self, model: PartitionModel) -> Option<&AndroidPartition> {
        self.all().into_iter().find(|partition| partition.model() == model)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&AndroidPartition> {
        PartitionModel::from_name(name).and_then(|model| self.get(model))
    }

    /// Located partitions in discovery order.
    pub fn all(&self) -> Vec<&AndroidPartition> {
        [&self.system, &self.vendor]
            .into_iter()
            .chain(self.others.iter())
            .collect()
    }

    /// Candidates for a non-mandatory partition: the generic locations, then
    /// the partition nested under system, vendor and the dump root.
    pub fn extended_search_locations(&self, name: &str) -> CandidateList {
        let mut locations = locations::search_locations(&self.dump_path, name);
        locations.extend([
            self.system.path().join(name),
            self.vendor.path().join(name),
            self.dump_path.join(name),
        ]);
        locations
    }

    fn search_for_partition(&mut self, model: PartitionModel, prop_files: &[PathBuf]) {
        if self.get(model).is_some() {
            return;
        }

        let locations = self.extended_search_locations(model.name());
        match find_partition_root(locations.as_slice(), prop_files) {
            Some(path) => {
                log::info!("Found {} at {}", model, path.display());
                self.others.push(AndroidPartition::new(model, path));
            }
            None => log::debug!("{} not present in dump", model),
        }
    }
}

/// Candidates for vendor: nested under the located system first, then the
/// usual vendor locations.
pub fn vendor_search_locations(dump_path: &Path, system_path: &Path) -> CandidateList {
    let mut locations = locations::search_locations(dump_path, PartitionModel::Vendor.name());
    locations.push_front(system_path.join(PartitionModel::Vendor.name()));
    locations
}

pub fn default_prop_files() -> Vec<PathBuf> {
    defs::BUILD_PROP_LOCATION.iter().map(PathBuf::from).collect()
}

/// First location holding any of `prop_files` as a regular file. Locations
/// are tried in order and probing stops at the first hit.
pub fn find_partition_root(locations: &[PathBuf], prop_files: &[PathBuf]) -> Option<PathBuf> {
    locations
        .iter()
        .find(|location| {
            prop_files.iter().any(|prop| {
                let candidate = location.join(prop);
                let found = candidate.is_file();
                log::trace!("probe {} -> {}", candidate.display(), found);
                found
            })
        })
        .cloned()
}

fn locate_mandatory(
    model: PartitionModel,
    locations: CandidateList,
    prop_files: &[PathBuf],
) -> Result<AndroidPartition, LocateError> {
    match find_partition_root(locations.as_slice(), prop_files) {
        Some(path) => {
            log::info!("Found {} at {}", model, path.display());
            Ok(AndroidPartition::new(model, path))
        }
        None => {
            log::error!(
                "{} not found after {} locations",
                model,
                locations.as_slice().len()
            );
            Err(LocateError::MandatoryPartitionNotFound {
                model,
                searched: locations.into_vec(),
            })
        }
    }
}
