// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use crate::{defs, partitions::model::PartitionModel};

/// Which identity-specific candidate set a partition gets before the
/// global fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy<'a> {
    System,
    Vendor,
    Generic(&'a str),
}

impl<'a> SearchPolicy<'a> {
    pub fn for_name(name: &'a str) -> Self {
        match PartitionModel::from_name(name) {
            Some(PartitionModel::System) => SearchPolicy::System,
            Some(PartitionModel::Vendor) => SearchPolicy::Vendor,
            _ => SearchPolicy::Generic(name),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            SearchPolicy::System => PartitionModel::System.name(),
            SearchPolicy::Vendor => PartitionModel::Vendor.name(),
            SearchPolicy::Generic(name) => name,
        }
    }

    fn specific_locations(&self, base: &Path, parent: &Path) -> Vec<PathBuf> {
        let name = self.name();
        match self {
            SearchPolicy::System | SearchPolicy::Vendor => {
                let mut locations = vec![base.join(name), base.join(name).join(name)];
                locations.extend(image_ramdisk_locations(base, name));
                locations.extend(kitchen_ramdisk_locations(parent, name));
                locations
            }
            SearchPolicy::Generic(_) => vec![base.join(name), base.join(name).join(name)],
        }
    }
}

/// Ordered list of paths with duplicates dropped on insertion.
#[derive(Debug, Default, Clone)]
pub struct CandidateList {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl CandidateList {
    pub fn push(&mut self, path: PathBuf) {
        let path = normalize(&path);
        if self.seen.insert(path.clone()) {
            self.paths.push(path);
        }
    }

    /// Inserts ahead of everything collected so far.
    pub fn push_front(&mut self, path: PathBuf) {
        let path = normalize(&path);
        if self.seen.contains(&path) {
            self.paths.retain(|p| p != &path);
        } else {
            self.seen.insert(path.clone());
        }
        self.paths.insert(0, path);
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl Extend<PathBuf> for CandidateList {
    fn extend<I: IntoIterator<Item = PathBuf>>(&mut self, iter: I) {
        for path in iter {
            self.push(path);
        }
    }
}

impl FromIterator<PathBuf> for CandidateList {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut list = CandidateList::default();
        list.extend(iter);
        list
    }
}

/// Candidate directories for `partition_name` under a dump rooted at `base`,
/// most likely first. Nothing is checked on disk here.
pub fn search_locations(base: &Path, partition_name: &str) -> CandidateList {
    let policy = SearchPolicy::for_name(partition_name);
    let parent = lexical_parent(base);
    let grandparent = lexical_parent(&parent);

    let mut locations: CandidateList = policy.specific_locations(base, &parent).into_iter().collect();

    locations.push(base.join(partition_name));
    locations.extend(image_ramdisk_locations(base, partition_name));
    locations.push(parent.join(partition_name));
    locations.extend(kitchen_ramdisk_locations(&parent, partition_name));
    locations.push(grandparent.join(partition_name));

    locations
}

/// Property files that mark a directory as a partition root, after the
/// canonical ones.
pub fn extended_build_prop_locations() -> Vec<PathBuf> {
    defs::EXTENDED_BUILD_PROP_LOCATION
        .iter()
        .map(PathBuf::from)
        .collect()
}

/// `canonical` followed by the extended catalog, each entry once.
pub fn combined_prop_locations(canonical: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    canonical
        .iter()
        .cloned()
        .chain(extended_build_prop_locations())
        .filter(|p| seen.insert(normalize(p)))
        .collect()
}

fn image_ramdisk_locations(base: &Path, name: &str) -> impl Iterator<Item = PathBuf> {
    defs::IMAGE_RAMDISK_DIRS
        .iter()
        .map(move |image| base.join(image).join(defs::RAMDISK_DIR_NAME).join(name))
}

fn kitchen_ramdisk_locations(parent: &Path, name: &str) -> impl Iterator<Item = PathBuf> {
    defs::KITCHEN_RAMDISK_DIRS
        .iter()
        .map(move |ramdisk| parent.join(ramdisk).join(name))
}

/// Parent without touching the filesystem. `/` is its own parent and a
/// lone relative component has `.` as parent.
pub fn lexical_parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Drops `.` components so `./vendor` and `vendor` compare equal. `..` is
/// kept since resolving it needs the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
