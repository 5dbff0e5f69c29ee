// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Generic system image: system and everything shipped alongside it.
    Ssi,
    /// Vendor side of the Treble split.
    Treble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionModel {
    System,
    Product,
    SystemExt,
    SystemDlkm,
    Vendor,
    Odm,
    VendorDlkm,
    OdmDlkm,
}

impl PartitionModel {
    pub const ALL: &'static [PartitionModel] = &[
        PartitionModel::System,
        PartitionModel::Product,
        PartitionModel::SystemExt,
        PartitionModel::SystemDlkm,
        PartitionModel::Vendor,
        PartitionModel::Odm,
        PartitionModel::VendorDlkm,
        PartitionModel::OdmDlkm,
    ];

    /// Directory name of the partition inside a dump.
    pub fn name(self) -> &'static str {
        match self {
            PartitionModel::System => "system",
            PartitionModel::Product => "product",
            PartitionModel::SystemExt => "system_ext",
            PartitionModel::SystemDlkm => "system_dlkm",
            PartitionModel::Vendor => "vendor",
            PartitionModel::Odm => "odm",
            PartitionModel::VendorDlkm => "vendor_dlkm",
            PartitionModel::OdmDlkm => "odm_dlkm",
        }
    }

    pub fn groups(self) -> &'static [Group] {
        match self {
            PartitionModel::System
            | PartitionModel::Product
            | PartitionModel::SystemExt
            | PartitionModel::SystemDlkm => &[Group::Ssi],
            PartitionModel::Vendor
            | PartitionModel::Odm
            | PartitionModel::VendorDlkm
            | PartitionModel::OdmDlkm => &[Group::Treble],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|model| model.name() == name)
    }

    pub fn from_group(group: Group) -> impl Iterator<Item = PartitionModel> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |model| model.groups().contains(&group))
    }
}

impl fmt::Display for PartitionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_back_to_models() {
        for &model in PartitionModel::ALL {
            assert_eq!(PartitionModel::from_name(model.name()), Some(model));
        }
        assert_eq!(PartitionModel::from_name("unknown_partition"), None);
        assert_eq!(PartitionModel::from_name("SYSTEM"), None);
    }

    #[test]
    fn groups_are_anchored_by_system_and_vendor() {
        let ssi: Vec<_> = PartitionModel::from_group(Group::Ssi).collect();
        let treble: Vec<_> = PartitionModel::from_group(Group::Treble).collect();

        assert_eq!(ssi.first(), Some(&PartitionModel::System));
        assert_eq!(treble.first(), Some(&PartitionModel::Vendor));
        assert!(ssi.iter().all(|m| !treble.contains(m)));
        assert_eq!(ssi.len() + treble.len(), PartitionModel::ALL.len());
    }

    #[test]
    fn display_uses_identity_name() {
        assert_eq!(PartitionModel::SystemExt.to_string(), "SYSTEM_EXT");
        assert_eq!(
            serde_json::to_string(&PartitionModel::VendorDlkm).unwrap(),
            "\"vendor_dlkm\""
        );
    }
}
