// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub const CONFIG_FILE_DEFAULT: &str = "dump_partitions.toml";

// Canonical property files, probed before the extended catalog.
pub const BUILD_PROP_LOCATION: &[&str] = &["build.prop", "etc/build.prop"];

pub const EXTENDED_BUILD_PROP_LOCATION: &[&str] = &[
    "build.prop",
    "default.prop",
    "prop.default",
    "etc/build.prop",
    "system/build.prop",
    "vendor/build.prop",
    "product/build.prop",
    "system_ext/build.prop",
    "odm/build.prop",
];

// Image directories produced by extraction tools inside a dump
pub const IMAGE_RAMDISK_DIRS: &[&str] = &["boot", "recovery", "vendor_boot"];
pub const RAMDISK_DIR_NAME: &str = "ramdisk";

// Siblings of the dump left behind by an unpacked boot image kitchen
pub const KITCHEN_RAMDISK_DIRS: &[&str] = &["ramdisk", "vendor_ramdisk"];

pub const LOG_TAG: &str = "dumpparts";
