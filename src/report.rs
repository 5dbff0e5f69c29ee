// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::partitions::{AndroidPartition, PartitionModel, Partitions};

#[derive(Serialize)]
struct LocateReport<'a> {
    dump: &'a Path,
    partitions: Vec<&'a AndroidPartition>,
    missing: Vec<PartitionModel>,
}

#[derive(Serialize)]
struct CandidatesReport<'a> {
    name: &'a str,
    candidates: &'a [PathBuf],
}

pub fn render_partitions(partitions: &Partitions, json: bool) -> Result<String> {
    let found = partitions.all();
    let missing: Vec<PartitionModel> = PartitionModel::ALL
        .iter()
        .copied()
        .filter(|model| partitions.get(*model).is_none())
        .collect();

    if json {
        let report = LocateReport {
            dump: partitions.dump_path(),
            partitions: found,
            missing,
        };
        return Ok(serde_json::to_string(&report)?);
    }

    let mut lines: Vec<String> = found.iter().map(|p| p.to_string()).collect();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|m| m.name()).collect();
        lines.push(format!("not found: {}", names.join(", ")));
    }
    Ok(lines.join("\n"))
}

pub fn render_candidates(name: &str, candidates: &[PathBuf], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&CandidatesReport { name, candidates })?);
    }
    Ok(candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn dump_with(files: &[&str]) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("fw").join("dump");
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        (tmp, root)
    }

    #[test]
    fn text_report_lists_found_and_missing() {
        let (_tmp, root) = dump_with(&["system/build.prop", "vendor/build.prop", "odm/build.prop"]);
        let partitions = Partitions::new(&root).unwrap();

        let text = render_partitions(&partitions, false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("system: {}", root.join("system").display()));
        assert_eq!(lines[1], format!("vendor: {}", root.join("vendor").display()));
        assert_eq!(lines[2], format!("odm: {}", root.join("odm").display()));
        assert_eq!(
            lines[3],
            "not found: product, system_ext, system_dlkm, vendor_dlkm, odm_dlkm"
        );
    }

    #[test]
    fn json_report_keeps_discovery_order() {
        let (_tmp, root) = dump_with(&["system/build.prop", "vendor/build.prop"]);
        let partitions = Partitions::new(&root).unwrap();

        let json = render_partitions(&partitions, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["partitions"][0]["model"], "system");
        assert_eq!(value["partitions"][1]["model"], "vendor");
        assert_eq!(
            value["partitions"][1]["path"],
            root.join("vendor").to_string_lossy().as_ref()
        );
        assert_eq!(value["missing"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn candidates_render_one_per_line() {
        let candidates = vec![PathBuf::from("/d/odm"), PathBuf::from("/d/odm/odm")];
        assert_eq!(
            render_candidates("odm", &candidates, false).unwrap(),
            "/d/odm\n/d/odm/odm"
        );
        let json = render_candidates("odm", &candidates, true).unwrap();
        assert_eq!(json, r#"{"name":"odm","candidates":["/d/odm","/d/odm/odm"]}"#);
    }
}
