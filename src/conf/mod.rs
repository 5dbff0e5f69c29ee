// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod config;
