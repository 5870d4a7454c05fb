// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Structured state dumps for manual inspection

use crate::geometry::{Frame, Platform};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Full state of both frames and the assembled platform
#[derive(Debug, Serialize)]
pub struct StateDump<'a> {
    pub base_frame: &'a Frame,
    pub moving_frame: &'a Frame,
    pub platform: &'a Platform,
}

impl<'a> StateDump<'a> {
    pub fn new(platform: &'a Platform) -> Self {
        Self {
            base_frame: platform.base_frame(),
            moving_frame: platform.moving_frame(),
            platform,
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).context("Failed to serialize platform state")
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize platform state")
    }
}

/// Compact summary with just the leg lengths
pub fn leg_summary(platform: &Platform) -> Value {
    json!({
        "centroid_offset": platform.centroid_offset(),
        "leg_lengths": platform.leg_lengths(),
    })
}
