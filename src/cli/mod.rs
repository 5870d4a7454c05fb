// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the stewart binary

pub mod dump;
pub mod reporter;

pub use dump::{leg_summary, StateDump};
pub use reporter::Reporter;
