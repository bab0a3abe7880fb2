// ABOUTME: Service layer orchestrating schedule generation
// ABOUTME: Glues cache, prediction provider, and the periodization engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Schedule generation with caching and upstream prediction lookup
pub mod schedule;

pub use schedule::ScheduleService;
