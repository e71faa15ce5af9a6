//! Metric layer: which router fields become which output metrics.
//!
//! This module owns:
//! - MetricSpec (one service/action/field -> metric name mapping)
//! - MetricSource (an ordered table emitted under one `source=` tag)

pub mod table;

pub use table::{MetricSource, MetricSpec, WAN};
