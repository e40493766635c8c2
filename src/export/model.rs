// src/export/model.rs

use crate::models::Interval;
use crate::utils::format_timestamp_lossy;
use serde::Serialize;

/// Flat row describing one overlap segment, shared by CSV and JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SegmentExport {
    pub index: usize,
    pub start: u64,
    pub end: u64,
    pub duration: u64,
    pub start_at: String,
    pub end_at: String,
}

impl SegmentExport {
    pub fn from_segment(index: usize, seg: &Interval, ts_format: &str) -> Self {
        Self {
            index,
            start: seg.start(),
            end: seg.end(),
            duration: seg.duration(),
            start_at: format_timestamp_lossy(seg.start(), ts_format),
            end_at: format_timestamp_lossy(seg.end(), ts_format),
        }
    }
}

pub(crate) fn segments_to_rows(segments: &[Interval], ts_format: &str) -> Vec<SegmentExport> {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| SegmentExport::from_segment(i + 1, s, ts_format))
        .collect()
}
