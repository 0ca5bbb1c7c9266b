use serde::Serialize;

use super::encoding_store::{CompressionStats, EncodingStore};
use crate::core::ProgramRecord;

/// One record as it would be stored after encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressedEntry {
    pub program_id: u64,
    pub time_period: String,
    pub compressed_name: String,
    pub delta: Option<i64>,
    pub reference: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionReport {
    pub enabled: bool,
    pub entries: Vec<CompressedEntry>,
    pub stats: CompressionStats,
}

/// Encode `records` in order through `store`.
///
/// With `enabled == false` names and counts pass through untouched and the
/// store is left alone.
pub fn compress_records(
    store: &EncodingStore,
    records: &[ProgramRecord],
    enabled: bool,
) -> CompressionReport {
    let entries = records
        .iter()
        .map(|record| {
            let (compressed_name, delta) = if enabled {
                let compressed =
                    store.compress_program_data(&record.program_name, record.beneficiaries);
                (compressed.compressed_name, compressed.delta)
            } else {
                (record.program_name.clone(), None)
            };

            CompressedEntry {
                program_id: record.id,
                time_period: record.time_period.clone(),
                compressed_name,
                delta,
                reference: record.beneficiaries,
            }
        })
        .collect();

    CompressionReport {
        enabled,
        entries,
        stats: store.stats(),
    }
}
