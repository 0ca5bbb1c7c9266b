//! In-memory dictionary and delta encoding for program records.
//!
//! Names are registered on first sight and replaced by `CODE_<n>` tokens on
//! every later sight. Beneficiary counts are replaced by the difference from
//! the last count encoded under the same name.
//!
//! This is a session cache, not a storage format. Decoding depends on the
//! store's current state: `decode_delta` only reproduces the original count
//! when the store has not encoded a newer count for that name since. When it
//! has, the result silently reflects the newer baseline.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use super::code_token::{format_code, parse_code};
use crate::scoring::round_to;

/// Assumed width of an encoded name when estimating compression.
const ASSUMED_CODE_WIDTH: usize = 8;

/// Result of delta-encoding one count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeltaEncoded {
    /// Difference from the previous count; absent on first sight.
    pub delta: Option<i64>,
    /// The absolute count that was encoded.
    pub reference: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressedProgram {
    pub compressed_name: String,
    pub delta: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    pub entry_count: usize,
    pub tracked_name_count: usize,
    /// Rough size estimate, not a measured byte ratio.
    pub compression_ratio: f64,
}

#[derive(Debug)]
struct StoreState {
    name_to_code: HashMap<String, u64>,
    code_to_name: HashMap<u64, String>,
    last_seen_count: HashMap<String, i64>,
    next_code: u64,
}

impl StoreState {
    fn new() -> Self {
        Self {
            name_to_code: HashMap::new(),
            code_to_name: HashMap::new(),
            last_seen_count: HashMap::new(),
            next_code: 1,
        }
    }

    fn encode_name(&mut self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        if let Some(&code) = self.name_to_code.get(name) {
            debug!("Dictionary encode: '{}' -> CODE_{}", name, code);
            return format_code(code);
        }

        let code = self.next_code;
        self.next_code += 1;
        self.name_to_code.insert(name.to_string(), code);
        self.code_to_name.insert(code, name.to_string());

        debug!("Added to dictionary: '{}' -> CODE_{}", name, code);
        name.to_string()
    }

    fn encode_delta(&mut self, name: &str, current: i64) -> DeltaEncoded {
        let previous = self.last_seen_count.insert(name.to_string(), current);

        // A difference that overflows is sent as an absolute count instead.
        let delta = previous.and_then(|previous| current.checked_sub(previous));
        match delta {
            Some(delta) => debug!("Delta encode: {} = {} (delta: {:+})", name, current, delta),
            None => debug!("Delta encode (absolute): {} = {}", name, current),
        }

        DeltaEncoded {
            delta,
            reference: current,
        }
    }

    fn compression_ratio(&self) -> f64 {
        if self.name_to_code.is_empty() {
            return 1.0;
        }

        let original_size: usize = self.name_to_code.keys().map(|n| n.chars().count()).sum();
        let compressed_size = self.name_to_code.len() * ASSUMED_CODE_WIDTH;
        round_to(original_size as f64 / compressed_size as f64, 2)
    }
}

/// Shared encoding state for one application session.
///
/// All state sits behind a single mutex, so one instance can be shared across
/// threads by reference or `Arc`.
#[derive(Debug)]
pub struct EncodingStore {
    state: Mutex<StoreState>,
}

impl Default for EncodingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::new()),
        }
    }

    /// Register or replace a name.
    ///
    /// The first call for a name registers it and returns it unchanged; later
    /// calls return its `CODE_<n>` token. Empty names pass through.
    pub fn encode_name(&self, name: &str) -> String {
        self.state.lock().encode_name(name)
    }

    /// Resolve a token back to its name.
    ///
    /// Literal text and tokens with unknown codes come back unchanged.
    pub fn decode_name(&self, token: &str) -> String {
        let Some(code) = parse_code(token) else {
            return token.to_string();
        };

        self.state
            .lock()
            .code_to_name
            .get(&code)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }

    /// Encode `current` as a difference from the last count seen for `name`.
    ///
    /// The delta is absent on first sight and when the difference overflows;
    /// `reference` always carries the absolute count.
    pub fn encode_delta(&self, name: &str, current: i64) -> DeltaEncoded {
        self.state.lock().encode_delta(name, current)
    }

    /// Rebuild an absolute count.
    ///
    /// Adds `delta` to the count currently tracked for `name`. Returns
    /// `reference` when there is no delta, the name is not tracked, or the sum
    /// does not fit in an `i64`.
    pub fn decode_delta(&self, name: &str, delta: Option<i64>, reference: i64) -> i64 {
        let Some(delta) = delta else {
            return reference;
        };

        self.state
            .lock()
            .last_seen_count
            .get(name)
            .and_then(|previous| previous.checked_add(delta))
            .unwrap_or(reference)
    }

    pub fn stats(&self) -> CompressionStats {
        let state = self.state.lock();
        CompressionStats {
            entry_count: state.name_to_code.len(),
            tracked_name_count: state.last_seen_count.len(),
            compression_ratio: state.compression_ratio(),
        }
    }

    pub fn clear(&self) {
        *self.state.lock() = StoreState::new();
        info!("Encoding store cleared");
    }

    pub fn compress_program_data(&self, name: &str, beneficiaries: i64) -> CompressedProgram {
        let mut state = self.state.lock();
        let compressed_name = state.encode_name(name);
        let DeltaEncoded { delta, .. } = state.encode_delta(name, beneficiaries);
        CompressedProgram {
            compressed_name,
            delta,
        }
    }

    /// Inverse of [`compress_program_data`](Self::compress_program_data).
    ///
    /// `name` is the original program name, used for the delta lookup.
    pub fn decompress_program_data(
        &self,
        compressed_name: &str,
        delta: Option<i64>,
        reference: i64,
        name: &str,
    ) -> (String, i64) {
        let original_name = self.decode_name(compressed_name);
        let count = self.decode_delta(name, delta, reference);
        (original_name, count)
    }
}
