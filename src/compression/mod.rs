pub mod code_token;
pub mod encoding_store;
pub mod report;

pub use code_token::{format_code, parse_code, CODE_PREFIX};
pub use encoding_store::{CompressedProgram, CompressionStats, DeltaEncoded, EncodingStore};
pub use report::{compress_records, CompressedEntry, CompressionReport};
