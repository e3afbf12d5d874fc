use crate::error::{EngineError, Result};
use crate::stats::FrequencyTable;
use icu_casemap::CaseMapper;
use std::path::Path;

/// Read the whole file and fold its characters into `table`.
///
/// Returns the number of characters decoded.
///
/// # Errors
/// Returns [`EngineError::ReadFile`] if the file cannot be read.
pub fn process_file(path: &Path, table: &mut FrequencyTable) -> Result<u64> {
    let buf = std::fs::read(path).map_err(|e| EngineError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let decoded = process_bytes(&buf, table);
    log::debug!("scanned {} ({decoded} chars)", path.display());
    Ok(decoded)
}

/// Decode `buf` as UTF-8 and count every character in upper case.
///
/// Each byte that does not belong to a valid sequence counts as one
/// `U+FFFD`, so arbitrary binary input always terminates.
pub fn process_bytes(buf: &[u8], table: &mut FrequencyTable) -> u64 {
    let mapper = CaseMapper::new();
    let mut decoded = 0;
    for chunk in buf.utf8_chunks() {
        for ch in chunk.valid().chars() {
            table.record(mapper.simple_uppercase(ch));
            decoded += 1;
        }
        // 不正なバイト列は1バイトにつき置換文字1つ
        for _ in chunk.invalid() {
            table.record(char::REPLACEMENT_CHARACTER);
            decoded += 1;
        }
    }
    decoded
}

/// Unicode simple uppercase mapping (one character in, one out).
///
/// Characters without a simple uppercase mapping are returned unchanged,
/// even when a multi-character full mapping exists (`ß`, `ﬀ`).
pub fn to_upper_single(ch: char) -> char {
    CaseMapper::new().simple_uppercase(ch)
}
