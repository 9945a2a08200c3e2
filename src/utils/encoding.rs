//! Best-effort text decoding for candidate files

use crate::domain::SelectedFile;
use crate::error::FileReadWarning;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs;

/// How much of a file is inspected for NUL bytes
pub const BINARY_SNIFF_BYTES: usize = 8192;

/// A NUL byte near the start of the file marks it as binary.
pub fn is_binary(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_BYTES)];
    head.contains(&0)
}

/// Decode `bytes` as text.
///
/// A byte-order mark wins; otherwise strict UTF-8 is tried before falling
/// back to the encoding guessed by `chardetng`. On failure the name of the
/// encoding that was attempted is returned.
pub fn decode_text(bytes: &[u8]) -> Result<String, &'static str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return if had_errors { Err(encoding.name()) } else { Ok(text.into_owned()) };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    if encoding == UTF_8 {
        return Err(encoding.name());
    }
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        Err(encoding.name())
    } else {
        Ok(text.into_owned())
    }
}

/// Read a selected file fully and decode it.
pub fn read_text_file(file: &SelectedFile) -> Result<String, FileReadWarning> {
    let bytes = fs::read(&file.path).map_err(|source| FileReadWarning::Io {
        path: file.relative_path.clone(),
        source,
    })?;

    if Encoding::for_bom(&bytes).is_none() && is_binary(&bytes) {
        return Err(FileReadWarning::Binary { path: file.relative_path.clone() });
    }

    decode_text(&bytes).map_err(|encoding| FileReadWarning::Undecodable {
        path: file.relative_path.clone(),
        encoding,
    })
}
