//! Transport codec: YAML text <-> base64(zlib(YAML text))

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;
use types::TransportError;

/// Compress and encode a document for storage in an environment variable
pub fn encode(document: &[u8]) -> Result<String, TransportError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(document)?;
    let compressed = encoder.finish()?;

    Ok(STANDARD.encode(compressed))
}

/// Decode a transport string back into the original document text
pub fn decode(encoded: &str) -> Result<String, TransportError> {
    let compressed = STANDARD.decode(encoded)?;
    let document = inflate(&compressed)?;

    Ok(String::from_utf8(document)?)
}

/// Inflate a complete zlib stream.
///
/// `flate2`'s reader adapters return `Ok` on empty or truncated input, so the
/// stream is driven by hand and must reach `StreamEnd`.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>, TransportError> {
    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(compressed.len().saturating_mul(4).max(256));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity());
        }

        let before = (inflater.total_in(), inflater.total_out());
        let consumed = before.0 as usize;
        let status = inflater
            .decompress_vec(&compressed[consumed..], &mut output, FlushDecompress::None)
            .map_err(|e| TransportError::Inflate(e.to_string()))?;

        if status == Status::StreamEnd {
            return Ok(output);
        }

        // No progress with room left in the buffer: the input ran out early.
        let progressed = (inflater.total_in(), inflater.total_out()) != before;
        if !progressed && output.len() < output.capacity() {
            return Err(TransportError::Inflate(
                "unexpected end of compressed stream".to_string(),
            ));
        }
    }
}
