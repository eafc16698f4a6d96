//! PNG container encoder.
//!
//! Writes 8-bit RGBA, non-interlaced images as exactly three chunks
//! (IHDR, IDAT, IEND). Scanlines are stored unfiltered and compressed as a
//! single zlib stream at a fixed level, so identical input always yields
//! identical bytes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Result, SynthError};
use crate::types::PixelBuffer;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// zlib level used for IDAT. Changing it changes every encoded byte.
pub const COMPRESSION_LEVEL: u32 = 6;

/// Largest width or height PNG allows (2^31 - 1).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

const BIT_DEPTH: u8 = 8;
const COLOUR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// A chunk being written: tag + payload, framed with length and CRC.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub tag: [u8; 4],
    pub payload: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn new(tag: [u8; 4], payload: &'a [u8]) -> Self {
        Self { tag, payload }
    }

    /// CRC-32 over tag ++ payload (the length field is not covered).
    pub fn crc(&self) -> u32 {
        chunk_crc(&self.tag, self.payload)
    }

    /// Size on disk: length + tag + payload + CRC.
    pub fn encoded_len(&self) -> usize {
        12 + self.payload.len()
    }

    /// Append the framed chunk to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        let len = chunk_length(&self.tag, self.payload.len())?;

        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(self.payload);
        out.extend_from_slice(&self.crc().to_be_bytes());
        Ok(())
    }
}

/// The 32-bit length field for a payload of `len` bytes.
fn chunk_length(tag: &[u8; 4], len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        SynthError::CompressionFailure(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} payload of {} bytes exceeds the chunk length field",
                String::from_utf8_lossy(tag),
                len
            ),
        ))
    })
}

fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    hasher.finalize()
}

/// Encode a pixel buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    encode_rgba(buffer.width(), buffer.height(), &buffer.to_rgba_bytes())
}

/// Encode packed RGBA bytes (row-major, 4 bytes per pixel) as PNG bytes.
///
/// Fails with `InvalidDimensions` before doing any work if either dimension
/// is zero or too large, or if `rgba` is not exactly `width * height * 4`
/// bytes long.
pub fn encode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    check_dimensions(width, height)?;

    let stride = width as usize * 4;
    let expected = stride * height as usize;
    if rgba.len() != expected {
        return Err(SynthError::dimensions(
            width,
            height,
            format!("expected {} RGBA bytes, got {}", expected, rgba.len()),
        ));
    }

    let header = header_payload(width, height);
    let data = compress(&scanlines(rgba, stride))?;

    let chunks = [
        Chunk::new(IHDR, &header),
        Chunk::new(IDAT, &data),
        Chunk::new(IEND, &[]),
    ];

    let total = PNG_SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&PNG_SIGNATURE);
    for chunk in &chunks {
        chunk.write_to(&mut out)?;
    }

    Ok(out)
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SynthError::dimensions(
            width,
            height,
            "width and height must be at least 1",
        ));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SynthError::dimensions(
            width,
            height,
            format!("dimensions must not exceed {}", MAX_DIMENSION),
        ));
    }
    Ok(())
}

/// IHDR payload: width, height, depth, colour type, compression, filter, interlace.
fn header_payload(width: u32, height: u32) -> [u8; 13] {
    let mut header = [0u8; 13];
    header[0..4].copy_from_slice(&width.to_be_bytes());
    header[4..8].copy_from_slice(&height.to_be_bytes());
    header[8] = BIT_DEPTH;
    header[9] = COLOUR_TYPE_RGBA;
    // compression, filter and interlace methods are all 0
    header
}

/// Prefix every row with the "none" filter byte.
fn scanlines(rgba: &[u8], stride: usize) -> Vec<u8> {
    let rows = rgba.len() / stride;
    let mut out = Vec::with_capacity(rgba.len() + rows);
    for row in rgba.chunks_exact(stride) {
        out.push(FILTER_NONE);
        out.extend_from_slice(row);
    }
    out
}

fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(COMPRESSION_LEVEL));
    encoder
        .write_all(raw)
        .map_err(SynthError::CompressionFailure)?;
    encoder.finish().map_err(SynthError::CompressionFailure)
}

/// A chunk as found in an encoded stream, with the CRC it declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'b> {
    pub tag: [u8; 4],
    pub payload: &'b [u8],
    pub declared_crc: u32,
}

impl RawChunk<'_> {
    /// The tag as text (e.g. "IHDR").
    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }

    /// CRC recomputed from the tag and payload.
    pub fn computed_crc(&self) -> u32 {
        chunk_crc(&self.tag, self.payload)
    }

    pub fn crc_ok(&self) -> bool {
        self.computed_crc() == self.declared_crc
    }
}

/// Split PNG bytes into raw chunks without decoding them.
///
/// Only the framing is checked here: the signature and that every chunk fits
/// in the input. CRCs are reported, not enforced; see [`verify_png`].
pub fn read_chunks(bytes: &[u8]) -> Result<Vec<RawChunk<'_>>> {
    let rest = bytes
        .strip_prefix(PNG_SIGNATURE.as_slice())
        .ok_or_else(|| SynthError::Verify {
            message: "missing PNG signature".to_string(),
            help: Some("The file is not a PNG image".to_string()),
        })?;

    let mut chunks = Vec::new();
    let mut cursor = rest;

    while !cursor.is_empty() {
        if cursor.len() < 12 {
            return Err(truncated(chunks.len()));
        }

        let len = u32::from_be_bytes([cursor[0], cursor[1], cursor[2], cursor[3]]) as usize;
        let tag = [cursor[4], cursor[5], cursor[6], cursor[7]];
        let body = &cursor[8..];

        if body.len() < len.saturating_add(4) {
            return Err(truncated(chunks.len()));
        }

        let (payload, tail) = body.split_at(len);
        let declared_crc = u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]]);

        chunks.push(RawChunk {
            tag,
            payload,
            declared_crc,
        });
        cursor = &tail[4..];
    }

    Ok(chunks)
}

fn truncated(index: usize) -> SynthError {
    SynthError::Verify {
        message: format!("chunk {} is truncated", index),
        help: None,
    }
}

/// Check the framing, chunk order and every CRC. Returns the chunk count.
pub fn verify_png(bytes: &[u8]) -> Result<usize> {
    let chunks = read_chunks(bytes)?;

    let bad: Vec<String> = chunks
        .iter()
        .enumerate()
        .filter(|(_, chunk)| !chunk.crc_ok())
        .map(|(i, chunk)| format!("{} (#{})", chunk.name(), i))
        .collect();
    if !bad.is_empty() {
        return Err(SynthError::Verify {
            message: format!("CRC mismatch in {}", bad.join(", ")),
            help: Some("The file is corrupt; regenerate it".to_string()),
        });
    }

    match (chunks.first(), chunks.last()) {
        (Some(first), Some(last)) if first.tag == IHDR && last.tag == IEND => Ok(chunks.len()),
        _ => Err(SynthError::Verify {
            message: "chunks must start with IHDR and end with IEND".to_string(),
            help: None,
        }),
    }
}

/// Persist encoded bytes, replacing `path` atomically.
///
/// Writes to a sibling temporary file first and renames it into place, so a
/// reader never sees a half-written image.
pub fn write_png(path: &Path, encoded: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SynthError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let tmp = path.with_extension("png.tmp");
    fs::write(&tmp, encoded).map_err(|e| SynthError::Io {
        path: tmp.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SynthError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to move PNG into place: {}", e),
        }
    })
}
