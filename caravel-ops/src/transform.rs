//! Byte-stream transform stages
//!
//! Push-style stages sitting between a transfer's source and sink:
//! chunks go in, transformed bytes come out. The gzip stages drain
//! their output after every chunk so buffering stays bounded.

use std::io::Write;
use std::mem;

use bytes::Bytes;
use flate2::write::{GzDecoder, GzEncoder};
use flate2::Compression;

use caravel_core::{CaravelError, CaravelResult};

/// Transform applied between a transfer's source and sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    None,
    Hash,
    Compress,
    Decompress,
}

pub(crate) enum Stage {
    Pass,
    Hash(blake3::Hasher),
    Compress(GzEncoder<Vec<u8>>),
    Decompress(GzDecoder<Vec<u8>>),
}

impl Stage {
    pub(crate) fn new(transform: Transform) -> Self {
        match transform {
            Transform::None => Stage::Pass,
            Transform::Hash => Stage::Hash(blake3::Hasher::new()),
            Transform::Compress => {
                Stage::Compress(GzEncoder::new(Vec::new(), Compression::default()))
            }
            Transform::Decompress => Stage::Decompress(GzDecoder::new(Vec::new())),
        }
    }

    /// Feed one chunk; returns whatever output the stage has ready.
    /// The hash stage consumes its input and produces nothing.
    pub(crate) fn update(&mut self, chunk: &[u8]) -> CaravelResult<Bytes> {
        match self {
            Stage::Pass => Ok(Bytes::copy_from_slice(chunk)),
            Stage::Hash(hasher) => {
                hasher.update(chunk);
                Ok(Bytes::new())
            }
            Stage::Compress(encoder) => {
                encoder.write_all(chunk)?;
                Ok(mem::take(encoder.get_mut()).into())
            }
            Stage::Decompress(decoder) => {
                decoder
                    .write_all(chunk)
                    .map_err(|e| CaravelError::CorruptStream(e.to_string()))?;
                Ok(mem::take(decoder.get_mut()).into())
            }
        }
    }

    /// Flush the stage. Returns trailing output plus, for hashing, the
    /// lowercase hex digest.
    pub(crate) fn finish(self) -> CaravelResult<(Bytes, Option<String>)> {
        match self {
            Stage::Pass => Ok((Bytes::new(), None)),
            Stage::Hash(hasher) => {
                let digest = hex::encode(hasher.finalize().as_bytes());
                Ok((Bytes::new(), Some(digest)))
            }
            Stage::Compress(encoder) => Ok((encoder.finish()?.into(), None)),
            Stage::Decompress(decoder) => {
                let trailing = decoder
                    .finish()
                    .map_err(|e| CaravelError::CorruptStream(e.to_string()))?;
                Ok((trailing.into(), None))
            }
        }
    }
}
