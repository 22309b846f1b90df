//! The codec registry
//!
//! Every compression algorithm ding benchmarks is a variant of [`Codec`].
//! The mandatory set (`raw`, `gzip`, `bz2`, `lzma`) is always compiled in;
//! `zstd` and `lz4` ride behind cargo features and are left out of the
//! registry entirely when their backend crate is not built, so the registry
//! only ever hands out codecs that are safe to invoke.
//!
//! Compression levels are fixed here, at registry-build time. They are not
//! tunable per call.

use crate::{Error, Result};
use std::io::Write;

const GZIP_LEVEL: u32 = 6;
const BZIP2_LEVEL: u32 = 9;
const LZMA_PRESET: u32 = 6;
#[cfg(feature = "zstd")]
const ZSTD_LEVEL: i32 = 6;

/// A named compression algorithm with a fixed configuration level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    /// Identity transform, stores the input verbatim
    Raw,
    /// DEFLATE in a gzip wrapper, the general-purpose baseline
    Gzip,
    /// bzip2 at maximum block size, trades speed for ratio
    Bzip2,
    /// LZMA in an xz container, large-window compression
    Lzma,
    /// Zstandard; registered only when the `zstd` feature is built
    Zstd,
    /// LZ4 with a length prefix; registered only when the `lz4` feature is built
    Lz4,
}

impl Codec {
    /// Name used in reports and object store keys
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Raw => "raw",
            Codec::Gzip => "gzip",
            Codec::Bzip2 => "bz2",
            Codec::Lzma => "lzma",
            Codec::Zstd => "zstd",
            Codec::Lz4 => "lz4",
        }
    }

    /// Compress `data`, returning the complete compressed byte sequence.
    ///
    /// Deterministic: the same input at the same fixed level yields the
    /// same output. Invoking a codec whose backend was not compiled in
    /// fails with [`Error::CodecUnavailable`]; the registry never hands
    /// out such a codec, so this path indicates a registry bug.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Codec::Raw => Ok(data.to_vec()),
            Codec::Gzip => {
                let mut encoder = flate2::write::GzEncoder::new(
                    Vec::new(),
                    flate2::Compression::new(GZIP_LEVEL),
                );
                encoder.write_all(data).map_err(|e| self.failed(e))?;
                encoder.finish().map_err(|e| self.failed(e))
            }
            Codec::Bzip2 => {
                let mut encoder =
                    bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::new(BZIP2_LEVEL));
                encoder.write_all(data).map_err(|e| self.failed(e))?;
                encoder.finish().map_err(|e| self.failed(e))
            }
            Codec::Lzma => {
                let mut encoder = xz2::write::XzEncoder::new(Vec::new(), LZMA_PRESET);
                encoder.write_all(data).map_err(|e| self.failed(e))?;
                encoder.finish().map_err(|e| self.failed(e))
            }
            #[cfg(feature = "zstd")]
            Codec::Zstd => zstd::encode_all(data, ZSTD_LEVEL).map_err(|e| self.failed(e)),
            #[cfg(not(feature = "zstd"))]
            Codec::Zstd => Err(Error::CodecUnavailable(self.name())),
            #[cfg(feature = "lz4")]
            Codec::Lz4 => Ok(lz4_flex::compress_prepend_size(data)),
            #[cfg(not(feature = "lz4"))]
            Codec::Lz4 => Err(Error::CodecUnavailable(self.name())),
        }
    }

    fn failed(&self, source: std::io::Error) -> Error {
        Error::Codec {
            name: self.name(),
            source,
        }
    }
}

/// Build the registry: the fixed, ordered codec set for this process.
///
/// The mandatory codecs come first in a deterministic order, followed by
/// the optional ones that were compiled in. The order is a correctness
/// requirement for reporting, so results are comparable across runs.
pub fn registry() -> Vec<Codec> {
    let mut codecs = vec![Codec::Raw, Codec::Gzip, Codec::Bzip2, Codec::Lzma];
    #[cfg(feature = "zstd")]
    codecs.push(Codec::Zstd);
    #[cfg(feature = "lz4")]
    codecs.push(Codec::Lz4);
    codecs
}
