//! The benchmark harness
//!
//! Reads a file once, hashes it, then runs every registered codec over the
//! same immutable buffer in registry order, timing each compression call,
//! persisting each variant, and collecting one result row per codec.
//!
//! The loop is strictly sequential: timings are only comparable when no
//! two codecs run at once.

use crate::codec::Codec;
use crate::store::ObjectStore;
use crate::{Error, Oid, Result};
use log::debug;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use std::time::{Duration, Instant};

/// One codec's measurements for a single input
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    pub codec: &'static str,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub compressed_size: u64,
    /// Compressed size over original size; 0.0 for a zero-byte input
    pub ratio: f64,
}

/// The full report for one input file, rows in registry order
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    pub oid: Oid,
    pub original_size: u64,
    pub results: Vec<BenchmarkResult>,
}

/// Benchmark `file` against every codec in `codecs`, storing each
/// compressed variant in `store`.
///
/// Results come back in codec order, never reordered. Any single codec or
/// store failure aborts the whole run; there is no best-effort
/// continuation, so a report always covers the full codec set.
pub fn run(
    file: impl AsRef<Path>,
    codecs: &[Codec],
    store: &ObjectStore,
) -> Result<BenchmarkReport> {
    let file = file.as_ref();
    let content = match std::fs::read(file) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::InputNotFound(file.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let original_size = content.len() as u64;
    let oid = Oid::digest(&content);
    debug!(
        "benchmarking {} ({} bytes, oid {})",
        file.display(),
        original_size,
        oid.short()
    );

    let mut results = Vec::with_capacity(codecs.len());
    for codec in codecs {
        let start = Instant::now();
        let compressed = codec.compress(&content)?;
        // Only the compression call is timed; the store write below is not
        let elapsed = start.elapsed();

        let compressed_size = compressed.len() as u64;
        let ratio = if original_size == 0 {
            0.0
        } else {
            compressed_size as f64 / original_size as f64
        };

        store.put(codec.name(), &oid, &compressed)?;
        results.push(BenchmarkResult {
            codec: codec.name(),
            elapsed,
            compressed_size,
            ratio,
        });
    }

    Ok(BenchmarkReport {
        oid,
        original_size,
        results,
    })
}

fn serialize_millis<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}
