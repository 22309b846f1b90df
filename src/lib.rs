//! # ding
//!
//! A content-addressed compression benchmark.
//!
//! ding hashes a file with SHA-256, runs the content through every
//! registered compression codec, times each one, and persists every
//! compressed variant into a flat object store under the enclosing
//! repository's `.ding/objects/` directory. One invocation produces one
//! report: per-codec elapsed time, compressed size, and ratio, in a fixed
//! codec order.
//!
//! ## Example
//!
//! ```ignore
//! use ding::{bench, codec, ObjectStore, Repository};
//!
//! let repo = Repository::discover(".")?;
//! let store = ObjectStore::open(repo.storage())?;
//! let report = bench::run("notes.txt", &codec::registry(), &store)?;
//! for row in &report.results {
//!     println!("{}: {} bytes", row.codec, row.compressed_size);
//! }
//! ```

pub mod bench;
pub mod codec;

mod error;
mod oid;
mod repo;
mod store;

pub use bench::{BenchmarkReport, BenchmarkResult};
pub use codec::{registry, Codec};
pub use error::{Error, Result};
pub use oid::Oid;
pub use repo::{InitOutcome, Repository};
pub use store::ObjectStore;

/// Marker directory identifying a repository root
pub const DING_DIR: &str = ".ding";

/// Storage subdirectory inside the marker, one file per stored object
pub const OBJECTS_DIR: &str = "objects";
