//! Deterministic key and document generation for blurr workloads.
//!
//! Nothing in this crate holds state or randomness: a record index always
//! encodes to the same key, and a key always yields the same document. The
//! engine can therefore re-derive any record it has created without storing it.
//!
//! # Architecture
//!
//! ```text
//!   record index (u64)
//!          │
//!          ▼  KeyFormat::encode
//!        key (String)
//!          │
//!          ▼  DocumentGenerator::generate
//! ┌──────────────────────────────┐
//! │ SizedGenerator               │  fieldI = "fieldI-" + key[I..I+10], filler
//! │ ProfileGenerator             │  alphabet = md5(key) + md5(rev(key))
//! └──────────────────────────────┘
//!          │
//!          ▼
//!     Document { field -> value }
//! ```
//!
//! # Example
//!
//! ```rust
//! use workload_generator::{DocumentGenerator, KeyFormat, ProfileGenerator};
//!
//! let key = KeyFormat::Padded.encode(7);
//! assert_eq!(key, "000000000007");
//!
//! let doc = ProfileGenerator.generate(&key);
//! assert_eq!(doc, ProfileGenerator.generate(&key));
//! ```

pub mod generators;
pub mod hash;
pub mod keys;

pub use generators::profile::{Profile, ProfileGenerator};
pub use generators::sized::SizedGenerator;
pub use generators::{DocumentGenerator, Generator};
pub use hash::{hash, Alphabet};
pub use keys::KeyFormat;
