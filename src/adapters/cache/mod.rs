//! In-memory caching layer for document reads.
//!
//! Uses `moka` for concurrent TTL-based storage. Expiry is additionally
//! checked against a per-entry insertion timestamp so the observable
//! boundary does not depend on when moka runs its housekeeping.

pub mod clock;
pub mod in_memory_document_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use in_memory_document_cache::{InMemoryDocumentCache, DEFAULT_EXPIRATION};
