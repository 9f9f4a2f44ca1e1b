//! Building blocks for a Kademlia-style DHT node over a 512 bit keyspace.
//!
//! The functional core is the [KBucket]: a fixed-capacity, recency-ordered
//! contact store covering one half-open slice `[range_min, range_max)` of
//! the identifier space. The routing table that partitions the keyspace
//! into buckets, iterative lookups, and the request dispatch behind the
//! wire framing are not built yet; [net] holds only the low level framing
//! and a placeholder echo handler.

mod common;
mod error;

pub mod kbucket;
pub mod keyspace;
pub mod net;

pub use crate::common::{Contact, ContactKey, Id, ID_SIZE};
pub use crate::error::{Error, Result};
pub use crate::kbucket::{KBucket, KBucketError, DEFAULT_K};
