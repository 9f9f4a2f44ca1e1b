//! Kbuckets
use std::fmt::{self, Debug, Formatter};
use std::slice::Iter;
use std::time::Instant;

use num_bigint::BigUint;

use crate::common::{Contact, ContactKey};

/// K = the default maximum number of contacts in a k-bucket.
pub const DEFAULT_K: usize = 20;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors reported by [KBucket] operations.
pub enum KBucketError {
    /// The bucket is at capacity and the contact is not already present.
    /// The caller decides whether to split the range, evict a stale entry,
    /// or discard the contact; the bucket never makes that call itself.
    #[error("No space in bucket to insert contact")]
    Full,

    /// No contact matching the given id is stored in this bucket.
    #[error("Contact not found in bucket")]
    NotFound,
}

/// A recency ordered, capacity bounded set of contacts covering the
/// half-open slice `[range_min, range_max)` of the 512 bit keyspace.
///
/// Contacts are sorted by the time they were last seen, least recently
/// seen at the head and most recently seen at the tail.
///
/// Every mutation takes `&mut self`, so a bucket shared across inbound
/// message handlers goes behind a `Mutex`; buckets are independent
/// partitions of the keyspace and need no coordination between instances.
#[derive(Clone)]
pub struct KBucket {
    /// Lower bound (inclusive) of the covered keyspace slice.
    range_min: BigUint,
    /// Upper bound (exclusive) of the covered keyspace slice.
    range_max: BigUint,
    /// K is the maximum number of contacts in this bucket.
    k: usize,
    /// Contacts in the bucket, sorted by the least recently seen.
    contacts: Vec<Contact>,
    /// The last time this bucket was touched. Stored for an external
    /// refresh policy to detect staleness, never acted on here.
    last_accessed: Instant,
}

impl KBucket {
    /// Creates a bucket covering `[range_min, range_max)` with the default
    /// capacity [DEFAULT_K]. The range bounds are fixed for the bucket's
    /// lifetime; a routing table replaces the bucket wholesale on split.
    pub fn new(range_min: BigUint, range_max: BigUint) -> Self {
        KBucket {
            range_min,
            range_max,
            k: DEFAULT_K,
            contacts: Vec::with_capacity(DEFAULT_K),
            last_accessed: Instant::now(),
        }
    }

    // === Options ===

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self.contacts = Vec::with_capacity(k);
        self
    }

    // === Getters ===

    pub fn range_min(&self) -> &BigUint {
        &self.range_min
    }

    pub fn range_max(&self) -> &BigUint {
        &self.range_max
    }

    /// The last time this bucket was [touch](Self::touch)ed.
    pub fn last_accessed(&self) -> Instant {
        self.last_accessed
    }

    // === Public Methods ===

    /// Records that the routing layer accessed this bucket.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    /// Adds a contact, or moves an already known contact (matched by id) to
    /// the most recently seen position at the tail.
    ///
    /// Fails with [KBucketError::Full] when the bucket already holds `k`
    /// contacts and this one is new; the bucket is left unmodified.
    ///
    /// Whether the contact's id actually falls within
    /// `[range_min, range_max)` is not checked here; correct placement is
    /// the caller's responsibility.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), KBucketError> {
        if let Some(index) = self.position(&contact) {
            self.contacts.remove(index);
            self.contacts.push(contact);
            Ok(())
        } else if self.contacts.len() < self.k {
            self.contacts.push(contact);
            Ok(())
        } else {
            Err(KBucketError::Full)
        }
    }

    /// Returns the stored contact matching `target` by id.
    pub fn get_contact(&self, target: &impl ContactKey) -> Result<&Contact, KBucketError> {
        self.position(target)
            .map(|index| &self.contacts[index])
            .ok_or(KBucketError::NotFound)
    }

    /// Returns up to `count` contacts in stored order, least recently seen
    /// first. `count == 0` means all contacts, and a `count` beyond the
    /// current size returns everything.
    ///
    /// The list is truncated to `count` before `exclude` is applied, so
    /// excluding a contact present in the returned prefix shortens the
    /// result rather than pulling in a replacement.
    pub fn get_contacts(&self, count: usize, exclude: Option<&impl ContactKey>) -> Vec<Contact> {
        let count = if count == 0 {
            self.contacts.len()
        } else {
            count.min(self.contacts.len())
        };

        let mut contact_list = self.contacts[..count].to_vec();

        if let Some(excluded) = exclude {
            if let Some(index) = contact_list
                .iter()
                .position(|contact| contact.id == *excluded.key())
            {
                contact_list.remove(index);
            }
        }

        contact_list
    }

    /// Removes the contact matching `target` by id. On failure the bucket
    /// is unchanged.
    pub fn remove_contact(&mut self, target: &impl ContactKey) -> Result<(), KBucketError> {
        match self.position(target) {
            Some(index) => {
                self.contacts.remove(index);
                Ok(())
            }
            None => Err(KBucketError::NotFound),
        }
    }

    /// Whether `key` belongs in this bucket: `range_min <= key < range_max`.
    ///
    /// The upper bound is exclusive so that adjacent buckets partition the
    /// keyspace into contiguous, non-overlapping slices. Keys held as hex
    /// strings are converted first through
    /// [keyspace::hex_to_uint](crate::keyspace::hex_to_uint).
    pub fn key_in_range(&self, key: &BigUint) -> bool {
        self.range_min <= *key && *key < self.range_max
    }

    /// The number of contacts currently stored.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Contact> {
        self.contacts.iter()
    }

    // === Private Methods ===

    /// Position of the element matching `target` by id. The single matching
    /// predicate behind add, get and remove.
    fn position(&self, target: &impl ContactKey) -> Option<usize> {
        let id = target.key();
        self.contacts.iter().position(|contact| contact.id == *id)
    }
}

impl Debug for KBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "KBucket{{ contacts: {} }}", self.contacts.len())
    }
}
