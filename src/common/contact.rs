//! Struct and implementation of the Contact entry stored in k-buckets
use std::net::SocketAddr;

use crate::common::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A peer known to this node, identified by its 512 bit id
pub struct Contact {
    pub id: Id,
    pub address: SocketAddr,
}

impl Contact {
    /// Creates a new Contact from an id and socket address.
    pub fn new(id: Id, address: SocketAddr) -> Contact {
        Contact { id, address }
    }

    pub fn random() -> Contact {
        Contact {
            id: Id::random(),
            address: SocketAddr::from(([0, 0, 0, 0], 0)),
        }
    }
}

/// A lookup target that names a bucket element by id.
///
/// Both a bare [Id] and a full [Contact] can name an element, and every
/// lookup, removal and exclusion resolves through this one predicate.
pub trait ContactKey {
    fn key(&self) -> &Id;
}

impl ContactKey for Id {
    fn key(&self) -> &Id {
        self
    }
}

impl ContactKey for Contact {
    fn key(&self) -> &Id {
        &self.id
    }
}
