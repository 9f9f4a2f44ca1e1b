//! 512 bit node identifier or a lookup target
use rand::Rng;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use num_bigint::BigUint;

use crate::{Error, Result};

/// The size of node identifiers in bytes (512 bits).
pub const ID_SIZE: usize = 64;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// 512 bit node identifier or a lookup target
pub struct Id(pub [u8; ID_SIZE]);

impl Id {
    pub fn random() -> Id {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; ID_SIZE];
        rng.fill(&mut bytes[..]);

        Id(bytes)
    }

    /// Create a new Id from some bytes. Returns Err if `bytes` is not of length
    /// [ID_SIZE].
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> Result<Id> {
        let bytes = bytes.as_ref();
        if bytes.len() != ID_SIZE {
            return Err(Error::InvalidIdSize(bytes.len()));
        }

        let mut tmp: [u8; ID_SIZE] = [0; ID_SIZE];
        tmp[..ID_SIZE].clone_from_slice(&bytes[..ID_SIZE]);

        Ok(Id(tmp))
    }

    /// The integer form of this id within the keyspace.
    ///
    /// Bytes are big-endian, so comparing two ids as byte arrays agrees
    /// with comparing their integer forms.
    pub fn to_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl FromStr for Id {
    type Err = Error;

    /// Parse an id from its external 128 character hex representation.
    fn from_str(s: &str) -> Result<Id> {
        if !s.is_ascii() {
            return Err(Error::InvalidHexKey(s.into()));
        }
        if s.len() != ID_SIZE * 2 {
            return Err(Error::InvalidIdSize(s.len() / 2));
        }

        let mut bytes = [0u8; ID_SIZE];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::InvalidHexKey(s.into()))?;
        }

        Ok(Id(bytes))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Debug for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self)
    }
}
