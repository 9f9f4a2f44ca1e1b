mod contact;
mod id;

pub use contact::*;
pub use id::*;
