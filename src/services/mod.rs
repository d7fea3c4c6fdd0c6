pub mod hash;
pub mod transport;
