//! Data models for the directory catalog.

pub mod district;
pub mod region;

pub use district::District;
pub use region::Region;
