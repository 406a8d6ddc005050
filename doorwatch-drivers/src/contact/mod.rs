//! Door contact drivers

pub mod reed;

pub use reed::ReedContact;
