//! Command implementations for sprig

pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod mst;
pub mod neighbors;
pub mod traverse;
