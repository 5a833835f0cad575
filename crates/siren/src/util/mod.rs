//! Support utilities.

pub mod media;
