//! # Hasher Module
//!
//! The perceptual hash boundary.
//!
//! Hashing is not implemented here: [`VidDupProvider`] delegates to the
//! external `vid_dup_finder_lib` crate, which decodes and samples frames from
//! the first seconds of each video. The rest of the system only depends on
//! the [`HashProvider`] / [`PerceptualHash`] traits, so tests inject
//! [`StubProvider`] instead of decoding video.

mod stub;
mod traits;
mod vid_dup;

pub use stub::{StubHash, StubProvider};
pub use traits::{HashProvider, PerceptualHash};
pub use vid_dup::{VidDupHash, VidDupProvider};
