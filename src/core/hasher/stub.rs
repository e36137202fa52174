//! Stub hash provider for testing without decoding video.
//!
//! Files are mapped (by file name) to points on a number line, and the
//! difference between two hashes is the absolute distance between their
//! points. That keeps the `100 - difference` arithmetic downstream exact and
//! easy to reason about in tests.

use super::{HashProvider, PerceptualHash};
use crate::error::HashError;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;

/// A scalar stand-in for a real perceptual hash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubHash(pub f64);

impl PerceptualHash for StubHash {
    fn difference(&self, other: &Self) -> f64 {
        (self.0 - other.0).abs()
    }

    fn render(&self) -> String {
        format!("stub:{}", self.0)
    }
}

/// Hash provider with canned per-file values, keyed by file name
#[derive(Debug, Clone, Default)]
pub struct StubProvider {
    values: HashMap<OsString, f64>,
}

impl StubProvider {
    /// Create a provider from (file name, value) pairs
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<OsString>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(name, v)| (name.into(), v))
                .collect(),
        }
    }
}

impl HashProvider for StubProvider {
    type Hash = StubHash;

    fn compute_hash(&self, path: &Path) -> Result<Self::Hash, HashError> {
        path.file_name()
            .and_then(|name| self.values.get(name))
            .map(|&v| StubHash(v))
            .ok_or_else(|| HashError::UnknownFile {
                path: path.to_path_buf(),
            })
    }
}
