//! URL handling module for Docs-Survey
//!
//! This module provides URL canonicalization and domain checks. Every URL
//! comparison in the crawler goes through [`CanonicalUrl`].

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, is_same_domain};
pub use normalize::{canonicalize, canonicalize_url, try_canonicalize, CanonicalUrl};
