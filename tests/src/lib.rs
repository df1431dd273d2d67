//! # Veritas Test Suite
//!
//! Unified test crate containing cross-crate integration flows:
//!
//! ```text
//! tests/src/
//! └── integration/      # Registry + gateway choreography
//!     ├── flows.rs      # Service-level lifecycle scenarios
//!     └── gateway.rs    # HTTP-driven scenarios observing registry events
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p veritas-tests
//!
//! # By category
//! cargo test -p veritas-tests integration::
//! ```

#[cfg(test)]
mod integration;
