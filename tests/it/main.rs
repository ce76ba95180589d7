//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep link times
//! down.
//!
//! Structure:
//! - helpers: `TestEditorBuilder` and shared fixtures
//! - integration: Multi-component workflow tests
//! - unit: Single-component tests through the public API

mod helpers;
