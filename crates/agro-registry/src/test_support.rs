//! Shared test utilities for agro-registry unit tests.
