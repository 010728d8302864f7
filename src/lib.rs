//! Cross-crate integration tests for fibmat live in `tests/`.
