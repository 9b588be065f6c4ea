//! Workspace-level integration tests for fibmemo. See `tests/`.
