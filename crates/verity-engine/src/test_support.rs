//! Shared test utilities for verity-engine unit tests.
