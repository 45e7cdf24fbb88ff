//! Shared fixtures for komplex-db unit tests.
