// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod canonical_connection;
mod load_invariants;
