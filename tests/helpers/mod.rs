// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the in-process HTTP request/response helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
