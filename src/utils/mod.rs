// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Currently HTML escaping for the server-rendered admin pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

/// HTML escaping helpers
pub mod html;
