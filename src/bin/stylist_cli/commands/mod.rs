// ABOUTME: Command implementations for stylist-cli
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

pub mod normalize;
pub mod recommend;
