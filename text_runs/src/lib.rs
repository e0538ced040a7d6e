// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Runs is the run model for rich-text editing: a block of text partitioned into styled runs
//! that stay consistent while the text is edited.
//!
//! - [`Run`]: an immutable styled interval of character offsets.
//! - [`Block`]: text plus the runs that exactly cover it, edited through [`Block::splice`].
//! - [`Document`]: an ordered sequence of blocks.
//!
//! ## Offsets
//!
//! All offsets count characters (Unicode scalar values), not bytes, so a multi-byte character is a
//! single position.
//!
//! ## Styles
//!
//! The style type is opaque. Runs store it and hand it back, nothing more. A cheap-to-clone handle
//! such as `Arc<MyStyle>` compared by identity works well.
//!
//! ## Example
//!
//! ```
//! use text_runs::{Block, Run};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Style {
//!     Body,
//!     Loud,
//! }
//!
//! let mut block = Block::new(
//!     "Hello, BIG",
//!     [Run::new(0, 7, Style::Body), Run::new(7, 10, Style::Loud)],
//! )
//! .unwrap();
//!
//! // Deleting "BIG" removes its run entirely.
//! block.splice(7, 3, "").unwrap();
//! assert_eq!(block.text(), "Hello, ");
//! assert_eq!(block.runs().collect::<Vec<_>>(), [Run::new(0, 7, Style::Body)]);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod block;
mod char_index;
mod document;
mod error;
mod listeners;
mod run;
mod splice;
mod validate;


pub use crate::block::{Block, Runs};
pub use crate::document::Document;
pub use crate::error::{ValidationError, ValidationErrorKind};
pub use crate::listeners::ListenerId;
pub use crate::run::Run;
pub use crate::validate::validate_runs;
