//! Reading TrueType tables
//!
//! This crate provides memory safe parsing of the parts of a TrueType font
//! file that are needed to extract glyph outlines: the [table directory],
//! and the `head`, `loca`, `glyf` and `cmap` tables.
//!
//! All reading is done through [`FontData`] and its [`Cursor`]; a cursor is a
//! plain value, so any number of readers can share the same bytes.
//!
//! For ergonomic access to outlines, see the `ttf-outline` crate.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use ttf_read::{FontData, TableDirectory, TableProvider};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let directory = TableDirectory::new(FontData::new(&font_bytes)).unwrap();
//! let head = directory.head().expect("missing 'head' table");
//! println!("{} units per em", head.units_per_em);
//! ```
//!
//! [table directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font_data;
mod read;
mod table_directory;
mod table_provider;
pub mod tables;

pub use font_data::{Cursor, FontData};
pub use read::{GlyphKind, ReadError};
pub use table_directory::{OffsetTable, TableDirectory, TableRecord};
pub use table_provider::{TableProvider, TopLevelTable};

/// Public re-export of the ttf-types crate.
pub extern crate ttf_types as types;
