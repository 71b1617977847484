// SPDX-License-Identifier: MPL-2.0
//! `gallery_cursor` is the directory navigation core of an image viewer.
//!
//! It tracks one loaded directory at a time as a sorted snapshot of files
//! and subdirectories, keeps an optional current file, and implements
//! stepping between files and hopping between sibling directories.

#![doc(html_root_url = "https://docs.rs/gallery_cursor/0.1.0")]

pub mod directory_scanner;
pub mod error;
pub mod file_navigation;
