// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for listing and sorting directory contents.
//!
//! This module takes one snapshot of a directory, splitting its immediate
//! children into files and subdirectories and sorting both groups by name.
//! It also resolves user-supplied paths to their canonical absolute form.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Represents one snapshot of a directory: the names of its files and
/// subdirectories, each sorted ascending by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryListing {
    files: Vec<OsString>,
    subdirs: Vec<OsString>,
}

impl DirectoryListing {
    /// Creates a new empty DirectoryListing.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }

    /// Reads the immediate children of a directory into a sorted snapshot.
    /// Entries that resolve to directories (symlinks followed) become
    /// subdirectories; every other entry counts as a file.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        log::debug!("scanning {}", directory.display());

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let name = entry.file_name();

            if entry.path().is_dir() {
                log::trace!("subdirectory: {:?}", name);
                subdirs.push(name);
            } else {
                log::trace!("file: {:?}", name);
                files.push(name);
            }
        }

        files.sort();
        subdirs.sort();

        log::debug!(
            "{}: {} files, {} subdirectories",
            directory.display(),
            files.len(),
            subdirs.len()
        );

        Ok(Self { files, subdirs })
    }

    /// Returns the sorted file names.
    pub fn files(&self) -> &[OsString] {
        &self.files
    }

    /// Returns the sorted subdirectory names.
    pub fn subdirs(&self) -> &[OsString] {
        &self.subdirs
    }

    /// Returns the position of a file name in the sorted file list.
    pub fn file_position(&self, name: &OsStr) -> Option<usize> {
        self.files.iter().position(|file| file == name)
    }

    /// Returns the position of a subdirectory name in the sorted subdirectory list.
    pub fn subdir_position(&self, name: &OsStr) -> Option<usize> {
        self.subdirs.iter().position(|subdir| subdir == name)
    }

    /// Returns the total number of files in the listing.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the total number of subdirectories in the listing.
    pub fn subdir_count(&self) -> usize {
        self.subdirs.len()
    }

    /// Checks if the listing contains no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for DirectoryListing {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a path to its canonical absolute form.
///
/// A path whose final component does not exist is resolved against its
/// canonicalized parent, so the caller can report the missing name itself
/// instead of a bare I/O failure.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let name = match path.file_name() {
                Some(name) => name,
                None => return Err(Error::Io(err.to_string())),
            };
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            Ok(fs::canonicalize(parent)?.join(name))
        }
        Err(err) => Err(err.into()),
    }
}
