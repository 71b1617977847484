// SPDX-License-Identifier: MPL-2.0
//! File navigation module for stepping through a directory's files and
//! sibling directories.
//!
//! This module provides the `FileNavigator` that the viewer drives for all
//! keyboard navigation: one loaded directory at a time, an optional current
//! file within it, and sibling hops that reload the cursor one directory
//! over. The navigator holds a single sorted snapshot per load and never
//! syncs incrementally with the filesystem.

use crate::directory_scanner::{resolve_path, DirectoryListing};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Navigation state information for UI rendering.
///
/// This struct contains all the information needed by the viewer to render
/// navigation controls without needing direct access to the directory
/// listing. It acts as a snapshot of the current navigation state.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationInfo {
    /// Whether there is a next file to navigate to.
    pub has_next: bool,
    /// Whether there is a previous file to navigate to.
    pub has_previous: bool,
    /// Whether the current file is the first in the directory.
    pub at_first: bool,
    /// Whether the current file is the last in the directory.
    pub at_last: bool,
    /// Current position in the file list (0-indexed), if set.
    pub current_index: Option<usize>,
    /// Total number of files in the loaded directory.
    pub file_count: usize,
    /// Total number of subdirectories in the loaded directory.
    pub subdir_count: usize,
}

/// Tracks one loaded directory and the position of the current file in it.
///
/// The navigator encapsulates the directory listing and the current
/// selection, providing a single source of truth for file navigation.
/// File stepping moves only the index; loading and sibling hops replace
/// the whole snapshot from a fresh directory read.
#[derive(Debug, Clone, PartialEq)]
pub struct FileNavigator {
    /// Canonical absolute path of the loaded directory
    directory: Option<PathBuf>,
    /// Sorted snapshot of the loaded directory's contents
    listing: DirectoryListing,
    /// Position of the current file in the sorted file list
    index: Option<usize>,
}

impl FileNavigator {
    /// Creates a new empty `FileNavigator`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: None,
            listing: DirectoryListing::new(),
            index: None,
        }
    }

    /// Clears the loaded directory, its listing, and the current selection.
    pub fn reset(&mut self) {
        log::debug!("clearing navigation state");
        self.directory = None;
        self.listing = DirectoryListing::new();
        self.index = None;
    }

    /// Loads a directory and selects its first file.
    ///
    /// The path is resolved to canonical absolute form and scanned; the
    /// first file becomes current, or none when the directory holds no
    /// files. An empty path clears the navigator instead. On failure the
    /// previous state is kept.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be resolved or read.
    pub fn load_directory(&mut self, directory: &Path) -> Result<()> {
        if directory.as_os_str().is_empty() {
            self.reset();
            return Ok(());
        }

        let resolved = resolve_path(directory)?;
        let listing = DirectoryListing::scan_directory(&resolved)?;

        self.index = if listing.is_empty() { None } else { Some(0) };
        self.listing = listing;
        log::debug!("current directory set to {}", resolved.display());
        self.directory = Some(resolved);
        Ok(())
    }

    /// Loads the directory containing the given file and selects that file.
    ///
    /// An empty path clears the navigator instead.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileNotFound` if the resolved path is not among the
    /// directory's files (missing, renamed, or itself a directory); the
    /// containing directory stays loaded as if it had been loaded directly.
    /// Returns an I/O error if the containing directory cannot be resolved
    /// or read.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            self.reset();
            return Ok(());
        }

        let resolved = resolve_path(path)?;
        let name = match resolved.file_name() {
            Some(name) => name.to_os_string(),
            None => return Err(Error::FileNotFound(resolved)),
        };
        let parent = match resolved.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Err(Error::FileNotFound(resolved)),
        };

        self.load_directory(&parent)?;

        match self.listing.file_position(&name) {
            Some(index) => {
                log::debug!("current index set to {}", index);
                self.index = Some(index);
                Ok(())
            }
            None => Err(Error::FileNotFound(resolved)),
        }
    }

    /// Returns the full path of the current file, if any.
    #[must_use]
    pub fn current_file(&self) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        let index = self.index?;
        self.listing
            .files()
            .get(index)
            .map(|name| directory.join(name))
    }

    /// Returns the loaded directory, if any.
    #[must_use]
    pub fn current_directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Steps to the next file in the directory.
    ///
    /// Returns `true` after moving, `false` at the last file or when no
    /// file is selected; `false` leaves the selection untouched. The
    /// `allow_next_dir` flag is reserved for stepping across directory
    /// boundaries and currently changes nothing.
    pub fn next(&mut self, _allow_next_dir: bool) -> bool {
        match self.index {
            Some(index) if index + 1 < self.listing.file_count() => {
                self.index = Some(index + 1);
                log::debug!("current index set to {}", index + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps to the previous file in the directory.
    ///
    /// Returns `true` after moving, `false` at the first file or when no
    /// file is selected; `false` leaves the selection untouched. The
    /// `allow_prev_dir` flag is reserved like its counterpart in
    /// [`next`](Self::next).
    pub fn prev(&mut self, _allow_prev_dir: bool) -> bool {
        match self.index {
            Some(index) if index > 0 => {
                self.index = Some(index - 1);
                log::debug!("current index set to {}", index - 1);
                true
            }
            _ => false,
        }
    }

    /// Jumps to the first file in the directory.
    ///
    /// Returns `false` when no file is selected.
    pub fn first(&mut self) -> bool {
        match self.index {
            Some(_) => {
                self.index = Some(0);
                log::debug!("current index set to 0");
                true
            }
            None => false,
        }
    }

    /// Jumps to the last file in the directory.
    ///
    /// Returns `false` when no file is selected.
    pub fn last(&mut self) -> bool {
        match self.index {
            Some(_) => {
                let index = self.listing.file_count() - 1;
                self.index = Some(index);
                log::debug!("current index set to {}", index);
                true
            }
            None => false,
        }
    }

    /// Loads the next sibling of the current directory.
    ///
    /// Siblings are the subdirectories of the parent, in name order. The
    /// parent is rescanned fresh on every call. Returns `Ok(true)` after
    /// loading the sibling, `Ok(false)` at the last sibling, with no
    /// directory loaded, or at a filesystem root; `Ok(false)` leaves the
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectoryNotFound` if the current directory is no
    /// longer listed by its parent, or an I/O error if the parent cannot
    /// be read.
    pub fn next_dir(&mut self) -> Result<bool> {
        let directory = match self.directory.clone() {
            Some(directory) => directory,
            None => return Ok(false),
        };
        let (parent, name) = match (directory.parent(), directory.file_name()) {
            (Some(parent), Some(name)) => (parent, name),
            _ => return Ok(false),
        };

        let siblings = DirectoryListing::scan_directory(parent)?;
        let position = match siblings.subdir_position(name) {
            Some(position) => position,
            None => return Err(Error::DirectoryNotFound(directory)),
        };

        match siblings.subdirs().get(position + 1) {
            Some(sibling) => {
                let target = parent.join(sibling);
                log::debug!("moving to next directory {}", target.display());
                self.load_directory(&target)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Loads the previous sibling of the current directory.
    ///
    /// The mirror of [`next_dir`](Self::next_dir): `Ok(true)` after loading
    /// the sibling, `Ok(false)` at the first sibling, with no directory
    /// loaded, or at a filesystem root.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`next_dir`](Self::next_dir).
    pub fn prev_dir(&mut self) -> Result<bool> {
        let directory = match self.directory.clone() {
            Some(directory) => directory,
            None => return Ok(false),
        };
        let (parent, name) = match (directory.parent(), directory.file_name()) {
            (Some(parent), Some(name)) => (parent, name),
            _ => return Ok(false),
        };

        let siblings = DirectoryListing::scan_directory(parent)?;
        let position = match siblings.subdir_position(name) {
            Some(position) => position,
            None => return Err(Error::DirectoryNotFound(directory)),
        };

        match position
            .checked_sub(1)
            .and_then(|previous| siblings.subdirs().get(previous))
        {
            Some(sibling) => {
                let target = parent.join(sibling);
                log::debug!("moving to previous directory {}", target.display());
                self.load_directory(&target)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns the sorted file names of the loaded directory.
    #[must_use]
    pub fn files(&self) -> &[OsString] {
        self.listing.files()
    }

    /// Returns the sorted subdirectory names of the loaded directory.
    #[must_use]
    pub fn subdirs(&self) -> &[OsString] {
        self.listing.subdirs()
    }

    /// Returns the full path of the file at the given position.
    #[must_use]
    pub fn file_at(&self, index: usize) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        self.listing
            .files()
            .get(index)
            .map(|name| directory.join(name))
    }

    /// Selects the file at the given position directly.
    ///
    /// Returns `false` and leaves the selection untouched when the position
    /// is out of bounds or no directory is loaded.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if self.directory.is_some() && index < self.listing.file_count() {
            self.index = Some(index);
            log::debug!("current index set to {}", index);
            true
        } else {
            false
        }
    }

    /// Returns the current position in the file list, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the total number of files in the loaded directory.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.listing.file_count()
    }

    /// Returns the total number of subdirectories in the loaded directory.
    #[must_use]
    pub fn subdir_count(&self) -> usize {
        self.listing.subdir_count()
    }

    /// Checks if the loaded directory has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    /// Checks if the current file is the first in the directory.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        matches!(self.index, Some(0))
    }

    /// Checks if the current file is the last in the directory.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 == self.listing.file_count())
    }

    /// Checks if there is a next file to step to.
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 < self.listing.file_count())
    }

    /// Checks if there is a previous file to step to.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        matches!(self.index, Some(index) if index > 0)
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
            current_index: self.index,
            file_count: self.listing.file_count(),
            subdir_count: self.listing.subdir_count(),
        }
    }
}

impl Default for FileNavigator {
    fn default() -> Self {
        Self::new()
    }
}
