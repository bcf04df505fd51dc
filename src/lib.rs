//! Gish: Browse GitHub Like a Filesystem
//!
//! GitHub users, repositories and trending projects are exposed as a lazily
//! populated virtual tree that can be walked with `ls`, `cd`, `cat` and `open`,
//! either from the interactive shell or as one-shot commands.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod shell;
pub mod tree;
