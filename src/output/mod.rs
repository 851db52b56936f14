//! Output module for saving generated material to disk.

mod artifact;

pub use artifact::{Artifact, combine_worksheets, save_text};
