// LaTeX text handling shared by every section renderer.

pub mod escape;

pub use escape::{escape_table_cell, escape_text};
