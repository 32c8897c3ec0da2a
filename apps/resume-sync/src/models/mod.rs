pub mod resume;

pub use resume::{Category, ResumeData, TimelineEntry};
