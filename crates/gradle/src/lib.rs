mod finder;
mod line;
mod rewriter;

pub use finder::{GRADLE_SUFFIX, find_build_files};
pub use line::{LineMatch, match_dependency};
pub use rewriter::align_file;
