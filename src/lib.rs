pub mod types;
pub mod algorithm;
pub mod script;
pub mod apply;
pub mod tokenize;
pub mod render;
pub mod logging;

// Re-exports for convenience
pub use types::{
    diff_summary, DiffError, DiffOptions, DiffSummary, Edge, EditOp, MiddleSnake, OpKind,
    Region, Snake, SnakeKind,
};
pub use algorithm::{diff, diff_by, diff_with, EditGraph};
pub use algorithm::frontier::Frontier;
pub use algorithm::middle::find_middle_snake;
pub use algorithm::path::find_path;
pub use script::{count_kind, hunks, project, Hunk, HunkKind};
pub use apply::{apply_script, invert, new_side, old_side};
pub use tokenize::{tokenize, Granularity};
pub use render::{display_token, render, Format};
