pub mod node;
pub mod section;

pub const DEFAULT_INDENT: usize = 4;
