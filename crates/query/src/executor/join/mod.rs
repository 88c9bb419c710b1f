//! JOIN algorithm implementations.

mod cross;
mod hash;
mod nested;

pub use cross::CrossJoin;
pub use hash::HashJoin;
pub use nested::NestedLoopJoin;
