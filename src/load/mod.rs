//! The load collaborator: the asynchronous fetch a container runs on every
//! reload cycle.

mod load_fn;
mod operation;

pub use load_fn::LoadFn;
pub use operation::{Load, LoadRef};
