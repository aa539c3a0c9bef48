/// A sequence is an ordered list of elements. The operations here never
/// mutate their input; they hand back fresh sequences and report absence
/// with `Option` rather than panicking.
///
/// Element identity is always decided by a caller-supplied witness from
/// the witness module.
mod compare;
mod extract;
mod sequence_core;
mod splice;
mod upsert;

pub use compare::Disordered;
pub use sequence_core::{all, any, join, length, member, membership};
pub use extract::pluck_first;
pub use splice::insert_many;
pub use upsert::upsert;
