// list - contiguous growable array
//
// `RawBuffer` owns the slots, `DynamicArray` owns the length and every
// element-level invariant on top of it.

mod array;
mod buffer;
pub mod growth;
mod iter;
pub mod search;

pub use array::DynamicArray;
pub use iter::IntoIter;
