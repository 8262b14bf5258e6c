/// Implementations of the container traits for fixed size arrays.
pub mod array;
/// Implementations of the container traits for slices.
pub mod slice;
/// Implementations of the container traits for vectors.
pub mod vec;
