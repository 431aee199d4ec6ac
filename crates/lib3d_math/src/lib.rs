//! A small fixed-size 3D algebra kernel: `Vector3` and `Matrix3` values and the linear transforms built from them
//!
//! All transforms follow the row-vector convention: a vector is transformed as `v' = v * M`,
//! so `A * B` applies `A` first and `B` second.
//!
//! Division by an exact zero never produces non-finite values, see [`Vector3::divide`].

mod numeric;
pub use numeric::*;

mod error;
pub use error::*;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

#[cfg(test)]
mod test;

#[cfg(feature = "degenerate_logging")]
pub(crate) const LOG_CAT : lib3d_logging::LogCategory = lib3d_logging::LogCategory::new_with_sub("lib3d", "math");
