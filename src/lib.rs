//! 3D vector and matrix algebra
//!
//! Re-exports the math kernel from `lib3d_math`, the logger used to report degenerate operations is available as [`logging`].
//!
//! ```
//! use lib3d::{Vector3, Matrix3};
//!
//! let v = Vector3::new(1.0, 1.0, 1.0) * Matrix3::create_scale(2.0, 3.0, 4.0);
//! assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
//! ```

pub use lib3d_math::*;
pub use lib3d_logging as logging;
