mod mat3;
pub use mat3::*;

mod mat4;
pub use mat4::*;
