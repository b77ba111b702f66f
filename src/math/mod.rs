pub mod mat4;
pub mod rigid;
pub mod vec4;
