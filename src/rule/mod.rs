pub mod display;
pub mod ir;

pub use display::*;
pub use ir::*;
