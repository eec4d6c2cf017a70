pub mod conversion;
pub mod definition;
pub mod label;

pub use conversion::*;
pub use definition::*;
pub use label::*;
