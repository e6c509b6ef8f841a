pub mod conversion;
pub mod model;
pub mod validate;

pub use conversion::*;
pub use model::*;
pub use validate::*;
