
mod num;
mod flag;
mod kernel;
mod obj;
mod error;
mod dispatch;

pub use num::*;
pub use flag::*;
pub use kernel::*;
pub use obj::*;
pub use error::*;
pub use dispatch::*;
