pub mod cart;
pub mod catalog;
pub mod common;
pub mod exhibitions;
pub mod notifications;
pub mod orders;

pub use cart::*;
pub use catalog::*;
pub use common::*;
pub use exhibitions::*;
pub use notifications::*;
pub use orders::*;
