mod action;
mod cart;
mod modal;
mod notifier;
mod nullable;
mod order;
mod product;
mod review;
mod session;
mod storage;

pub use action::*;
pub use cart::*;
pub use modal::*;
pub use notifier::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use session::*;
pub use storage::*;
