mod order_history;
mod storefront;

pub use order_history::*;
pub use storefront::*;
