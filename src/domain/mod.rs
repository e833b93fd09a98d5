pub mod customer;
pub mod product;
pub mod order;
pub mod blueprint;

pub use customer::*;
pub use product::*;
pub use order::*;
pub use blueprint::*;
