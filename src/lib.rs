mod item;
mod predicate;
mod reader;
mod store;

pub use item::*;
pub use predicate::*;
pub use reader::*;
pub use store::*;

mod tests_readme;
