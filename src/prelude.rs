pub use crate::attack::*;
pub use crate::error::*;
pub use crate::request::*;
pub use crate::sequence::*;
pub use crate::solver::*;
pub use crate::state::*;
pub use crate::store::*;

#[cfg(test)]
pub use crate::test::*;
