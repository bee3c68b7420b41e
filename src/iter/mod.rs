mod in_order;
mod into_iter;
mod level_order;
mod post_order;
mod pre_order;

pub use into_iter::*;

pub(crate) use in_order::*;
pub(crate) use level_order::*;
pub(crate) use post_order::*;
pub(crate) use pre_order::*;
