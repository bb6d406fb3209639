//! Render-ready views of recorded examples.
//!
//! Views borrow the recorded examples and compute every display field up
//! front, so a template sees exactly the fields listed on [`ExampleView`],
//! [`RequestView`], and [`IndexView`] and nothing else.

mod example;
mod index;

pub use example::*;
pub use index::*;
