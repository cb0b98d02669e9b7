//! Compare the values two JSON endpoints expose under different layouts.
//!
//! Each document is reduced to the values reached by its own [`path::KeyPath`]
//! (see [`extract::extract`]), and the two collections are compared as sets of
//! their canonical string forms (see [`compare::compare`]).

pub mod compare;
pub mod extract;
pub mod fetch;
pub mod inspect;
pub mod logging;
pub mod path;
pub mod report;
