//! Progress reporting while waiting on the tutor.

pub mod reporter;
