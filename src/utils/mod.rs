//! Small path helpers shared by the scanner and the health census.

mod paths;

pub use paths::{relative_posix, resolves_inside};
