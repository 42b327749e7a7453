//! Read-back of a generated library: walks the tree, reads each file's tags
//! and checks them against the catalog.

mod model;
mod scan;
mod verify;

#[cfg(test)]
pub use scan::scan;
pub use verify::verify;

#[cfg(test)]
mod tests;
