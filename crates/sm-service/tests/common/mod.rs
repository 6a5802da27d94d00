mod fixtures;
mod flaky_store;

pub use fixtures::*;
// Only the versioning suite reaches for the flaky store.
#[allow(unused_imports)]
pub use flaky_store::*;
