//! The structure synchronization and validation engine.
//!
//! Everything here works on flat dot-path key maps read fresh from disk on
//! every operation. The submodules are layered: [`tree`] is the codec,
//! [`store`] applies it to namespace files, [`sync`] reconciles target
//! languages against the source, [`validate`] reports on the reconciled
//! state, and [`duplicates`]/[`plural`] analyze the source key set.

pub mod duplicates;
pub mod plural;
pub mod store;
pub mod sync;
pub mod tree;
pub mod validate;

pub use sync::SyncOutcome;
pub use tree::FlatMap;
pub use validate::ValidationReport;
