//! Data files for the scenecast overlay: tracked accounts and build
//! order libraries.
//!
//! Both are small user-maintained files deserialized from RON, TOML, or
//! JSON (format detected from the extension) and resolved into core
//! types at startup. Nothing here is read again once loaded; the
//! overlay passes the resolved values around explicitly.

pub mod accounts;
pub mod build_order;
pub mod loader;

pub use accounts::{TrackedAccount, TrackedAccounts};
pub use build_order::{BuildOrderItem, BuildOrderRow, load_build_orders, parse_build_order};
pub use loader::DataLoadError;
