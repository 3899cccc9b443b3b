//! Shared capabilities consumed by the site extension crates.
//!
//! The extensions never reach into an ambient service registry; everything
//! they need from the surrounding site (entity lookup, diagnostics, the
//! views pipeline) is expressed here as a trait and injected explicitly.

pub mod entity;
pub mod log;
pub mod render;
pub mod views;

pub use entity::{Entity, EntityStorage, FileEntity, MemoryStorage, Node, NodeTranslation};
pub use log::{ChannelLog, MemoryLog, Severity, TracingLog};
pub use render::Element;
pub use views::{ResultRow, ViewsField, ViewsQuery};
