//! Graph data model: the persisted document shape, the linked arena the
//! engine walks, and the JSON loader/saver bridging the two.

mod document;
pub mod loader;
mod node;

pub use document::{GraphDocument, NodeDocument, NodeRef};
pub use node::{GraphTree, NodeId, NodeRecord};
