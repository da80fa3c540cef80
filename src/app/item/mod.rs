//! 商品应用

pub mod handler;
pub mod model;
pub mod payload;
pub mod service;
pub mod store;

pub use handler::{routes, AppState};
pub use model::{Item, ItemFields};
pub use store::{ItemStore, MemoryItemStore, StoreError};
