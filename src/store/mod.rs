pub mod gallery;
pub mod mvi;

mod persist;
mod root;
mod store;

pub use persist::{PersistError, SnapshotStore};
pub use root::{AppIntent, AppState, RootReducer};
pub use store::Store;
