mod intent;
mod reducer;
mod state;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::GalleryState;
