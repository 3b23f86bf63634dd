//! Root composition of domain reducers into one state tree.

use serde::{Deserialize, Serialize};

use crate::store::gallery::{GalleryIntent, GalleryReducer, GalleryState};
use crate::store::mvi::{Intent, Reducer, StoreState};

/// The full application state tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub gallery: GalleryState,
}

impl StoreState for AppState {}

/// Intents addressed to the state tree, tagged by owning domain.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Gallery(GalleryIntent),
}

impl Intent for AppIntent {}

/// Routes each intent to its domain reducer, leaving other domains
/// untouched.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Gallery(intent) => AppState {
                gallery: GalleryReducer::reduce(state.gallery, intent),
            },
        }
    }
}
