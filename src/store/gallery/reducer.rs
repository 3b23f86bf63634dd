use crate::store::gallery::intent::GalleryIntent;
use crate::store::gallery::state::GalleryState;
use crate::store::mvi::Reducer;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::SetData {
                category,
                page,
                records,
            } => {
                let mut next = state;
                next.data_by_category
                    .entry(category)
                    .or_default()
                    .insert(page, records);
                next
            }
            GalleryIntent::SetPage(page) => GalleryState { page, ..state },
            GalleryIntent::SetCategory(category) => GalleryState {
                category,
                // Changing category always restarts pagination.
                page: 1,
                ..state
            },
        }
    }
}
