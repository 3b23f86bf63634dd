mod common;

use common::records;
use pixgrid::store::gallery::{GalleryIntent, GalleryReducer, GalleryState};
use pixgrid::store::mvi::Reducer;
use pixgrid::store::{AppIntent, AppState, RootReducer};

fn set_data(category: &str, page: u32, count: usize) -> GalleryIntent {
    GalleryIntent::SetData {
        category: category.to_string(),
        page,
        records: records(count),
    }
}

#[test]
fn set_category_resets_page_to_one() {
    let state = GalleryState {
        page: 7,
        ..GalleryState::default()
    };
    let state = GalleryReducer::reduce(state, GalleryIntent::SetCategory("cats".to_string()));
    assert_eq!(state.category, "cats");
    assert_eq!(state.page, 1);
}

#[test]
fn set_page_changes_only_page() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 1, 3));
    let state = GalleryReducer::reduce(state, GalleryIntent::SetPage(4));
    assert_eq!(state.page, 4);
    assert_eq!(state.category, "sport");
    assert_eq!(state.cached_page("sport", 1).map(<[_]>::len), Some(3));
}

#[test]
fn set_data_caches_under_its_key() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 2, 9));
    assert_eq!(state.cached_page("sport", 2), Some(records(9).as_slice()));
    assert!(state.cached_page("sport", 1).is_none());
}

#[test]
fn set_data_overwrites_existing_entry() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 1, 9));
    let state = GalleryReducer::reduce(state, set_data("sport", 1, 4));
    assert_eq!(state.cached_page("sport", 1).map(<[_]>::len), Some(4));
}

#[test]
fn set_data_leaves_unrelated_keys_untouched() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 1, 9));
    let state = GalleryReducer::reduce(state, set_data("cats", 3, 2));
    assert_eq!(state.cached_page("sport", 1).map(<[_]>::len), Some(9));
    assert_eq!(state.cached_page("cats", 3).map(<[_]>::len), Some(2));
}

#[test]
fn empty_entry_is_a_remembered_miss() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 3, 0));
    assert_eq!(state.cached_page("sport", 3), Some(&[][..]));
}

#[test]
fn reduction_never_mutates_its_input() {
    let state = GalleryReducer::reduce(GalleryState::default(), set_data("sport", 1, 9));
    let before = state.clone();

    let _ = GalleryReducer::reduce(state.clone(), set_data("sport", 1, 1));
    let _ = GalleryReducer::reduce(state.clone(), GalleryIntent::SetPage(9));
    let _ = GalleryReducer::reduce(state.clone(), GalleryIntent::SetCategory("dogs".into()));

    assert_eq!(state, before);
}

#[test]
fn root_reducer_routes_gallery_intents() {
    let state = RootReducer::reduce(
        AppState::default(),
        AppIntent::Gallery(GalleryIntent::SetPage(5)),
    );
    assert_eq!(state.gallery.page, 5);
}
