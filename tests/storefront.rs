//! End-to-end storefront scenarios driven through the public API.

use bookstore::app::filter::DerivedLists;
use bookstore::ui::{AccountInfo, OverlayInfo};
use bookstore::{
    handle_event, initialize, Action, AppState, Catalog, Config, Event, InputMode, ModalState,
    SessionCommand,
};

fn storefront() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

fn type_query(state: &mut AppState, query: &str) {
    send(state, &[Event::ClearSearch, Event::FocusSearch]);
    for c in query.chars() {
        send(state, &[Event::Char(c)]);
    }
}

fn ids(books: &[&bookstore::Book]) -> Vec<u32> {
    books.iter().map(|b| b.id).collect()
}

#[test]
fn shelves_partition_the_filtered_list() {
    let mut state = storefront();
    for query in ["", "a", "nguyễn", "DALE", "tâm", "zzz"] {
        type_query(&mut state, query);
        let lists = state.derived_lists();

        let best = ids(&lists.best_sellers);
        let trending = ids(&lists.trending);
        assert!(best.iter().all(|id| !trending.contains(id)), "{query:?}");

        let mut union: Vec<u32> = best.into_iter().chain(trending).collect();
        union.sort_unstable();
        assert_eq!(union, ids(&lists.filtered), "{query:?}");
    }
}

#[test]
fn empty_query_shows_whole_catalog_in_order() {
    let state = storefront();
    let lists = state.derived_lists();
    assert_eq!(ids(&lists.filtered), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin();
    let lower = DerivedLists::compute(&catalog, "dale");
    let upper = DerivedLists::compute(&catalog, "DALE");

    assert_eq!(lower, upper);
    assert_eq!(ids(&lower.best_sellers), vec![1]);
    assert!(lower.trending.is_empty());
}

#[test]
fn open_login_is_idempotent() {
    let mut once = storefront();
    send(&mut once, &[Event::OpenLogin]);

    let mut twice = storefront();
    send(&mut twice, &[Event::OpenLogin, Event::OpenLogin]);

    assert_eq!(once.modal, twice.modal);
    assert!(twice.modal.login_open());
}

#[test]
fn switching_from_login_to_register() {
    let mut state = storefront();
    send(&mut state, &[Event::OpenLogin, Event::SwitchToRegister]);

    assert!(!state.modal.login_open());
    assert!(state.modal.register_open());
}

#[test]
fn vietnamese_author_search_hits_trending_only() {
    let mut state = storefront();
    type_query(&mut state, "nguyễn");
    let lists = state.derived_lists();

    assert_eq!(ids(&lists.trending), vec![3, 4]);
    assert!(lists.best_sellers.is_empty());

    let vm = state.compute_viewmodel(30, 100);
    assert!(vm.sections[0].empty_state.is_some());
    assert_eq!(vm.sections[0].title, "Best Sellers");
    assert_eq!(vm.sections[1].cards.len(), 2);
}

#[test]
fn book_detail_opens_and_closes() {
    let mut state = storefront();
    send(&mut state, &[Event::OpenBook(2)]);

    assert!(state.modal.book_detail_open());
    assert_eq!(state.modal.selected_book().map(|b| b.id), Some(2));
    let vm = state.compute_viewmodel(24, 80);
    assert!(matches!(vm.overlay, Some(OverlayInfo::BookDetail(ref d)) if d.author == "Paulo Coelho"));

    send(&mut state, &[Event::CloseBookDetail]);
    assert!(!state.modal.book_detail_open());
    assert!(state.modal.selected_book().is_none());
    assert_eq!(state.modal, ModalState::Closed);
}

#[test]
fn login_closes_overlay_and_greets() {
    let mut state = storefront();
    send(
        &mut state,
        &[
            Event::OpenLogin,
            Event::Session(SessionCommand::LoginSubmitted {
                username: "alice".to_string(),
                password: "anything".to_string(),
            }),
        ],
    );

    assert!(state.session.is_logged_in);
    assert_eq!(state.session.username, "alice");
    assert!(!state.modal.login_open());

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(
        vm.header.account,
        AccountInfo::LoggedIn {
            username: "alice".to_string()
        }
    );
}

#[test]
fn logout_clears_session() {
    let mut state = storefront();
    state.session.login("alice");
    send(&mut state, &[Event::Logout]);

    assert!(!state.session.is_logged_in);
    assert!(state.session.username.is_empty());
    assert_eq!(state.compute_viewmodel(24, 80).header.account, AccountInfo::Guest);
}

#[test]
fn typed_registration_round() {
    let mut state = storefront();
    send(&mut state, &[Event::OpenRegister]);
    for c in "bình".chars() {
        send(&mut state, &[Event::Char(c)]);
    }
    send(&mut state, &[Event::NextField, Event::Char('x'), Event::SubmitForm]);

    assert_eq!(state.session.display_name(), Some("bình"));
    assert!(!state.modal.is_open());
    assert_eq!(state.input_mode(), InputMode::Browse);
}

#[test]
fn browsing_then_opening_selected_book() {
    let mut state = storefront();
    type_query(&mut state, "tuổi");
    send(&mut state, &[Event::FocusResults, Event::MoveDown, Event::OpenSelectedBook]);

    assert_eq!(state.search_query, "tuổi");
    assert_eq!(state.modal.selected_book().map(|b| b.id), Some(4));
}

#[test]
fn cart_badge_stays_at_zero() {
    let mut state = storefront();
    send(&mut state, &[Event::OpenBook(1), Event::CloseBookDetail, Event::OpenLogin]);
    assert_eq!(state.compute_viewmodel(24, 80).header.cart_count, 0);
}

#[test]
fn quitting_hides_the_pane() {
    let mut state = storefront();
    let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert_eq!(actions, vec![Action::CloseFocus]);
}
