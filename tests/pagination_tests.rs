use tripboard::listing::{DEFAULT_PAGE_SIZE, Paginator};

#[test]
fn ten_items_make_three_pages() {
    let paginator = Paginator::new(10, DEFAULT_PAGE_SIZE);
    assert_eq!(paginator.total_pages(), 3);
}

#[test]
fn last_page_holds_the_rest() {
    let items: Vec<u32> = (0..10).collect();
    let paginator = Paginator::new(items.len(), DEFAULT_PAGE_SIZE).at(3);
    assert_eq!(paginator.slice(&items), &[8, 9]);
}

#[test]
fn middle_page_slice() {
    let items: Vec<u32> = (0..10).collect();
    let paginator = Paginator::new(items.len(), DEFAULT_PAGE_SIZE).at(2);
    assert_eq!(paginator.slice(&items), &[4, 5, 6, 7]);
}

#[test]
fn navigation_disables_at_the_ends() {
    let mut paginator = Paginator::new(10, DEFAULT_PAGE_SIZE);
    assert!(!paginator.has_previous());
    assert!(paginator.has_next());

    assert_eq!(paginator.next(), 2);
    assert_eq!(paginator.next(), 3);
    assert!(paginator.has_previous());
    assert!(!paginator.has_next());
}

#[test]
fn next_clamps_at_last_page() {
    let mut paginator = Paginator::new(10, DEFAULT_PAGE_SIZE).at(3);
    assert_eq!(paginator.next(), 3);
}

#[test]
fn previous_clamps_at_first_page() {
    let mut paginator = Paginator::new(10, DEFAULT_PAGE_SIZE);
    assert_eq!(paginator.previous(), 1);
}

#[test]
fn out_of_range_pages_are_clamped() {
    let paginator = Paginator::new(10, DEFAULT_PAGE_SIZE);
    assert_eq!(paginator.at(0).page(), 1);
    assert_eq!(paginator.at(42).page(), 3);
}

#[test]
fn exact_multiple_has_no_partial_page() {
    let items: Vec<u32> = (0..8).collect();
    let paginator = Paginator::new(items.len(), DEFAULT_PAGE_SIZE).at(2);
    assert_eq!(paginator.total_pages(), 2);
    assert_eq!(paginator.slice(&items).len(), 4);
}
