// tests/search_session_tests.rs
// Search page state flows, without the UI or the network

use luxury_link::web_app::model::*;

fn listing(name: &str) -> Product {
    Product {
        name: name.to_string(),
        price: "¥55,000".to_string(),
        link: format!("https://item.rakuten.co.jp/{}", name),
        seller: "brandoff".to_string(),
        image_url: NO_IMAGE_SENTINEL.to_string(),
    }
}

fn found(names: &[&str], url: Option<&str>) -> SearchOutcome {
    SearchOutcome::Found(SearchResults {
        products: names.iter().map(|n| listing(n)).collect(),
        search_url: url.map(str::to_string),
    })
}

#[test]
fn test_successful_search_flow() {
    let mut session = SearchSession::default();
    let mut toasts = Toasts::default();

    assert!(session.can_submit("hermes"));
    let ticket = session.begin();
    let pending = toasts.push(Notice::pending(PENDING_MESSAGE));

    assert!(session.is_loading());
    assert!(!session.can_submit("hermes"));
    let (id, shown) = &toasts.entries()[0];
    assert_eq!(*id, pending);
    assert_eq!(shown.kind, NoticeKind::Pending);
    assert_eq!(shown.lifetime(), None);

    toasts.dismiss(pending);
    let notice = session
        .complete(ticket, found(&["a", "b", "c"], Some("https://fromjapan.example/search")))
        .expect("current ticket yields a notice");
    toasts.push(notice.clone());

    assert!(!session.is_loading());
    assert_eq!(session.products().len(), 3);
    assert_eq!(session.search_url(), Some("https://fromjapan.example/search"));
    assert_eq!(notice, Notice::success("Found 3 products!"));
    assert_eq!(notice.lifetime(), Some(TOAST_LIFETIME));
    assert_eq!(toasts.entries().len(), 1);
    assert_eq!(toasts.entries()[0].1, notice);
}

#[test]
fn test_empty_success_still_reports() {
    let mut session = SearchSession::default();
    let first = session.begin();
    session.complete(first, found(&["kept"], Some("https://fromjapan.example/1")));

    let second = session.begin();
    let notice = session.complete(second, found(&[], None)).expect("notice");

    assert_eq!(notice.message, "Found 0 products!");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(session.products().is_empty());
    assert_eq!(session.search_url(), None);
}

#[test]
fn test_failure_keeps_previous_results() {
    let mut session = SearchSession::default();
    let first = session.begin();
    session.complete(first, found(&["chanel"], Some("https://fromjapan.example/chanel")));

    let second = session.begin();
    let notice = session
        .complete(second, SearchOutcome::Failed(SearchFailure::Unreachable))
        .expect("notice");

    assert_eq!(notice, Notice::error(UNREACHABLE_MESSAGE));
    assert!(!session.is_loading());
    assert_eq!(session.products()[0].name, "chanel");
    assert_eq!(session.search_url(), Some("https://fromjapan.example/chanel"));
}

#[test]
fn test_rejection_messages() {
    let mut session = SearchSession::default();

    let ticket = session.begin();
    let notice = session
        .complete(
            ticket,
            SearchOutcome::Failed(SearchFailure::Rejected { message: Some("No products found.".to_string()) }),
        )
        .expect("notice");
    assert_eq!(notice.message, "No products found.");

    let ticket = session.begin();
    let notice = session
        .complete(ticket, SearchOutcome::Failed(SearchFailure::Rejected { message: None }))
        .expect("notice");
    assert_eq!(notice.message, REJECTED_FALLBACK_MESSAGE);
}

#[test]
fn test_overtaken_search_is_dropped() {
    let mut session = SearchSession::default();

    let slow = session.begin();
    let fast = session.begin();
    assert!(!session.is_current(slow));
    assert!(session.is_current(fast));

    assert!(session.complete(fast, found(&["new"], None)).is_some());
    assert!(session.complete(slow, found(&["old", "older"], None)).is_none());

    assert_eq!(session.products().len(), 1);
    assert_eq!(session.products()[0].name, "new");
    assert!(!session.is_loading());
}

#[test]
fn test_stale_completion_does_not_clear_loading() {
    let mut session = SearchSession::default();

    let slow = session.begin();
    let _fast = session.begin();

    assert!(session.complete(slow, SearchOutcome::Failed(SearchFailure::Unreachable)).is_none());
    assert!(session.is_loading());
}

#[test]
fn test_blank_terms_cannot_be_submitted() {
    let session = SearchSession::default();
    for term in ["", " ", "\t", "\n  "] {
        assert!(!session.can_submit(term), "{:?} must not be submittable", term);
    }
    for mode in SearchMode::ALL {
        assert_eq!(SearchRequest::new(mode, "   "), None);
    }
}

#[test]
fn test_seller_directory_feeds_seller_filter() {
    let sellers = SellerDirectory::builtin();

    let chosen = &sellers.starred()[0];
    let request = SearchRequest::new(SearchMode::Seller, chosen.id.clone()).expect("seller id");
    assert_eq!(request.mode(), SearchMode::Seller);
    assert_eq!(request.term(), chosen.id);
    assert_eq!(sellers.find(&chosen.id), Some(chosen));
}
