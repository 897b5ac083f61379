use crate::{
    config::FilterConfig,
    engine::{FilterMode, QueryEngine},
    obs::{QueryOp, QueryTraceEvent, QueryTraceSink},
    session::{FilterSession, PriceSlider},
    test_fixtures::{grid_catalog, ids, int_ids, price, scenario_catalog},
    types::ProductId,
};
use std::sync::Mutex;

fn config(mode: FilterMode) -> FilterConfig {
    FilterConfig {
        mode,
        ..FilterConfig::default()
    }
}

// Check the session's visible view against a fresh engine call.
fn assert_consistent(session: &FilterSession<'_>, catalog: &crate::catalog::Catalog) {
    let expected = QueryEngine::default()
        .apply(catalog, &session.query())
        .expect("session query is valid");

    assert_eq!(ids(session.visible()), ids(&expected));
}

///
/// SLIDER
///

#[test]
fn slider_starts_at_default_range() {
    let slider = PriceSlider::new(&FilterConfig::default());

    assert_eq!(slider.min(), price(0.0));
    assert_eq!(slider.max(), price(2500.0));
    assert_eq!(slider.ceiling(), price(3000.0));
    assert_eq!(slider.step(), price(100.0));
}

#[test]
fn slider_snaps_to_step() {
    let mut slider = PriceSlider::new(&FilterConfig::default());
    slider.drag(1249.0, 1851.0);

    assert_eq!(slider.min(), price(1200.0));
    assert_eq!(slider.max(), price(1900.0));
}

#[test]
fn slider_clamps_to_bounds() {
    let mut slider = PriceSlider::new(&FilterConfig::default());
    slider.drag(-400.0, 9999.0);

    assert_eq!(slider.min(), price(0.0));
    assert_eq!(slider.max(), price(3000.0));
}

#[test]
fn slider_handles_never_overlap() {
    let mut slider = PriceSlider::new(&FilterConfig::default());

    slider.drag(1500.0, 1500.0);
    assert_eq!((slider.min(), slider.max()), (price(1500.0), price(1600.0)));

    slider.drag(3000.0, 3000.0);
    assert_eq!((slider.min(), slider.max()), (price(2900.0), price(3000.0)));

    slider.drag(2000.0, 1000.0);
    assert_eq!((slider.min(), slider.max()), (price(1000.0), price(2000.0)));
}

#[test]
fn slider_ignores_non_finite_input() {
    let mut slider = PriceSlider::new(&FilterConfig::default());
    slider.drag(f64::NAN, 1000.0);

    assert_eq!(slider.min(), price(0.0));
    assert_eq!(slider.max(), price(1000.0));
}

///
/// SESSION
///

#[test]
fn session_starts_with_full_catalog() {
    let catalog = scenario_catalog();
    let session = FilterSession::new(&catalog, &FilterConfig::default());

    // the slider sits at [0, 2500] but no price filter is active yet
    assert_eq!(ids(session.visible()), int_ids(&[1, 2, 3]));
    assert!(session.applied_price().is_none());
    assert!(session.query().is_unconstrained());
}

#[test]
fn independent_price_filter_discards_search() {
    let catalog = scenario_catalog();
    let mut session = FilterSession::new(&catalog, &config(FilterMode::Independent));

    let view = session.search("sony").expect("search");
    assert_eq!(ids(view), int_ids(&[1, 3]));

    session.drag_price(1000.0, 2000.0);
    let view = session.apply_price_filter().expect("apply price");
    assert_eq!(ids(view), int_ids(&[2]));

    // the box still shows the text, but it no longer filters
    assert_eq!(session.search_text(), "sony");
    assert!(session.query().term().is_blank());
    assert_consistent(&session, &catalog);
}

#[test]
fn independent_search_discards_price_filter() {
    let catalog = scenario_catalog();
    let mut session = FilterSession::new(&catalog, &config(FilterMode::Independent));

    session.drag_price(1000.0, 2000.0);
    session.apply_price_filter().expect("apply price");

    let view = session.search("sony").expect("search");
    assert_eq!(ids(view), int_ids(&[1, 3]));
    assert!(session.applied_price().is_none());
    assert_consistent(&session, &catalog);
}

#[test]
fn independent_empty_search_resets_to_full_catalog() {
    let catalog = scenario_catalog();
    let mut session = FilterSession::new(&catalog, &config(FilterMode::Independent));

    session.search("sony").expect("search");
    let view = session.search("").expect("clear search");

    assert_eq!(ids(view), int_ids(&[1, 2, 3]));
}

#[test]
fn combined_mode_keeps_both_constraints() {
    let catalog = scenario_catalog();
    let mut session = FilterSession::new(&catalog, &config(FilterMode::Combined));

    session.search("sony").expect("search");
    session.drag_price(0.0, 1000.0);
    let view = session.apply_price_filter().expect("apply price");
    assert_eq!(ids(view), int_ids(&[3]));

    // changing the text keeps the applied price range
    let view = session.search("").expect("clear search");
    assert_eq!(ids(view), int_ids(&[3]));

    let view = session.search("blender").expect("search");
    assert!(view.is_empty());
    assert!(session.is_empty_result());
    assert_consistent(&session, &catalog);
}

#[test]
fn dragging_does_not_refilter() {
    let catalog = scenario_catalog();
    let mut session = FilterSession::new(&catalog, &FilterConfig::default());

    session.drag_price(0.0, 100.0);

    assert_eq!(ids(session.visible()), int_ids(&[1, 2, 3]));
    assert_eq!(session.slider().max(), price(100.0));
}

#[test]
fn cards_follow_visible_view_and_availability() {
    let catalog = grid_catalog();
    let mut session = FilterSession::new(&catalog, &FilterConfig::default());

    session.search("kitchen").expect("search");
    let cards = session.cards();

    let names: Vec<_> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Mixer Grinder", "Toaster"]);
    assert_eq!(cards[0].price, "₹2999");
    assert!(!cards[0].disabled);
    // toaster has no rating
    assert!(cards[1].disabled);
}

#[test]
fn session_reports_mode() {
    let catalog = scenario_catalog();
    let session = FilterSession::new(&catalog, &config(FilterMode::Independent));

    assert_eq!(session.mode(), FilterMode::Independent);
}

struct SessionTrace {
    events: Mutex<Vec<QueryTraceEvent>>,
}

impl QueryTraceSink for SessionTrace {
    fn on_event(&self, event: QueryTraceEvent) {
        self.events
            .lock()
            .expect("trace lock poisoned")
            .push(event);
    }
}

static SESSION_TRACE: SessionTrace = SessionTrace {
    events: Mutex::new(Vec::new()),
};

#[test]
fn attached_engine_traces_session_filters() {
    let catalog = scenario_catalog();
    let config = config(FilterMode::Independent);
    let engine = QueryEngine::from_config(&config).with_trace(&SESSION_TRACE);
    let mut session = FilterSession::new(&catalog, &config).with_engine(engine);

    session.search("sony").expect("search");
    assert_eq!(
        session.visible().ids(),
        vec![&ProductId::Int(1), &ProductId::Int(3)]
    );

    session.drag_price(1000.0, 2000.0);
    session.apply_price_filter().expect("apply");
    assert_eq!(session.visible().ids(), vec![&ProductId::Int(2)]);

    let events = SESSION_TRACE
        .events
        .lock()
        .expect("trace lock poisoned")
        .clone();
    assert_eq!(
        events,
        vec![
            QueryTraceEvent::Start {
                op: QueryOp::TextFilter,
                catalog_len: 3
            },
            QueryTraceEvent::Finish {
                op: QueryOp::TextFilter,
                rows_matched: 2
            },
            QueryTraceEvent::Start {
                op: QueryOp::PriceFilter,
                catalog_len: 3
            },
            QueryTraceEvent::Finish {
                op: QueryOp::PriceFilter,
                rows_matched: 1
            },
        ]
    );
}
