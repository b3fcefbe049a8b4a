#![forbid(unsafe_code)]

//! Concrete layout scenarios, including the degenerate inputs the engine
//! accepts without complaint.

use dayview_layout::{DayLayout, DayLayoutEngine, Event, LayoutConfig, lay_out_day};

fn ev(id: u32, start: i64, end: i64) -> Event<u32> {
    Event::new(id, start, end)
}

/// `(id, column, columns, width, left)` per event, in layout order.
fn rows(layout: &DayLayout<u32>) -> Vec<(u32, usize, usize, u32, u32)> {
    layout
        .iter()
        .map(|e| (*e.id(), e.column, e.columns, e.width, e.left))
        .collect()
}

fn collisions(layout: &DayLayout<u32>) -> Vec<Vec<usize>> {
    layout.iter().map(|e| e.collisions.as_slice().to_vec()).collect()
}

#[test]
fn single_event() {
    let layout = lay_out_day(vec![ev(1, 0, 60)]);
    assert_eq!(rows(&layout), vec![(1, 0, 1, 600, 10)]);
    assert!(layout[0].collisions.is_empty());
}

#[test]
fn two_fully_overlapping_events() {
    let layout = lay_out_day(vec![ev(1, 0, 60), ev(2, 0, 60)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 2, 300, 10), (2, 1, 2, 300, 310)]
    );
    assert_eq!(collisions(&layout), vec![vec![1], vec![0]]);
}

#[test]
fn adjacent_events_do_not_collide() {
    let layout = lay_out_day(vec![ev(1, 0, 30), ev(2, 30, 60)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 1, 600, 10), (2, 0, 1, 600, 10)]
    );
    assert_eq!(collisions(&layout), vec![Vec::<usize>::new(), Vec::new()]);
}

#[test]
fn three_mutually_overlapping_equal_durations() {
    let layout = lay_out_day(vec![ev(1, 0, 60), ev(2, 10, 70), ev(3, 20, 80)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 3, 200, 10), (2, 1, 3, 200, 210), (3, 2, 3, 200, 410)]
    );
    assert_eq!(collisions(&layout), vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
}

#[test]
fn pairwise_chain_collapses_the_tail() {
    // A-B and B-C overlap, A and C only touch.
    let layout = lay_out_day(vec![ev(1, 0, 60), ev(2, 30, 90), ev(3, 60, 120)]);
    assert_eq!(collisions(&layout), vec![vec![1], vec![0, 2], vec![1]]);
    // C resolves to column 2 next to B, then collapses to 0 because it has a
    // single collision.
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 2, 300, 10), (2, 1, 2, 300, 310), (3, 0, 2, 300, 10)]
    );
}

#[test]
fn column_one_with_single_collision_is_kept() {
    let layout = lay_out_day(vec![ev(1, 0, 120), ev(2, 30, 60)]);
    let short = layout.find(&2).expect("short event");
    assert_eq!(short.collisions.len(), 1);
    assert_eq!(short.column, 1);
}

#[test]
fn recursion_sees_the_uncollapsed_column() {
    // C collapses to 0, but D still stacks on C's resolved column 2.
    let layout = lay_out_day(vec![
        ev(1, 0, 60),
        ev(2, 30, 90),
        ev(3, 60, 120),
        ev(4, 70, 80),
    ]);
    assert_eq!(
        rows(&layout),
        vec![
            (1, 0, 4, 150, 10),
            (2, 1, 4, 150, 160),
            (3, 0, 4, 150, 10),
            (4, 3, 4, 150, 460),
        ]
    );
    // C picked up a second collision after it had already collapsed.
    assert_eq!(layout[2].collisions.as_slice(), &[1, 3]);
}

#[test]
fn long_event_anchors_shorter_ones() {
    // Input order puts the short events first; layout still resolves the
    // long one first and returns it first.
    let layout = lay_out_day(vec![ev(1, 30, 60), ev(2, 90, 120), ev(3, 0, 180)]);
    let ids: Vec<_> = layout.iter().map(|e| *e.id()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(
        rows(&layout),
        vec![(3, 0, 2, 300, 10), (1, 1, 2, 300, 310), (2, 1, 2, 300, 310)]
    );
}

#[test]
fn disjoint_groups_keep_their_own_column_counts() {
    let layout = lay_out_day(vec![
        ev(1, 0, 60),
        ev(2, 0, 60),
        ev(3, 0, 60),
        ev(4, 200, 230),
        ev(5, 210, 240),
        ev(6, 400, 410),
    ]);
    let columns: Vec<_> = layout.iter().map(|e| (*e.id(), e.columns)).collect();
    assert_eq!(columns, vec![(1, 3), (2, 3), (3, 3), (4, 2), (5, 2), (6, 1)]);
    assert_eq!(layout.components(), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
    assert_eq!(layout.max_columns(), 3);
}

#[test]
fn single_pass_sizing_can_leave_a_component_unclosed() {
    // Sorted: 3 (40), 2 (35), 0 (33), 4 (20), 1 (14). Event 0 stacks on 2 in
    // column 2 and raises the group to 3 columns. Event 4 then writes 2 into
    // event 1, and event 1 writes 2 back into 3 and 2. Nothing revisits 0.
    let layout = lay_out_day(vec![
        ev(0, 54, 87),
        ev(1, 23, 37),
        ev(2, 32, 67),
        ev(3, 24, 64),
        ev(4, 4, 24),
    ]);
    assert_eq!(
        rows(&layout),
        vec![
            (3, 0, 2, 300, 10),
            (2, 1, 2, 300, 310),
            (0, 2, 3, 200, 410),
            (4, 0, 2, 300, 10),
            (1, 1, 2, 300, 310),
        ]
    );
    assert_eq!(layout.components(), vec![vec![0, 1, 2, 3, 4]]);

    let mut counts: Vec<_> = layout.iter().map(|e| e.columns).collect();
    counts.sort_unstable();
    counts.dedup();
    assert_eq!(counts, vec![2, 3]);

    // 2 and 0 collide yet their boxes share 410..610.
    let two = layout.find(&2).expect("event 2");
    let zero = layout.find(&0).expect("event 0");
    assert!(layout.collision_ids(2).any(|id| *id == 2));
    assert_eq!((two.left, two.left + two.width), (310, 610));
    assert_eq!((zero.left, zero.left + zero.width), (410, 610));
    assert!(zero.left < two.left + two.width && two.left < zero.left + zero.width);

    // Every event still fits inside its own column count.
    assert!(layout.iter().all(|e| e.column < e.columns));
}

#[test]
fn by_start_restores_chronological_order() {
    let layout = lay_out_day(vec![ev(1, 300, 330), ev(2, 0, 240), ev(3, 60, 90)]);
    let ids: Vec<_> = layout.by_start().iter().map(|e| *e.id()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn bounds_follow_geometry() {
    let layout = lay_out_day(vec![ev(1, 540, 600), ev(2, 570, 630)]);
    let second = layout.find(&2).expect("second event").bounds();
    assert_eq!(second.left, 310);
    assert_eq!(second.top, 570);
    assert_eq!(second.width, 300);
    assert_eq!(second.height, 60);
}

#[test]
fn custom_config_scales_geometry() {
    let engine =
        DayLayoutEngine::new(LayoutConfig::default().with_total_width(90).with_margin(0));
    let layout = engine.lay_out(vec![ev(1, 0, 60), ev(2, 10, 70), ev(3, 20, 80)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 3, 30, 0), (2, 1, 3, 30, 30), (3, 2, 3, 30, 60)]
    );
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn empty_input_yields_empty_layout() {
    let layout = lay_out_day::<u32>(Vec::new());
    assert!(layout.is_empty());
    assert_eq!(layout.max_columns(), 0);
}

#[test]
fn zero_duration_event_inside_another_collides() {
    let layout = lay_out_day(vec![ev(1, 30, 30), ev(2, 0, 60)]);
    assert_eq!(
        rows(&layout),
        vec![(2, 0, 2, 300, 10), (1, 1, 2, 300, 310)]
    );
    assert_eq!(layout[1].duration, 0);
}

#[test]
fn inverted_event_keeps_negative_duration() {
    let layout = lay_out_day(vec![ev(1, 0, 60), ev(2, 60, 0)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 1, 600, 10), (2, 0, 1, 600, 10)]
    );
    assert_eq!(layout[1].duration, -60);
    assert_eq!(layout[1].top, 60);
    assert!(layout[1].bounds().is_empty());
}

#[test]
fn duplicate_ids_stop_the_scan_early() {
    // Same id, same interval: each copy stops scanning at the first copy, so
    // neither registers the other and both take the full width.
    let layout = lay_out_day(vec![ev(1, 0, 60), ev(1, 0, 60)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 1, 600, 10), (1, 0, 1, 600, 10)]
    );
    assert_eq!(collisions(&layout), vec![Vec::<usize>::new(), Vec::new()]);
}

#[test]
fn duplicate_id_hides_later_collisions() {
    // The third event shares an id with the first and never scans past it,
    // even though it overlaps both earlier events.
    let layout = lay_out_day(vec![ev(1, 0, 120), ev(2, 0, 60), ev(1, 30, 50)]);
    assert_eq!(
        rows(&layout),
        vec![(1, 0, 2, 300, 10), (2, 1, 2, 300, 310), (1, 0, 1, 600, 10)]
    );
    assert!(layout[2].collisions.is_empty());
}

#[test]
fn identical_intervals_with_distinct_ids_stack() {
    let events: Vec<_> = (1..=4).map(|id| ev(id, 0, 60)).collect();
    let layout = lay_out_day(events);
    let columns: Vec<_> = layout.iter().map(|e| e.column).collect();
    assert_eq!(columns, vec![0, 1, 2, 3]);
    assert!(layout.iter().all(|e| e.columns == 4 && e.width == 150));
}

#[test]
fn repeated_layout_is_identical() {
    let events = vec![
        ev(1, 0, 90),
        ev(2, 30, 60),
        ev(3, 45, 120),
        ev(4, 100, 130),
        ev(5, 110, 115),
    ];
    let first = lay_out_day(events.clone());
    let second = lay_out_day(events);
    assert_eq!(first, second);
}
