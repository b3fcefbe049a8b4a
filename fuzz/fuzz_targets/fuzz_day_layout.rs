#![no_main]

use arbitrary::Arbitrary;
use dayview_layout::{ColumnRule, DayLayoutEngine, Event, LayoutConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RawEvent {
    id: u8,
    start: i16,
    len: i16,
}

#[derive(Debug, Arbitrary)]
struct Input {
    total_width: u16,
    margin: u16,
    highest: bool,
    events: Vec<RawEvent>,
}

fuzz_target!(|input: Input| {
    if input.events.len() > 256 {
        return;
    }
    let rule = if input.highest {
        ColumnRule::Highest
    } else {
        ColumnRule::LastCollision
    };
    // Width 0 is rejected by validation; clamp instead of skipping.
    let config = LayoutConfig::default()
        .with_total_width(u32::from(input.total_width).max(1))
        .with_margin(u32::from(input.margin))
        .with_column_rule(rule);

    let events: Vec<Event<u8>> = input
        .events
        .iter()
        .map(|raw| {
            let start = i64::from(raw.start);
            Event::new(raw.id, start, start + i64::from(raw.len))
        })
        .collect();
    let n = events.len();

    let layout = DayLayoutEngine::new(config).lay_out(events);
    assert_eq!(layout.len(), n);

    let right_edge = config.margin + config.total_width;
    for (position, e) in layout.iter().enumerate() {
        assert!(e.columns >= 1, "columns < 1");
        assert!(e.column < e.columns, "column {} >= columns {}", e.column, e.columns);
        assert!(e.left >= config.margin);
        assert!(e.left + e.width <= right_edge, "event overflows the day");
        assert_eq!(e.top, e.event.start);

        for other in &e.collisions {
            assert_ne!(other, position, "self collision");
            assert!(layout[other].collisions.contains(position), "asymmetric collision");
        }
    }

    for pair in layout.as_slice().windows(2) {
        assert!(pair[0].duration >= pair[1].duration, "not longest-first");
    }
});
