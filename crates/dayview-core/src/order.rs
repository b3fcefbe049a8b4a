//! Ordering helpers for events.
//!
//! These are plain functions rather than `Ord` impls because events have no
//! single natural order: layout walks them longest-first, renderers usually
//! want them earliest-first.
//!
//! # Tie behavior
//!
//! - [`compare_by_start`] and [`compare_by_duration_desc`] report ties as
//!   [`Ordering::Equal`], so stable sorts keep the caller's order.
//! - [`earlier_of`] prefers its first argument on equal starts.
//! - [`later_of`] also prefers its first argument on equal starts.

use std::cmp::Ordering;

use crate::event::Event;

/// Order by `start`, ascending.
#[inline]
pub fn compare_by_start<I>(a: &Event<I>, b: &Event<I>) -> Ordering {
    a.start.cmp(&b.start)
}

/// Order by `end - start`, longest first.
#[inline]
pub fn compare_by_duration_desc<I>(a: &Event<I>, b: &Event<I>) -> Ordering {
    b.duration().cmp(&a.duration())
}

/// The event that starts first; `a` when `a.start <= b.start`.
#[inline]
pub fn earlier_of<'a, I>(a: &'a Event<I>, b: &'a Event<I>) -> &'a Event<I> {
    if a.start <= b.start { a } else { b }
}

/// The event that starts last; `e1` when `e1.start >= e2.start`.
#[inline]
pub fn later_of<'a, I>(e1: &'a Event<I>, e2: &'a Event<I>) -> &'a Event<I> {
    if e1.start >= e2.start { e1 } else { e2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_order() {
        let a = Event::new('a', 10, 20);
        let b = Event::new('b', 15, 16);
        assert_eq!(compare_by_start(&a, &b), Ordering::Less);
        assert_eq!(compare_by_start(&b, &a), Ordering::Greater);
        assert_eq!(compare_by_start(&a, &Event::new('c', 10, 99)), Ordering::Equal);
    }

    #[test]
    fn duration_order_is_descending() {
        let long = Event::new('l', 0, 120);
        let short = Event::new('s', 0, 30);
        assert_eq!(compare_by_duration_desc(&long, &short), Ordering::Less);
        assert_eq!(compare_by_duration_desc(&short, &long), Ordering::Greater);
        assert_eq!(
            compare_by_duration_desc(&short, &Event::new('t', 200, 230)),
            Ordering::Equal
        );
    }

    #[test]
    fn stable_sort_keeps_ties_in_input_order() {
        let mut events = vec![
            Event::new(1, 0, 30),
            Event::new(2, 0, 60),
            Event::new(3, 100, 130),
            Event::new(4, 200, 260),
        ];
        events.sort_by(compare_by_duration_desc);
        let ids: Vec<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn earlier_of_prefers_first_on_tie() {
        let a = Event::new('a', 10, 20);
        let b = Event::new('b', 10, 30);
        assert_eq!(earlier_of(&a, &b).id, 'a');
        assert_eq!(earlier_of(&b, &a).id, 'b');
        assert_eq!(earlier_of(&a, &Event::new('c', 5, 6)).id, 'c');
    }

    #[test]
    fn later_of_prefers_first_on_tie() {
        let a = Event::new('a', 10, 20);
        let b = Event::new('b', 10, 30);
        assert_eq!(later_of(&a, &b).id, 'a');
        assert_eq!(later_of(&b, &a).id, 'b');
        assert_eq!(later_of(&a, &Event::new('c', 50, 60)).id, 'c');
    }
}
