//! Debounce and throttle
//!
//! Wrappers that rate-limit a page callback using the page's timers.
//! Each wrapper owns its own state; wrapping the same function twice
//! gives two independent limiters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Page, TimerId};

/// Run `f` once calls stop arriving for `delay_ms`, with the last arguments
pub fn debounce<A: 'static>(
    delay_ms: u64,
    f: impl Fn(&mut Page, A) + 'static,
) -> impl Fn(&mut Page, A) {
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<TimerId>>> = Rc::new(RefCell::new(None));

    move |page: &mut Page, args: A| {
        if let Some(id) = pending.borrow_mut().take() {
            page.clear_timeout(id);
        }
        let f = Rc::clone(&f);
        let slot = Rc::clone(&pending);
        let id = page.set_timeout(delay_ms, move |page| {
            slot.borrow_mut().take();
            f(page, args);
        });
        *pending.borrow_mut() = Some(id);
    }
}

/// Run `f` at most once per `limit_ms`, on the leading edge only
pub fn throttle<A: 'static>(
    limit_ms: u64,
    f: impl Fn(&mut Page, A) + 'static,
) -> impl Fn(&mut Page, A) {
    let waiting = Rc::new(Cell::new(false));

    move |page: &mut Page, args: A| {
        if waiting.get() {
            return;
        }
        f(page, args);
        waiting.set(true);
        let waiting = Rc::clone(&waiting);
        page.set_timeout(limit_ms, move |_| waiting.set(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_dom::Document;

    fn page() -> Page {
        Page::new(Document::default()).unwrap()
    }

    #[test]
    fn test_debounce_keeps_last_call() {
        let mut page = page();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let debounced = debounce(250, move |_, n: u32| sink.borrow_mut().push(n));

        for n in 1..=5 {
            debounced(&mut page, n);
            page.advance_time(100);
        }
        assert!(calls.borrow().is_empty());

        page.advance_time(150);
        assert_eq!(*calls.borrow(), vec![5]);
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn test_debounce_fires_again_after_quiet_period() {
        let mut page = page();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let debounced = debounce(100, move |_, ()| c.set(c.get() + 1));

        debounced(&mut page, ());
        page.advance_time(100);
        debounced(&mut page, ());
        page.advance_time(100);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_throttle_leading_edge() {
        let mut page = page();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let throttled = throttle(100, move |_, n: u32| sink.borrow_mut().push(n));

        throttled(&mut page, 1);
        page.advance_time(50);
        throttled(&mut page, 2);
        assert_eq!(*calls.borrow(), vec![1]);

        page.advance_time(50);
        throttled(&mut page, 3);
        assert_eq!(*calls.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_independent_instances() {
        let mut page = page();
        let count = Rc::new(Cell::new(0));
        let (a, b) = (count.clone(), count.clone());
        let first = throttle(100, move |_, ()| a.set(a.get() + 1));
        let second = throttle(100, move |_, ()| b.set(b.get() + 1));

        first(&mut page, ());
        second(&mut page, ());
        assert_eq!(count.get(), 2);
    }
}
