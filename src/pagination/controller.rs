//! Binds the pager to a visible surface

use super::{Direction, Pager, SwipeTracker};

/// Where the current page is shown
pub trait PageSurface {
    /// Write the 1-based page number to the display element
    fn show_page_number(&mut self, number: usize);
    /// Smoothly bring the page at `index` into view
    fn scroll_to_page(&mut self, index: usize);
}

/// Maps touch and wheel input onto page transitions and keeps the surface in
/// step with the index.
pub struct PaginationController<S: PageSurface> {
    pager: Pager,
    swipe: SwipeTracker,
    surface: S,
}

impl<S: PageSurface> PaginationController<S> {
    pub fn new(pager: Pager, surface: S) -> Self {
        Self {
            pager,
            swipe: SwipeTracker::new(),
            surface,
        }
    }

    pub fn current_index(&self) -> usize {
        self.pager.index()
    }

    pub fn page_number(&self) -> usize {
        self.pager.page_number()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn touch_start(&mut self, client_y: f64) {
        self.swipe.begin(client_y);
    }

    pub fn touch_move(&mut self, client_y: f64) {
        self.swipe.update(client_y);
    }

    /// Finish the swipe: exactly one transition, then refresh
    pub fn touch_end(&mut self) -> usize {
        let direction = self.swipe.finish();
        self.navigate(direction)
    }

    /// A zero delta leaves the index alone but still refreshes the surface
    pub fn wheel(&mut self, delta_y: f64) -> usize {
        match Direction::from_wheel_delta(delta_y) {
            Some(direction) => self.navigate(direction),
            None => {
                self.refresh();
                self.pager.index()
            }
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> usize {
        self.pager.step(direction);
        self.refresh();
        self.pager.index()
    }

    /// Re-display the current page; no state changes
    pub fn refresh(&mut self) {
        let index = self.pager.index();
        self.surface.show_page_number(index + 1);
        self.surface.scroll_to_page(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        numbers: Vec<usize>,
        scrolls: Vec<usize>,
    }

    impl PageSurface for RecordingSurface {
        fn show_page_number(&mut self, number: usize) {
            self.numbers.push(number);
        }

        fn scroll_to_page(&mut self, index: usize) {
            self.scrolls.push(index);
        }
    }

    fn controller(pages: usize) -> PaginationController<RecordingSurface> {
        PaginationController::new(Pager::new(pages).unwrap(), RecordingSurface::default())
    }

    fn swipe(ctl: &mut PaginationController<RecordingSurface>, from: f64, to: f64) -> usize {
        ctl.touch_start(from);
        ctl.touch_move(to);
        ctl.touch_end()
    }

    #[test]
    fn test_swipe_up_advances_and_displays() {
        let mut ctl = controller(5);
        assert_eq!(swipe(&mut ctl, 700.0, 200.0), 1);
        assert_eq!(swipe(&mut ctl, 700.0, 200.0), 2);
        assert_eq!(ctl.surface().numbers, vec![2, 3]);
        assert_eq!(ctl.surface().scrolls, vec![1, 2]);
    }

    #[test]
    fn test_swipe_down_from_first_wraps() {
        let mut ctl = controller(4);
        assert_eq!(swipe(&mut ctl, 100.0, 500.0), 3);
        assert_eq!(ctl.page_number(), 4);
    }

    #[test]
    fn test_wheel_matches_touch() {
        let mut touch = controller(3);
        let mut wheel = controller(3);
        let inputs = [true, true, true, false, false, true];
        for advance in inputs {
            let by_touch = if advance {
                swipe(&mut touch, 500.0, 100.0)
            } else {
                swipe(&mut touch, 100.0, 500.0)
            };
            let by_wheel = wheel.wheel(if advance { 100.0 } else { -100.0 });
            assert_eq!(by_touch, by_wheel);
        }
    }

    #[test]
    fn test_zero_wheel_refreshes_only() {
        let mut ctl = controller(3);
        ctl.wheel(1.0);
        assert_eq!(ctl.wheel(0.0), 1);
        assert_eq!(ctl.surface().numbers, vec![2, 2]);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut ctl = controller(6);
        ctl.navigate(Direction::Advance);
        ctl.refresh();
        ctl.refresh();
        let numbers = &ctl.surface().numbers;
        assert_eq!(numbers[numbers.len() - 1], numbers[numbers.len() - 2]);
        assert_eq!(ctl.current_index(), 1);
    }

    #[test]
    fn test_every_touch_end_is_one_transition() {
        let mut ctl = controller(5);
        for _ in 0..12 {
            ctl.touch_start(10.0);
            ctl.touch_end();
        }
        assert_eq!(ctl.surface().scrolls.len(), 12);
        assert!(ctl.current_index() < ctl.page_count());
    }
}
