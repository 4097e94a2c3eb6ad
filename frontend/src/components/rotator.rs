use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + len - 1) % len
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
    /// Jump to an index. Out-of-range indices are ignored.
    Select(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub index: usize,
    pub len: usize,
}

impl Reducible for Rotation {
    type Action = Step;

    fn reduce(self: Rc<Self>, step: Step) -> Rc<Self> {
        let index = match step {
            Step::Forward => next_index(self.index, self.len),
            Step::Back => prev_index(self.index, self.len),
            Step::Select(index) if index < self.len => index,
            Step::Select(_) => self.index,
        };
        Rc::new(Self { index, ..*self })
    }
}

/// Cycles through `len` items, stepping forward every `period_ms`. A period of 0 only moves on dispatch.
#[hook]
pub fn use_rotation(len: usize, period_ms: u32) -> UseReducerHandle<Rotation> {
    let rotation = use_reducer_eq(move || Rotation { index: 0, len });
    {
        let rotation = rotation.clone();
        use_interval(move || rotation.dispatch(Step::Forward), period_ms);
    }
    rotation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        assert_eq!(next_index(5, 0), 0);
        assert_eq!(prev_index(5, 0), 0);
    }

    #[test]
    fn out_of_range_index_is_brought_back() {
        assert_eq!(prev_index(9, 4), 0);
        assert!(next_index(9, 4) < 4);
    }

    #[test]
    fn reducer_follows_steps() {
        let start = Rc::new(Rotation { index: 0, len: 6 });
        let back = start.clone().reduce(Step::Back);
        assert_eq!(back.index, 5);
        let forward = back.reduce(Step::Forward).reduce(Step::Forward);
        assert_eq!(forward.index, 1);
        assert_eq!(forward.len, 6);
    }

    #[test]
    fn select_jumps_and_ignores_out_of_range() {
        let start = Rc::new(Rotation { index: 0, len: 4 });
        let picked = start.reduce(Step::Select(2));
        assert_eq!(picked.index, 2);
        let ignored = picked.reduce(Step::Select(4));
        assert_eq!(ignored.index, 2);
        assert_eq!(ignored.reduce(Step::Forward).index, 3);
    }
}
