use crate::grid::Grid;

/// Returned by a [StepObserver] after every step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Abort,
}

/// Capability handed to every search. It is called once per expanded cell and once per
/// reconstructed path step, with read access to the grid so that the caller can render it and
/// poll for input. Returning [Signal::Abort] ends the search without a result.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid) -> Signal;
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid) -> Signal,
{
    fn on_step(&mut self, grid: &Grid) -> Signal {
        self(grid)
    }
}

/// Observer that never interrupts.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _: &Grid) -> Signal {
        Signal::Continue
    }
}

/// Aborts once `limit` steps have been observed. Useful to bound searches on large grids.
#[derive(Copy, Clone, Debug)]
pub struct StepLimit {
    pub limit: usize,
    pub steps: usize,
}

impl StepLimit {
    pub fn new(limit: usize) -> StepLimit {
        StepLimit { limit, steps: 0 }
    }
}

impl StepObserver for StepLimit {
    fn on_step(&mut self, _: &Grid) -> Signal {
        self.steps += 1;
        if self.steps >= self.limit {
            Signal::Abort
        } else {
            Signal::Continue
        }
    }
}
