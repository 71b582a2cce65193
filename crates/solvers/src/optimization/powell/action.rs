/// Actions an observer can take during a Powell search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the point adopted by the last sweep.
    StopEarly,
}
