/// A hook into an iterative routine's progress.
///
/// Each routine defines its own event and action types: the event describes
/// one unit of progress (a bisection step, an accepted subinterval), and the
/// action is the control the routine is willing to hand over, such as
/// stopping early. Returning `None` from [`on_event`](Observer::on_event)
/// lets the routine run unchanged, so an observer can just as well collect a
/// convergence history as steer the iteration.
///
/// `()` is the no-op observer, and any `FnMut(&Ev) -> Option<Act>` closure
/// observes directly.
pub trait Observer<Ev, Act> {
    /// Called once per event; may return a control action.
    fn on_event(&mut self, event: &Ev) -> Option<Act>;
}

impl<Ev, Act, F> Observer<Ev, Act> for F
where
    F: FnMut(&Ev) -> Option<Act>,
{
    fn on_event(&mut self, event: &Ev) -> Option<Act> {
        self(event)
    }
}

impl<Ev, Act> Observer<Ev, Act> for () {
    fn on_event(&mut self, _event: &Ev) -> Option<Act> {
        None
    }
}
