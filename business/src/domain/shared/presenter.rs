/// Lifecycle shared by every presenter.
pub trait Presenter {
    /// Renders the view from the current model and registers the view callbacks.
    /// Only the first call has an effect.
    fn init(&mut self);

    fn is_initialized(&self) -> bool;

    /// Runs the handler of each view event queued since the last call, in
    /// arrival order. Returns how many handlers ran.
    fn process_pending(&mut self) -> usize;
}
