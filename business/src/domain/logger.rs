/// Logging port used by presenters and use cases.
///
/// Presenters run on the UI thread, but the same logger is shared with the
/// async use cases, hence `Send + Sync`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
