/// ProgressReporter port for user feedback during a run
///
/// All console output of a conversion goes through this port so that the
/// core stays silent and tests can capture or discard messages.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports how far a multi-file run has got
    ///
    /// # Arguments
    /// * `current` - Number of files handled so far
    /// * `total` - Number of files in the run
    /// * `message` - Optional message, usually the file being handled
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a per-file failure
    fn report_error(&self, message: &str);

    /// Reports the end of the run
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
