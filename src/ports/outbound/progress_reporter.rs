/// ProgressReporter port for reporting progress during SBOM generation
///
/// Implementations must keep stdout free, since the document itself may be
/// written there.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
