/// Common trait for sample-by-sample filters
///
/// Implemented by IirFilter.
pub trait Filter {
    /// Process a single sample through the filter
    fn process(&mut self, sample: f64) -> f64;

    /// Clear the filter's memory without touching its coefficients
    fn reset(&mut self);

    /// Process a buffer of samples in-place, in time order
    fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}
