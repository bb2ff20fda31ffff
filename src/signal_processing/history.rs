/// Fixed-length sample history for a recursive filter
///
/// Holds the last N samples pushed, most recent first. Pushing a new sample
/// discards the oldest one. Backed by a ring buffer with a moving head, so a
/// push is O(1) no matter how long the window is.
#[derive(Debug, Clone)]
pub struct HistoryLine {
    values: Vec<f64>,
    head: usize,
}

impl HistoryLine {
    /// Create a zero-filled history of `len` samples
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
            head: 0,
        }
    }

    /// Push the newest sample, dropping the oldest
    pub fn push(&mut self, sample: f64) {
        let len = self.values.len();
        if len == 0 {
            return;
        }
        self.head = if self.head == 0 { len - 1 } else { self.head - 1 };
        self.values[self.head] = sample;
    }

    /// Sample `lag` steps back, where lag 0 is the most recent push
    pub fn get(&self, lag: usize) -> Option<f64> {
        if lag >= self.values.len() {
            return None;
        }
        let idx = (self.head + lag) % self.values.len();
        Some(self.values[idx])
    }

    /// Iterate the window from most recent to oldest
    ///
    /// Walks the ring as two contiguous slices so the caller's inner loop
    /// does not pay for modulo arithmetic.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.values[self.head..]
            .iter()
            .chain(self.values[..self.head].iter())
    }

    /// Zero every slot
    pub fn clear(&mut self) {
        self.values.fill(0.0);
        self.head = 0;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
