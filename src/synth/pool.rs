/// Fixed set of instruments handed out round-robin.
///
/// Overlapping sounds land on different instruments until the pool wraps;
/// after that the oldest instrument is reused, cut short if still ringing.
#[derive(Debug, Clone)]
pub struct InstrumentPool<T> {
    instruments: Vec<T>,
    next: usize,
}

impl<T> InstrumentPool<T> {
    /// Build `size` instruments with `factory`. A size of zero is raised to one.
    pub fn new<F>(size: usize, factory: F) -> Self
    where
        F: Fn() -> T,
    {
        let instruments = (0..size.max(1)).map(|_| factory()).collect();
        Self {
            instruments,
            next: 0,
        }
    }

    /// Take the next instrument in rotation, with its index.
    pub fn next_mut(&mut self) -> (usize, &mut T) {
        let idx = self.next;
        self.next = (self.next + 1) % self.instruments.len();
        (idx, &mut self.instruments[idx])
    }

    /// Index the next call to `next_mut` will return.
    pub fn peek_index(&self) -> usize {
        self.next
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.instruments.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.instruments.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.instruments.iter_mut()
    }
}
