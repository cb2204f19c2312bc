//! Probe sequences over a fixed-size slot array.

/// Collision resolution rule.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ProbeStrategy {
    /// `(i + 1) mod capacity`.
    #[default]
    Linear,
    /// `(i + step) mod capacity` with a per-key step coprime to the capacity.
    DoubleHash,
}

/// Iterator over the slot indices examined for one hash.
///
/// Yields exactly `capacity` indices and visits every slot once; callers
/// may stop early.
#[derive(Clone, Debug)]
pub struct ProbeSeq {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSeq {
    pub fn new(hash: u64, capacity: usize, strategy: ProbeStrategy) -> Self {
        debug_assert!(capacity > 0, "probe over an empty slot array");
        let index = (hash % capacity as u64) as usize;
        let step = match strategy {
            ProbeStrategy::Linear => 1,
            ProbeStrategy::DoubleHash => double_hash_step(hash, capacity),
        };
        Self {
            index,
            step,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let i = self.index;
        // Neither operand reaches `capacity`, so the sum cannot overflow
        // for any capacity a Vec can hold.
        self.index = (self.index + self.step) % self.capacity;
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSeq {}

fn double_hash_step(hash: u64, capacity: usize) -> usize {
    if capacity <= 2 {
        return 1;
    }
    let h2 = (hash >> 32) as usize;
    let mut step = 1 + h2 % (capacity - 1);
    // step == 1 is always coprime, so this terminates.
    while gcd(step, capacity) != 1 {
        step -= 1;
    }
    step
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
