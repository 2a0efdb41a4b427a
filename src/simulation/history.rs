//! Bounded trail of past positions for one body
//!
//! `OrbitHistory` is a fixed-capacity ring buffer: once full, every new
//! sample evicts the oldest one. Memory stays flat no matter how long the
//! run is.

use std::collections::VecDeque;

use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitHistory {
    samples: VecDeque<NVec2>, // oldest at the front
    cap: usize,
}

impl OrbitHistory {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Append `sample`, evicting the oldest entry when the buffer is full.
    /// A zero-capacity history stores nothing.
    pub fn push(&mut self, sample: NVec2) {
        if self.cap == 0 {
            return;
        }
        if self.samples.len() == self.cap {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.samples.back()
    }

    /// Samples in chronological order, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &NVec2> + ExactSizeIterator + '_ {
        self.samples.iter()
    }

    /// Consecutive sample pairs, i.e. the segments of the trail polyline
    pub fn segments(&self) -> impl Iterator<Item = (&NVec2, &NVec2)> + '_ {
        self.samples.iter().zip(self.samples.iter().skip(1))
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.samples.iter().copied().collect()
    }
}
