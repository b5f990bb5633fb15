//! `WaitingQueue`: the FIFO waiting line.
//!
//! Insertion order is service order.  Backed by a `VecDeque`, so every
//! operation is O(1) amortized.

use std::collections::VecDeque;

use cs_core::Customer;

use crate::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    inner: VecDeque<Customer>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `customer` to the back of the line.
    pub fn enqueue(&mut self, customer: Customer) {
        self.inner.push_back(customer);
    }

    /// Remove and return the customer who has waited longest.
    pub fn dequeue(&mut self) -> ServiceResult<Customer> {
        self.inner.pop_front().ok_or(ServiceError::EmptyQueue)
    }

    /// The next customer to be served, without removing them.
    pub fn front(&self) -> Option<&Customer> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Service durations in service order (head first).
    pub fn durations(&self) -> Vec<u64> {
        self.inner.iter().map(Customer::service_ticks).collect()
    }
}
