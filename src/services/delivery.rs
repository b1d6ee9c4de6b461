//! Background delivery of contact messages
//!
//! Messages are handed to a `Transport` on a worker thread and the outcome
//! comes back over a channel that the UI polls on every tick. There is no
//! cancellation: once spawned, a delivery always reports.

use crate::model::form::ContactMessage;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Sends a contact message somewhere
pub trait Transport: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), String>;
}

/// Stand-in transport: waits a fixed delay and reports success
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Transport for SimulatedTransport {
    fn deliver(&self, message: &ContactMessage) -> Result<(), String> {
        thread::sleep(self.delay);
        tracing::info!(
            "Simulated delivery of {} bytes from {}",
            message.message.len(),
            message.email
        );
        Ok(())
    }
}

/// Outcome reported by a finished delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

struct PendingDelivery {
    receiver: Receiver<DeliveryOutcome>,
    started: Instant,
}

/// Runs deliveries off the UI thread, one at a time
pub struct DeliveryRunner {
    transport: Arc<dyn Transport>,
    pending: Option<PendingDelivery>,
}

impl DeliveryRunner {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            pending: None,
        }
    }

    /// Simulated transport with the given delay
    pub fn simulated(delay: Duration) -> Self {
        Self::new(SimulatedTransport::new(delay))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand a message to the transport on a worker thread
    pub fn spawn(&mut self, message: ContactMessage) {
        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);

        thread::spawn(move || {
            let outcome = match transport.deliver(&message) {
                Ok(()) => DeliveryOutcome::Delivered,
                Err(e) => DeliveryOutcome::Failed(e),
            };
            let _ = tx.send(outcome);
        });

        self.pending = Some(PendingDelivery {
            receiver: rx,
            started: Instant::now(),
        });
    }

    /// Check for a finished delivery without blocking
    pub fn poll(&mut self) -> Option<DeliveryOutcome> {
        let pending = self.pending.as_ref()?;
        let outcome = match pending.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                DeliveryOutcome::Failed("delivery worker exited".to_string())
            }
        };
        tracing::debug!(
            "Delivery finished after {:?}: {:?}",
            pending.started.elapsed(),
            outcome
        );
        self.pending = None;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn deliver(&self, _message: &ContactMessage) -> Result<(), String> {
            Err("mailbox full".to_string())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn wait_for(runner: &mut DeliveryRunner) -> DeliveryOutcome {
        for _ in 0..200 {
            if let Some(outcome) = runner.poll() {
                return outcome;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("delivery never finished");
    }

    #[test]
    fn test_poll_without_delivery_is_none() {
        let mut runner = DeliveryRunner::simulated(Duration::ZERO);
        assert!(!runner.is_pending());
        assert_eq!(runner.poll(), None);
    }

    #[test]
    fn test_simulated_delivery_reports_delivered() {
        let mut runner = DeliveryRunner::simulated(Duration::from_millis(10));
        runner.spawn(message());
        assert!(runner.is_pending());

        assert_eq!(wait_for(&mut runner), DeliveryOutcome::Delivered);
        assert!(!runner.is_pending());
    }

    #[test]
    fn test_failing_transport_reports_reason() {
        let mut runner = DeliveryRunner::new(FailingTransport);
        runner.spawn(message());
        assert_eq!(
            wait_for(&mut runner),
            DeliveryOutcome::Failed("mailbox full".to_string())
        );
    }
}
