use heapless::Deque;

use super::{InputEvent, InputProvider};

/// Bounded FIFO that a front end fills from its own event source.
#[derive(Debug, Default)]
pub struct QueuedInput<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> QueuedInput<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Returns `false` and drops the event when the queue is full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        self.events.push_back(event).is_ok()
    }
}

impl<const N: usize> InputProvider for QueuedInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_come_out_in_order() {
        let mut queue = QueuedInput::<4>::new();
        assert!(queue.push(InputEvent::Left));
        assert!(queue.push(InputEvent::Confirm));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::Left)));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::Confirm)));
        assert_eq!(queue.poll_event(), Ok(None));
    }

    #[test]
    fn full_queue_drops_new_events() {
        let mut queue = QueuedInput::<2>::new();
        assert!(queue.push(InputEvent::Left));
        assert!(queue.push(InputEvent::Right));
        assert!(!queue.push(InputEvent::Back));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::Left)));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::Right)));
        assert_eq!(queue.poll_event(), Ok(None));
    }
}
