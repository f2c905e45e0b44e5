use crate::domain::points::PointSample;

/// Single-slot mailbox between the asynchronous point feed and the frame
/// tick. The producer overwrites, the tick drains once: if several batches
/// arrive between frames only the latest survives (last-write-wins, no
/// queueing). Both sides run on the same event loop, so no locking.
pub(super) struct PointMailbox {
    latest: Option<Vec<PointSample>>,
}

impl PointMailbox {
    pub(super) fn new() -> Self {
        Self { latest: None }
    }

    pub(super) fn store(&mut self, batch: Vec<PointSample>) {
        self.latest = Some(batch);
    }

    pub(super) fn take(&mut self) -> Vec<PointSample> {
        self.latest.take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;

    fn point(x: f32) -> PointSample {
        PointSample::new(Vec2::new(x, 0.5), Vec2::zero())
    }

    #[test]
    fn latest_batch_wins() {
        let mut mailbox = PointMailbox::new();
        mailbox.store(vec![point(0.1)]);
        mailbox.store(vec![point(0.2), point(0.3)]);

        let batch = mailbox.take();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].pos.x, 0.2);
    }

    #[test]
    fn take_drains_the_slot() {
        let mut mailbox = PointMailbox::new();
        mailbox.store(vec![point(0.1)]);
        assert_eq!(mailbox.take().len(), 1);
        assert!(mailbox.take().is_empty());
    }
}
