//! Broadcast fan-out of trace steps, bridging the synchronous orchestration
//! loop into any number of consumer tasks (e.g. a streaming transport).

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::trace::{ProgressHook, ThoughtStep};

#[derive(Clone)]
pub struct Bus {
    sender: broadcast::Sender<ThoughtStep>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThoughtStep> {
        self.sender.subscribe()
    }

    pub fn publish(
        &self,
        step: ThoughtStep,
    ) -> Result<usize, broadcast::error::SendError<ThoughtStep>> {
        self.sender.send(step)
    }

    /// A progress hook that publishes each appended step onto the bus.
    /// Send errors (no subscribers) are ignored: progress streaming is
    /// best-effort and must not disturb the loop.
    pub fn hook(&self) -> ProgressHook {
        let sender = self.sender.clone();
        Arc::new(move |step: &ThoughtStep| {
            let _ = sender.send(step.clone());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;
    use tokio::time::{timeout, Duration};

    fn test_step(content: &str) -> ThoughtStep {
        ThoughtStep::new(StepKind::Reasoning, content)
    }

    #[tokio::test]
    async fn publish_and_receive_step() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        let _ = bus.publish(test_step("hello"));

        let received = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("recv");
        assert_eq!(received.content, "hello");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_step() {
        let bus = Bus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let _ = bus.publish(test_step("fan-out"));

        assert_eq!(rx1.recv().await.expect("recv1").content, "fan-out");
        assert_eq!(rx2.recv().await.expect("recv2").content, "fan-out");
    }

    #[tokio::test]
    async fn hook_publishes_appended_steps() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        let hook = bus.hook();
        hook(&test_step("via hook"));

        let received = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("recv");
        assert_eq!(received.content, "via hook");
    }

    #[test]
    fn hook_without_subscribers_is_a_noop() {
        let bus = Bus::new(8);
        let hook = bus.hook();
        hook(&test_step("dropped"));
    }
}
