use backend_domain::{ChangeNotice, ChangeTopic};
use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_BUFFER: usize = 64;

/// In-process notification channels, one per topic. Dropping a receiver
/// unsubscribes it.
pub struct ChangeHub {
    events: broadcast::Sender<ChangeNotice>,
    tickets: broadcast::Sender<ChangeNotice>,
    identity: broadcast::Sender<ChangeNotice>,
}

impl Default for ChangeHub {
    fn default() -> Self {
        let (events, _rx) = broadcast::channel(CHANNEL_BUFFER);
        let (tickets, _rx) = broadcast::channel(CHANNEL_BUFFER);
        let (identity, _rx) = broadcast::channel(CHANNEL_BUFFER);
        Self {
            events,
            tickets,
            identity,
        }
    }
}

impl ChangeHub {
    pub fn subscribe(&self, topic: ChangeTopic) -> broadcast::Receiver<ChangeNotice> {
        self.sender(topic).subscribe()
    }

    pub fn subscriber_count(&self, topic: ChangeTopic) -> usize {
        self.sender(topic).receiver_count()
    }

    /// Sends synchronously; having no subscribers is fine.
    pub fn publish(&self, topic: ChangeTopic, record_id: Option<String>) -> ChangeNotice {
        let notice = ChangeNotice {
            topic,
            record_id,
            changed_at_ms: chrono::Utc::now().timestamp_millis(),
        };
        let delivered = self.sender(topic).send(notice.clone()).unwrap_or(0);
        debug!(
            topic = topic.as_str(),
            record_id = notice.record_id.as_deref().unwrap_or("-"),
            delivered,
            "change published"
        );
        notice
    }

    fn sender(&self, topic: ChangeTopic) -> &broadcast::Sender<ChangeNotice> {
        match topic {
            ChangeTopic::Events => &self.events,
            ChangeTopic::Tickets => &self.tickets,
            ChangeTopic::Identity => &self.identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let hub = ChangeHub::default();
        let mut events = hub.subscribe(ChangeTopic::Events);
        let mut tickets = hub.subscribe(ChangeTopic::Tickets);

        hub.publish(ChangeTopic::Tickets, Some("t1".to_string()));

        let notice = tickets.recv().await.expect("ticket notice");
        assert_eq!(notice.topic, ChangeTopic::Tickets);
        assert_eq!(notice.record_id.as_deref(), Some("t1"));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let hub = ChangeHub::default();
        let notice = hub.publish(ChangeTopic::Events, None);
        assert_eq!(notice.topic, ChangeTopic::Events);
        assert_eq!(hub.subscriber_count(ChangeTopic::Events), 0);
    }

    #[test]
    fn dropping_receiver_unsubscribes() {
        let hub = ChangeHub::default();
        let rx = hub.subscribe(ChangeTopic::Identity);
        assert_eq!(hub.subscriber_count(ChangeTopic::Identity), 1);
        drop(rx);
        assert_eq!(hub.subscriber_count(ChangeTopic::Identity), 0);
    }
}
