//! Delivery seam between the core and the host's notification machinery.

use crate::models::BroadcastRecord;
use anyhow::Result;

/// Accepts a composed broadcast for actual delivery.
///
/// The core guarantees the record's message text and language tag are
/// correct and stable; whether workers hear or see it is the sink's job.
/// Hosts plug in speech synthesis, push notifications, or a plain console
/// printer here.
pub trait NotificationSink {
    /// Delivers one broadcast record.
    fn deliver(&self, record: &BroadcastRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeliveryMode, JobRequirement, Language};
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use uuid::Uuid;

    /// Sink that records what it was asked to deliver.
    struct CapturingSink {
        delivered: RefCell<Vec<String>>,
    }

    impl NotificationSink for CapturingSink {
        fn deliver(&self, record: &BroadcastRecord) -> Result<()> {
            self.delivered.borrow_mut().push(record.message.clone());
            Ok(())
        }
    }

    #[test]
    fn test_sink_receives_message_verbatim() {
        let sink = CapturingSink {
            delivered: RefCell::new(Vec::new()),
        };
        let record = BroadcastRecord {
            id: Uuid::new_v4(),
            requirement: JobRequirement::new("mason", 5, "Patia Chowk", 500),
            message: "Need 5 Mason at Patia Chowk. ₹500/day. . ".to_string(),
            language: Language::English,
            delivery_mode: DeliveryMode::SynthesizedVoice,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        };

        sink.deliver(&record).unwrap();
        assert_eq!(sink.delivered.borrow().as_slice(), [record.message]);
    }
}
