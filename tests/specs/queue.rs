//! Queue placement and async hand-off.

use fln_adapters::test_support::TestUser;
use fln_adapters::ForwardingNotifier;
use fln_core::{FluentConfig, Notifiable, QueueConfig, QueuePlacement, SharedConfig};

fn queued_config() -> SharedConfig {
    SharedConfig::new(FluentConfig {
        queue: QueueConfig {
            enabled: true,
            connection: Some("redis".into()),
            queue: Some("notifications".into()),
        },
        ..FluentConfig::default()
    })
}

#[tokio::test]
async fn consumer_receives_queue_placement() {
    let (notifier, mut rx) = ForwardingNotifier::channel();
    let user = TestUser::new("7", queued_config(), notifier);

    let consumer = tokio::spawn(async move {
        let mut placements = Vec::new();
        while let Some(envelope) = rx.recv().await {
            let payload = envelope.notification.as_payload().unwrap();
            placements.push((envelope.target, payload.queue().cloned()));
        }
        placements
    });

    user.notify("Report ready").success().send().unwrap();
    user.notify("Export ready").success();
    drop(user);

    let placements = consumer.await.unwrap();
    let expected = Some(QueuePlacement {
        connection: Some("redis".into()),
        queue: Some("notifications".into()),
    });
    assert_eq!(
        placements,
        vec![("7".to_string(), expected.clone()), ("7".to_string(), expected)]
    );
}

#[tokio::test]
async fn disabled_queue_attaches_nothing() {
    let (notifier, mut rx) = ForwardingNotifier::channel();
    let user = TestUser::new("7", SharedConfig::default(), notifier);

    user.notify("Hello").send().unwrap();

    let envelope = rx.recv().await.unwrap();
    assert_eq!(envelope.notification.as_payload().unwrap().queue(), None);
}
