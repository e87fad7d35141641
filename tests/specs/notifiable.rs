//! The notifiable entry points.

use fln_adapters::test_support::{ForeignNotification, TestUser};
use fln_adapters::FakeNotifier;
use fln_core::{context, BuilderError, FluentNotification, Notifiable, NotificationType, SharedConfig};

fn user() -> (FakeNotifier, TestUser<FakeNotifier>) {
    let notifier = FakeNotifier::new();
    let user = TestUser::new("1", SharedConfig::default(), notifier.clone());
    (notifier, user)
}

#[test]
fn string_starts_a_builder() {
    let (notifier, user) = user();

    let builder: FluentNotification<'_> = user.notify("Order Created");
    assert!(!builder.is_sent());
    assert!(notifier.calls().is_empty());
    drop(builder);

    assert_eq!(notifier.calls().len(), 1);
}

#[test]
fn fully_formed_notification_is_dispatched_directly() {
    let (notifier, user) = user();

    user.notify_now(Box::new(ForeignNotification::new(["database"])))
        .unwrap();

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].payload.is_none());
}

#[test]
fn allows_chaining_all_methods() {
    let (notifier, user) = user();

    user.notify("Order Shipped")
        .message("Your order :id is on the way.")
        .context(context! { "id" => 1 })
        .success()
        .via(["toast", "mail"])
        .send()
        .unwrap();

    let payloads = notifier.payloads_for("1");
    assert_eq!(payloads.len(), 1);
    let p = &payloads[0];
    assert_eq!(p.kind(), NotificationType::Success);
    assert_eq!(p.key(), "Order Shipped");
    assert_eq!(p.body(), Some("Your order :id is on the way."));
    assert_eq!(p.context(), &context! { "id" => 1 });
    assert_eq!(p.channels(), ["toast", "mail"]);
}

#[test]
fn invalid_selector_is_reported_and_notification_still_sends() {
    let (notifier, user) = user();

    {
        let mut builder = user.notify("Test");
        let err = builder.select("invalidMethod").unwrap_err();
        assert_eq!(
            err,
            BuilderError::UnknownBuilderMethod {
                method: "invalidMethod".into()
            }
        );
    }

    let payloads = notifier.payloads_for("1");
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].kind(), NotificationType::Info);
}

#[test]
fn failing_sink_is_contained_on_drop_only() {
    let (notifier, user) = user();
    notifier.fail_with("Send failed");

    assert!(user.notify("explicit").send().is_err());
    drop(user.notify("implicit"));

    assert_eq!(notifier.calls().len(), 2);
}
