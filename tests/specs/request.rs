//! Notifications delivered through the toast and alert channels.

use crate::prelude::Request;
use fln_adapters::CatalogLocalizer;
use fln_core::{context, FluentConfig, Notifiable};
use serde_json::json;

#[test]
fn toasts_accumulate_in_order() {
    let req = Request::literal();

    req.user.notify("First").success().send().unwrap();
    req.user.notify("Second").error().send().unwrap();

    assert_eq!(req.keys("toasts"), vec!["First", "Second"]);
    let pushed = req.push.latest("toasts").unwrap();
    assert_eq!(pushed, req.bucket("toasts"));
    assert_eq!(req.push.calls().len(), 2);
}

#[test]
fn unterminated_builders_are_delivered() {
    let req = Request::literal();

    req.user.notify("Saved").success();
    {
        let mut builder = req.user.notify("Deferred");
        builder.warning();
        assert_eq!(req.keys("toasts"), vec!["Saved"]);
    }

    assert_eq!(req.keys("toasts"), vec!["Saved", "Deferred"]);
    assert_eq!(req.bucket("toasts")[1]["type"], json!("warning"));
}

#[test]
fn via_routes_to_alerts_only() {
    let req = Request::literal();

    req.user
        .notify("Payment failed")
        .error()
        .via(["alert"])
        .send()
        .unwrap();

    assert!(req.bucket("toasts").is_empty());
    assert_eq!(req.keys("alerts"), vec!["Payment failed"]);
}

#[test]
fn one_notification_can_fan_out() {
    let req = Request::literal();

    req.user
        .notify("Maintenance tonight")
        .warning()
        .via(["toast", "alert"])
        .send()
        .unwrap();

    assert_eq!(req.bucket("toasts"), req.bucket("alerts"));
}

#[test]
fn unregistered_external_channel_fails_explicit_send() {
    let req = Request::literal();

    let err = req
        .user
        .notify("Welcome")
        .via(["toast", "mail"])
        .send()
        .unwrap_err();

    assert!(err.to_string().contains("mail"));
    assert_eq!(req.keys("toasts"), vec!["Welcome"]);
}

#[test]
fn unregistered_external_channel_is_silent_on_drop() {
    let req = Request::literal();

    req.user.notify("Welcome").via(["mail"]);

    assert!(req.bucket("toasts").is_empty());
}

#[test]
fn translated_entries_render_catalog_text() {
    let catalog = CatalogLocalizer::new()
        .with_entry("orders.shipped", "Order :id shipped")
        .with_entry("orders.tracking", "Tracking: :code");
    let req = Request::with_catalog(FluentConfig::default(), catalog);

    req.user
        .notify_with_context("orders.shipped", context! { "id" => 7, "code" => "ABC123" })
        .message("orders.tracking")
        .success()
        .send()
        .unwrap();

    similar_asserts::assert_eq!(
        req.bucket("toasts")[0],
        json!({
            "type": "success",
            "key": "orders.shipped",
            "message": "Order 7 shipped",
            "body": "Tracking: ABC123",
            "context": { "id": 7, "code": "ABC123" },
        })
    );
}

#[test]
fn missing_translation_falls_back_to_key() {
    let req = Request::new(FluentConfig::default());

    req.user.notify("notifications.saved").send().unwrap();

    assert_eq!(req.bucket("toasts")[0]["message"], json!("notifications.saved"));
}

#[test]
fn requests_do_not_share_buckets() {
    let first = Request::literal();
    let second = Request::literal();

    first.user.notify("Only here").send().unwrap();

    assert_eq!(first.keys("toasts"), vec!["Only here"]);
    assert!(second.bucket("toasts").is_empty());
}
