//! Configuration loaded from TOML drives builder defaults and buckets.

use crate::prelude::Request;
use fln_core::{FluentConfig, Notifiable, NotificationType};
use serde_json::json;
use std::io::Write;

#[test]
fn loaded_config_sets_defaults_and_bucket_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
translate = false
default_type = "warning"
default_channels = ["alert"]

[session]
alerts = "flash_alerts"
"#
    )
    .unwrap();
    let req = Request::new(FluentConfig::load(file.path()).unwrap());

    req.user.notify("Disk almost full").send().unwrap();

    let alerts = req.bucket("flash_alerts");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["type"], json!("warning"));
    assert!(req.bucket("alerts").is_empty());
    assert!(req.bucket("toasts").is_empty());
}

#[test]
fn config_changes_do_not_reach_built_builders() {
    let req = Request::literal();

    let mut builder = req.user.notify("Built early");
    req.config.update(|c| {
        c.default_type = NotificationType::Error;
        c.default_channels = vec!["alert".into()];
    });
    builder.send().unwrap();
    req.user.notify("Built late").send().unwrap();

    assert_eq!(req.keys("toasts"), vec!["Built early"]);
    assert_eq!(req.bucket("toasts")[0]["type"], json!("info"));
    assert_eq!(req.keys("alerts"), vec!["Built late"]);
    assert_eq!(req.bucket("alerts")[0]["type"], json!("error"));
}

#[test]
fn disabled_translation_renders_literally() {
    let req = Request::new(FluentConfig::default());
    req.config.update(|c| c.translate = false);

    req.user
        .notify("Tracking: :code")
        .context(fln_core::context! { "code" => "X" })
        .send()
        .unwrap();

    assert_eq!(req.bucket("toasts")[0]["message"], json!("Tracking: :code"));
}
