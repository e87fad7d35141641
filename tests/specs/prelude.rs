//! Test helpers for behavioral specifications.
//!
//! Provides a per-request harness wiring a user to the toast and alert
//! channels.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use fln_adapters::test_support::TestUser;
use fln_adapters::{
    CatalogLocalizer, ChannelNotifier, MemoryStore, RecordingPush, RequestScopedStore,
    ToastChannel, TracedNotifier,
};
use fln_core::{FluentConfig, HandlerId, SharedConfig, Translator};
use serde_json::Value;
use std::sync::Arc;

pub type User = TestUser<TracedNotifier<ChannelNotifier>>;

/// One request/response cycle.
pub struct Request {
    pub config: SharedConfig,
    pub store: MemoryStore,
    pub push: RecordingPush,
    pub user: User,
}

impl Request {
    pub fn new(config: FluentConfig) -> Self {
        Self::with_catalog(config, CatalogLocalizer::new())
    }

    pub fn with_catalog(config: FluentConfig, catalog: CatalogLocalizer) -> Self {
        let config = SharedConfig::new(config);
        let store = MemoryStore::new();
        let push = RecordingPush::new();
        let translator = Translator::new(config.clone(), Arc::new(catalog));

        let toast = ToastChannel::new(config.clone(), translator.clone(), Arc::new(store.clone()))
            .with_push(Arc::new(push.clone()));
        let notifier =
            ChannelNotifier::for_request(config.clone(), translator, Arc::new(store.clone()))
                .with_handler(HandlerId::Toast, Arc::new(toast));

        let user = TestUser::new("1", config.clone(), TracedNotifier::new(notifier));
        Self {
            config,
            store,
            push,
            user,
        }
    }

    /// Configuration with translation off, so keys render literally.
    pub fn literal() -> Self {
        Self::new(FluentConfig {
            translate: false,
            ..FluentConfig::default()
        })
    }

    pub fn bucket(&self, key: &str) -> Vec<Value> {
        self.store.get(key).unwrap()
    }

    /// The `key` field of every entry in a bucket, in order.
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.bucket(bucket)
            .iter()
            .map(|entry| entry["key"].as_str().unwrap().to_string())
            .collect()
    }
}
