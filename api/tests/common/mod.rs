//! Shared fixtures for the API tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use linka_api::AppState;
use linka_core::errors::StoreError;
use linka_core::services::verification::{
    Clock, CodeGenerator, VerificationService, VerificationServiceConfig, VerificationStore,
};
use linka_core::VerificationRecord;
use linka_infra::mail::MockMailService;
use linka_infra::store::MemoryVerificationStore;

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Hands out queued codes
pub struct QueuedCodes(Mutex<VecDeque<String>>);

impl QueuedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self(Mutex::new(codes.iter().map(|c| c.to_string()).collect()))
    }
}

impl CodeGenerator for QueuedCodes {
    fn generate(&self) -> String {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .expect("test ran out of queued codes")
    }
}

/// Store whose every operation fails
pub struct BrokenStore;

#[async_trait]
impl VerificationStore for BrokenStore {
    async fn upsert(&self, _record: &VerificationRecord) -> Result<(), StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn find(&self, _email: &str) -> Result<Option<VerificationRecord>, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn delete(&self, _email: &str) -> Result<bool, StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

pub struct Harness {
    pub state: web::Data<AppState>,
    pub mail: MockMailService,
    pub clock: Arc<ManualClock>,
}

/// App state over a memory store, a mock mailer and pinned codes
pub fn harness(codes: &[&str]) -> Harness {
    harness_with_store(Arc::new(MemoryVerificationStore::new()), codes)
}

pub fn harness_with_store(store: Arc<dyn VerificationStore>, codes: &[&str]) -> Harness {
    let clock = Arc::new(ManualClock::new());
    let mail = MockMailService::new();

    let service = VerificationService::new(store, VerificationServiceConfig::default())
        .with_clock(clock.clone())
        .with_code_generator(Arc::new(QueuedCodes::new(codes)));

    let state = web::Data::new(AppState::new(service, Arc::new(mail.clone())));

    Harness { state, mail, clock }
}
