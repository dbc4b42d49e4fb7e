use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, AccountError};
use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase, UpdateHandleUseCase,
};

pub fn sample_account(handle: &str, phone: &str) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        handle: handle.to_string(),
        phone: phone.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

// ============================================================
// CreateAccount
// ============================================================

pub struct StubCreateAccount {
    result: Result<Account, AccountError>,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl StubCreateAccount {
    pub fn returning(result: Result<Account, AccountError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateAccountUseCase for StubCreateAccount {
    async fn execute(&self, phone: &str) -> Result<Account, AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(phone.to_string());
        self.result.clone()
    }
}

// ============================================================
// GetAccount
// ============================================================

pub struct StubGetAccount {
    result: Result<Account, AccountError>,
    calls: AtomicUsize,
    last_id: Mutex<Option<Uuid>>,
}

impl StubGetAccount {
    pub fn returning(result: Result<Account, AccountError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            last_id: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_id(&self) -> Option<Uuid> {
        *self.last_id.lock().unwrap()
    }
}

#[async_trait]
impl GetAccountUseCase for StubGetAccount {
    async fn execute(&self, id: Uuid) -> Result<Account, AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_id.lock().unwrap() = Some(id);
        self.result.clone()
    }
}

// ============================================================
// UpdateHandle
// ============================================================

pub struct StubUpdateHandle {
    result: Result<Account, AccountError>,
    calls: AtomicUsize,
    last_input: Mutex<Option<(Uuid, String)>>,
}

impl StubUpdateHandle {
    pub fn returning(result: Result<Account, AccountError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<(Uuid, String)> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdateHandleUseCase for StubUpdateHandle {
    async fn execute(&self, id: Uuid, handle: &str) -> Result<Account, AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some((id, handle.to_string()));
        self.result.clone()
    }
}

// ============================================================
// DeleteAccount
// ============================================================

pub struct StubDeleteAccount {
    result: Result<(), AccountError>,
    calls: AtomicUsize,
    last_id: Mutex<Option<Uuid>>,
}

impl StubDeleteAccount {
    pub fn returning(result: Result<(), AccountError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            last_id: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_id(&self) -> Option<Uuid> {
        *self.last_id.lock().unwrap()
    }
}

#[async_trait]
impl DeleteAccountUseCase for StubDeleteAccount {
    async fn execute(&self, id: Uuid) -> Result<(), AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_id.lock().unwrap() = Some(id);
        self.result.clone()
    }
}
