use std::sync::Arc;

use actix_web::web;

use crate::modules::account::application::account_use_cases::AccountUseCases;
use crate::modules::account::application::domain::AccountError;
use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase, UpdateHandleUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] whose use cases default to stubs answering
/// `NotFound` (or `InvalidPhone` for create).
pub struct TestAppStateBuilder {
    create: Arc<dyn CreateAccountUseCase + Send + Sync>,
    get: Arc<dyn GetAccountUseCase + Send + Sync>,
    update_handle: Arc<dyn UpdateHandleUseCase + Send + Sync>,
    delete: Arc<dyn DeleteAccountUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create: StubCreateAccount::returning(Err(AccountError::InvalidPhone)),
            get: StubGetAccount::returning(Err(AccountError::NotFound)),
            update_handle: StubUpdateHandle::returning(Err(AccountError::NotFound)),
            delete: StubDeleteAccount::returning(Err(AccountError::NotFound)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create<T>(mut self, uc: Arc<T>) -> Self
    where
        T: CreateAccountUseCase + Send + Sync + 'static,
    {
        self.create = uc;
        self
    }

    pub fn with_get<T>(mut self, uc: Arc<T>) -> Self
    where
        T: GetAccountUseCase + Send + Sync + 'static,
    {
        self.get = uc;
        self
    }

    pub fn with_update_handle<T>(mut self, uc: Arc<T>) -> Self
    where
        T: UpdateHandleUseCase + Send + Sync + 'static,
    {
        self.update_handle = uc;
        self
    }

    pub fn with_delete<T>(mut self, uc: Arc<T>) -> Self
    where
        T: DeleteAccountUseCase + Send + Sync + 'static,
    {
        self.delete = uc;
        self
    }

    pub fn with_account_use_cases(mut self, use_cases: AccountUseCases) -> Self {
        self.create = use_cases.create;
        self.get = use_cases.get;
        self.update_handle = use_cases.update_handle;
        self.delete = use_cases.delete;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: AccountUseCases {
                create: self.create,
                get: self.get,
                update_handle: self.update_handle,
                delete: self.delete,
            },
        })
    }
}
