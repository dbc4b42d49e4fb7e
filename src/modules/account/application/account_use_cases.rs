use std::sync::Arc;

use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase, UpdateHandleUseCase,
};
use crate::modules::account::application::ports::outgoing::{AccountRepository, HandleGenerator};
use crate::modules::account::application::service::{
    CreateAccountService, DeleteAccountService, GetAccountService, UpdateHandleService,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub create: Arc<dyn CreateAccountUseCase + Send + Sync>,
    pub get: Arc<dyn GetAccountUseCase + Send + Sync>,
    pub update_handle: Arc<dyn UpdateHandleUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAccountUseCase + Send + Sync>,
}

impl AccountUseCases {
    /// Wires every account service over one repository.
    pub fn new<R, G>(account_repository: R, handle_generator: G) -> Self
    where
        R: AccountRepository + Clone + 'static,
        G: HandleGenerator + 'static,
    {
        Self {
            create: Arc::new(CreateAccountService::new(
                account_repository.clone(),
                handle_generator,
            )),
            get: Arc::new(GetAccountService::new(account_repository.clone())),
            update_handle: Arc::new(UpdateHandleService::new(account_repository.clone())),
            delete: Arc::new(DeleteAccountService::new(account_repository)),
        }
    }
}
