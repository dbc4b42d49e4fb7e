use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, Handle, Phone};
use crate::modules::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, HandleGenerator,
};

// ============================================================
// Repository Mock
// ============================================================

mock! {
    pub AccountRepo {}

    #[async_trait]
    impl AccountRepository for AccountRepo {
        async fn create(
            &self,
            id: Uuid,
            handle: Handle,
            phone: Phone,
        ) -> Result<Account, AccountRepositoryError>;

        async fn get_by_id(&self, id: Uuid) -> Result<Account, AccountRepositoryError>;

        async fn update_handle(
            &self,
            id: Uuid,
            handle: Handle,
        ) -> Result<Account, AccountRepositoryError>;

        async fn delete(&self, id: Uuid) -> Result<(), AccountRepositoryError>;
    }
}

// ============================================================
// Handle Generator
// ============================================================

/// Hands out a fixed sequence of handles, then repeats the fallback (if
/// any). Running dry without a fallback is a test bug and panics.
pub struct ScriptedHandleGenerator {
    queue: Mutex<VecDeque<Handle>>,
    fallback: Option<Handle>,
}

impl ScriptedHandleGenerator {
    pub fn new<'a>(handles: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            queue: Mutex::new(handles.into_iter().map(parse).collect()),
            fallback: None,
        }
    }

    pub fn repeating(handle: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Some(parse(handle)),
        }
    }
}

impl HandleGenerator for ScriptedHandleGenerator {
    fn generate(&self) -> Handle {
        let next = self.queue.lock().unwrap().pop_front();
        next.or_else(|| self.fallback.clone())
            .expect("scripted handle generator ran out of handles")
    }
}

fn parse(raw: &str) -> Handle {
    Handle::parse(raw).unwrap_or_else(|_| panic!("scripted handle {raw:?} is malformed"))
}
