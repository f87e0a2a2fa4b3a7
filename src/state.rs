use std::sync::Arc;

use crate::modules::burger::{
    BurgerRepository, BurgerRepositoryImpl, BurgerService, InMemoryBurgerRepository,
};
use crate::modules::topping::{
    InMemoryToppingRepository, ToppingRepository, ToppingRepositoryImpl, ToppingService,
};
use crate::shared::{Database, MemoryStore, StorageBackend};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub toppings: Arc<ToppingService>,
    pub burgers: Arc<BurgerService>,
    /// Backend name reported by the health endpoint
    pub storage: &'static str,
}

impl AppState {
    pub fn new(
        topping_repo: Arc<dyn ToppingRepository>,
        burger_repo: Arc<dyn BurgerRepository>,
        storage: &'static str,
    ) -> Self {
        Self {
            toppings: Arc::new(ToppingService::new(topping_repo)),
            burgers: Arc::new(BurgerService::new(burger_repo)),
            storage,
        }
    }

    pub fn postgres(database: Arc<Database>) -> Self {
        Self::new(
            Arc::new(ToppingRepositoryImpl::new(Arc::clone(&database))),
            Arc::new(BurgerRepositoryImpl::new(database)),
            "postgres",
        )
    }

    /// Both repositories share one store so deletes cascade across them.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            Arc::new(InMemoryToppingRepository::new(Arc::clone(&store))),
            Arc::new(InMemoryBurgerRepository::new(store)),
            StorageBackend::InMemory.name(),
        )
    }
}
