
use std::sync::Arc;

use crate::store::InMemorySchoolStore;
use crate::workflows::backoffice::BackOfficeService;

fn build_service() -> (BackOfficeService<InMemorySchoolStore>, Arc<InMemorySchoolStore>) {
    let store = Arc::new(InMemorySchoolStore::new());
    let service = BackOfficeService::new(store.clone());
    (service, store)
}
