use std::sync::Arc;

use services::StudyApi;

/// Shared handles the views pull out of Dioxus context.
///
/// Provided once by the composition root (`crates/app`) or by the test
/// harness; the only dependency today is the backend client.
#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn StudyApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn StudyApi> {
        Arc::clone(&self.api)
    }
}
