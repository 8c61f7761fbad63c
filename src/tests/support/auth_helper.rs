use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::ApiKeyVerifier;
use crate::modules::auth::application::services::api_key::ApiKeyGate;

pub const TEST_API_KEY: &str = "test-app-key";

/// Verifier registered the same way `main` registers it.
pub fn test_key_verifier() -> web::Data<Arc<dyn ApiKeyVerifier + Send + Sync>> {
    let gate: Arc<dyn ApiKeyVerifier + Send + Sync> = Arc::new(ApiKeyGate::new(TEST_API_KEY));
    web::Data::new(gate)
}
