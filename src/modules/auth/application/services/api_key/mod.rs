mod api_key_gate;

pub use api_key_gate::ApiKeyGate;
