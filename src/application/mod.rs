/// Service interfaces, one trait per resource family
pub mod interfaces;
/// Data-transfer models mirroring the backend's JSON
pub mod models;
/// Service implementations over the HTTP transport
pub mod services;
