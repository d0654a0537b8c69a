pub mod callback_query;
pub mod completion;
#[allow(clippy::module_inception)]
pub mod oauth;
pub mod provider_client;
pub mod resolution;
