mod config_provider;
mod identity_provider;
mod input_descriptor;

pub use config_provider::ConfigProvider;
pub use identity_provider::IdentityProvider;
pub use input_descriptor::InputDescriptor;
