mod fake_config_provider;
mod fake_identity_provider;
mod fake_input;

pub use self::fake_config_provider::FakeConfigProvider;
pub use self::fake_identity_provider::FakeIdentityProvider;
pub use self::fake_input::FakeInput;
