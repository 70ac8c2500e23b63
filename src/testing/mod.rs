pub mod ports;

pub use ports::{FakeConfigProvider, FakeIdentityProvider, FakeInput};
