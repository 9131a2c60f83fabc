pub mod registry;

pub use registry::{RegistryServer, unreachable_endpoint};
