//! Static JSON resources
//!
//! Resolves request paths through the properties mapping to files under the
//! configured resource root.

pub mod location;
pub mod resolver;

pub use location::Location;
pub use resolver::ResourceResolver;
