mod identifiers;

pub use identifiers::FrameworkIdentifier;
