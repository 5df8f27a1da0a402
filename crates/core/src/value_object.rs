//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attributes are
/// the same value. Catalogue entries such as a supply category or a unit of
/// measure are value objects, while an inventory item is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
