//! Value object trait: equality by value, not identity.
//!
//! Location codes and path positions are value objects: `b3` is `b3` no matter
//! which product happens to sit there.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`LocationCode` `a10` equals any other `a10`)
/// - **Entity**: has identity (a `Product` is identified by its name, whatever
///   its location)
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied
/// into query results, compared in tests and logged.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Slot(u32);
///
/// impl ValueObject for Slot {}
///
/// assert_eq!(Slot(3), Slot(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
