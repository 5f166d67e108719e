//! Domain-tagged status codes.
//!
//! A [`StatusCode<D>`] pairs a value with the error domain that gives it
//! meaning. Codes from unrelated domains compare through
//! [`AnyStatus::domain_equivalent`] and the generic classification [`Errc`],
//! and any code whose value is small and `Copy` can be carried behind the
//! single type `StatusCode<Erased<W>>`.

pub mod code;
pub mod convert;
pub mod domain;
pub mod erased;
pub mod error;
pub mod generic;

// public exports
pub use code::{AnyStatus, StatusCode, equivalent};
pub use convert::{Accepts, IntoStatusCode, IntoStatusCodeWith};
pub use domain::{Domain, DomainId, StaticDomain};
pub use erased::{
    CanonicalWidth, DefaultErased, Erased, ErasedCode, ErasedValue, ErasureSafe, fits,
};
pub use error::ErasureError;
pub use generic::{Errc, GENERIC_DOMAIN_ID, GenericCode, GenericDomain};
