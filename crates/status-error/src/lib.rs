//! Failure-only status codes.
//!
//! [`FailureStatus<D>`] wraps a [`StatusCode<D>`] and guarantees it never
//! holds success. A success value reaching any constructor is a broken
//! contract, reported through `tracing` (when enabled) and stderr before the
//! process aborts.
//!
//! `FailureStatus<Erased<W>>` ([`ErasedFailure`]) carries a failure of any
//! erasure-safe domain behind one type, and `==` between failure statuses,
//! status codes and [`Errc`] is semantic equivalence across domains.

pub mod cmp;
pub mod erased;
pub mod failure;
pub mod fatal;

// public exports
pub use erased::ErasedFailure;
pub use failure::FailureStatus;
pub use fatal::ContractViolation;

// re-exported so dependents can name domains and codes through this crate
pub use status_core::{
    Accepts, AnyStatus, CanonicalWidth, DefaultErased, Domain, DomainId, Errc, Erased,
    ErasedCode, ErasedValue, ErasureError, ErasureSafe, GENERIC_DOMAIN_ID, GenericCode,
    GenericDomain, IntoStatusCode, IntoStatusCodeWith, StaticDomain, StatusCode, equivalent, fits,
};
