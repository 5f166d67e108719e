//! `==` between failure statuses, status codes and generic codes.
//!
//! Every operator is the domains' semantic equivalence
//! ([`status_core::equivalent`]), never a structural comparison of domain and
//! value, and `!=` is its plain negation. Both argument orders are provided
//! and agree because the underlying relation is symmetric. It is not
//! transitive across three unrelated domains.

use std::any::Any;

use status_core::{AnyStatus, Domain, DomainId, Errc, GenericCode, StatusCode, equivalent};

use crate::FailureStatus;

impl<D: Domain> AnyStatus for FailureStatus<D> {
    fn domain_id(&self) -> Option<DomainId> {
        self.as_status_code().domain_id()
    }

    fn domain_name(&self) -> &'static str {
        self.as_status_code().domain_name()
    }

    fn is_success(&self) -> bool {
        false
    }

    fn generic_code(&self) -> Errc {
        self.as_status_code().generic_code()
    }

    fn domain_equivalent(&self, other: &dyn AnyStatus) -> bool {
        self.as_status_code().domain_equivalent(other)
    }

    fn visit_value(&self, f: &mut dyn FnMut(&dyn Any)) {
        self.as_status_code().visit_value(f)
    }
}

impl<A: Domain, B: Domain> PartialEq<FailureStatus<B>> for FailureStatus<A> {
    fn eq(&self, other: &FailureStatus<B>) -> bool {
        equivalent(self.as_status_code(), other.as_status_code())
    }
}

impl<A: Domain, B: Domain> PartialEq<StatusCode<B>> for FailureStatus<A> {
    fn eq(&self, other: &StatusCode<B>) -> bool {
        equivalent(self.as_status_code(), other)
    }
}

impl<A: Domain, B: Domain> PartialEq<FailureStatus<B>> for StatusCode<A> {
    fn eq(&self, other: &FailureStatus<B>) -> bool {
        equivalent(self, other.as_status_code())
    }
}

impl<A: Domain> PartialEq<Errc> for FailureStatus<A> {
    fn eq(&self, other: &Errc) -> bool {
        equivalent(self.as_status_code(), &GenericCode::new(*other))
    }
}

impl<A: Domain> PartialEq<FailureStatus<A>> for Errc {
    fn eq(&self, other: &FailureStatus<A>) -> bool {
        equivalent(&GenericCode::new(*self), other.as_status_code())
    }
}
