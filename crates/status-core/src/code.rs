use std::any::Any;
use std::fmt;

use crate::domain::private::Paired;
use crate::{Domain, DomainId, Errc, GenericCode, StaticDomain};

/// A domain tag plus a domain value. May represent success or failure.
pub struct StatusCode<D: Domain> {
    domain: D,
    value: D::Value,
}

impl<D: StaticDomain> StatusCode<D> {
    pub fn new(value: D::Value) -> Self {
        Self {
            domain: D::default(),
            value,
        }
    }

    pub fn value(&self) -> &D::Value {
        &self.value
    }
}

impl<D: Domain> StatusCode<D> {
    // Pairing a runtime domain with a value is only sound when the value was
    // produced for that domain, so this stays inside the crate.
    pub(crate) fn from_parts(domain: D, value: D::Value) -> Self {
        Self { domain, value }
    }

    pub(crate) fn raw_value(&self) -> &D::Value {
        &self.value
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    pub fn into_value(self) -> D::Value {
        self.value
    }

    /// True if the code has a domain and that domain calls the value success.
    pub fn success(&self) -> bool {
        self.domain.is_success(&self.value, Paired(()))
    }

    /// True if the code has a domain and that domain calls the value a
    /// failure. An empty code is neither success nor failure.
    pub fn failure(&self) -> bool {
        self.domain.id().is_some() && !self.success()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.id().is_none()
    }

    pub fn generic_code(&self) -> Errc {
        self.domain.to_generic(&self.value, Paired(()))
    }

    /// Semantic comparison across domains. See [`equivalent`].
    pub fn equivalent(&self, other: &dyn AnyStatus) -> bool {
        equivalent(self, other)
    }
}

impl<D: Domain> Clone for StatusCode<D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            value: self.value.clone(),
        }
    }
}

impl<D: Domain> Copy for StatusCode<D> where D::Value: Copy {}

impl<D: StaticDomain> Default for StatusCode<D>
where
    D::Value: Default,
{
    fn default() -> Self {
        Self::new(D::Value::default())
    }
}

struct ValueFmt<'a, D: Domain>(&'a StatusCode<D>);

impl<D: Domain> fmt::Debug for ValueFmt<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.domain.fmt_value(&self.0.value, f, Paired(()))
    }
}

impl<D: Domain> fmt::Debug for StatusCode<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusCode")
            .field("domain", &self.domain.name())
            .field("value", &ValueFmt(self))
            .finish()
    }
}

/// Object-safe view of any status code, used to compare codes of unrelated
/// domains without naming their types.
pub trait AnyStatus {
    fn domain_id(&self) -> Option<DomainId>;
    fn domain_name(&self) -> &'static str;
    fn is_success(&self) -> bool;
    fn generic_code(&self) -> Errc;
    /// One-sided check: does *this* domain consider `other` the same error?
    fn domain_equivalent(&self, other: &dyn AnyStatus) -> bool;
    fn visit_value(&self, f: &mut dyn FnMut(&dyn Any));
}

impl<D: Domain> AnyStatus for StatusCode<D> {
    fn domain_id(&self) -> Option<DomainId> {
        self.domain.id()
    }

    fn domain_name(&self) -> &'static str {
        self.domain.name()
    }

    fn is_success(&self) -> bool {
        self.success()
    }

    fn generic_code(&self) -> Errc {
        self.domain.to_generic(&self.value, Paired(()))
    }

    fn domain_equivalent(&self, other: &dyn AnyStatus) -> bool {
        self.domain.is_equivalent(&self.value, other, Paired(()))
    }

    fn visit_value(&self, f: &mut dyn FnMut(&dyn Any)) {
        self.domain.visit_value(&self.value, f, Paired(()))
    }
}

impl dyn AnyStatus + '_ {
    /// A copy of the value if it is a `T`. Works through erasure.
    pub fn value_as<T: Clone + 'static>(&self) -> Option<T> {
        let mut out = None;
        self.visit_value(&mut |value: &dyn Any| out = value.downcast_ref::<T>().cloned());
        out
    }

    pub fn equivalent(&self, other: &dyn AnyStatus) -> bool {
        equivalent(self, other)
    }
}

/// Symmetric semantic equivalence of two status codes.
///
/// Each domain is asked in turn whether it recognises the other code; failing
/// that, each side is reduced to its generic code (unless that is
/// [`Errc::Unknown`]) and offered to the opposite domain. Two empty codes are
/// equivalent; an empty code is equivalent to nothing else.
///
/// Not transitive across three unrelated domains.
pub fn equivalent(a: &dyn AnyStatus, b: &dyn AnyStatus) -> bool {
    match (a.domain_id(), b.domain_id()) {
        (Some(_), Some(_)) => {
            if a.domain_equivalent(b) || b.domain_equivalent(a) {
                return true;
            }
            let b_generic = b.generic_code();
            if b_generic != Errc::Unknown && a.domain_equivalent(&GenericCode::new(b_generic)) {
                return true;
            }
            let a_generic = a.generic_code();
            a_generic != Errc::Unknown && b.domain_equivalent(&GenericCode::new(a_generic))
        }
        (None, None) => true,
        _ => false,
    }
}

impl<A: Domain, B: Domain> PartialEq<StatusCode<B>> for StatusCode<A> {
    fn eq(&self, other: &StatusCode<B>) -> bool {
        equivalent(self, other)
    }
}

impl<A: Domain> PartialEq<Errc> for StatusCode<A> {
    fn eq(&self, other: &Errc) -> bool {
        equivalent(self, &GenericCode::new(*other))
    }
}

impl<A: Domain> PartialEq<StatusCode<A>> for Errc {
    fn eq(&self, other: &StatusCode<A>) -> bool {
        equivalent(other, &GenericCode::new(*self))
    }
}
