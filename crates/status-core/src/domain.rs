use std::any::Any;
use std::fmt;

use uuid::Uuid;

use crate::{AnyStatus, Errc, GENERIC_DOMAIN_ID};

/// Stable identity of an error domain.
///
/// Two status codes belong to the same domain iff their ids are equal,
/// regardless of which Rust type carried them there. Ids are picked once by
/// the domain author (e.g. via `uuidgen`) and never change.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(Uuid);

impl DomainId {
    pub const fn from_u128(raw: u128) -> Self {
        Self(Uuid::from_u128(raw))
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Debug for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainId({})", self.0)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A typed error domain: a family of values sharing a success rule and an
/// identity.
///
/// This is the trait domain authors implement. Domains are zero-sized tags;
/// all state lives in [`StaticDomain::Value`].
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, Default)]
/// struct HttpDomain;
///
/// impl StaticDomain for HttpDomain {
///     type Value = u16;
///     const ID: DomainId = DomainId::from_u128(0x5a1e_0c0d_e000_4000_8000_0000_0000_0001);
///     const NAME: &'static str = "http";
///     fn success(value: &u16) -> bool { *value < 400 }
/// }
/// ```
pub trait StaticDomain: Copy + Default + fmt::Debug + Send + Sync + 'static {
    type Value: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    const ID: DomainId;
    const NAME: &'static str;

    /// True if `value` represents success in this domain.
    fn success(value: &Self::Value) -> bool;

    /// The closest generic classification of `value`, or [`Errc::Unknown`].
    fn generic_code(_value: &Self::Value) -> Errc {
        Errc::Unknown
    }

    /// Whether `value` means the same thing as `other`.
    ///
    /// Only needs to recognise codes this domain knows about; the caller
    /// also asks the other side and falls back to generic codes. The default
    /// recognises its own domain by value and the generic domain through
    /// [`StaticDomain::generic_code`].
    fn equivalent(value: &Self::Value, other: &dyn AnyStatus) -> bool {
        let Some(id) = other.domain_id() else {
            return false;
        };
        if id == Self::ID {
            return other
                .value_as::<Self::Value>()
                .is_some_and(|theirs| theirs == *value);
        }
        if id == GENERIC_DOMAIN_ID {
            let mine = Self::generic_code(value);
            return mine != Errc::Unknown && other.value_as::<Errc>() == Some(mine);
        }
        false
    }
}

pub(crate) mod private {
    /// Only constructible inside this crate, where a domain is always handed
    /// the value stored next to it.
    #[derive(Clone, Copy)]
    pub struct Paired(pub(crate) ());
}

/// The domain contract a [`crate::StatusCode`] is generic over.
///
/// Implemented for every [`StaticDomain`] and for the erased family
/// [`crate::Erased`], whose identity is only known at runtime and which may
/// be empty (no domain at all).
///
/// Everything that reads a value is reachable only through the status code
/// that owns it: an erased domain reinterprets its payload bytes, so pairing
/// it with another code's payload must not be expressible.
///
/// ```compile_fail
/// use status_core::{Domain, Errc, GenericCode};
///
/// let busy = GenericCode::new(Errc::ResourceBusy).erase::<8>();
/// let other = GenericCode::new(Errc::TimedOut).erase::<8>();
/// let _ = busy.domain().to_generic(&other.value());
/// ```
pub trait Domain: Copy + fmt::Debug + Send + Sync + 'static {
    type Value: Clone + Send + Sync + 'static;

    /// `None` for an empty erased domain.
    fn id(&self) -> Option<DomainId>;
    fn name(&self) -> &'static str;

    #[doc(hidden)]
    fn is_success(&self, value: &Self::Value, _: private::Paired) -> bool;
    #[doc(hidden)]
    fn to_generic(&self, value: &Self::Value, _: private::Paired) -> Errc;
    #[doc(hidden)]
    fn is_equivalent(
        &self,
        value: &Self::Value,
        other: &dyn AnyStatus,
        _: private::Paired,
    ) -> bool;
    /// Hand `f` the value as its concrete type.
    #[doc(hidden)]
    fn visit_value(&self, value: &Self::Value, f: &mut dyn FnMut(&dyn Any), _: private::Paired);
    #[doc(hidden)]
    fn fmt_value(
        &self,
        value: &Self::Value,
        f: &mut fmt::Formatter<'_>,
        _: private::Paired,
    ) -> fmt::Result;
}

impl<D: StaticDomain> Domain for D {
    type Value = D::Value;

    fn id(&self) -> Option<DomainId> {
        Some(D::ID)
    }

    fn name(&self) -> &'static str {
        D::NAME
    }

    fn is_success(&self, value: &Self::Value, _: private::Paired) -> bool {
        D::success(value)
    }

    fn to_generic(&self, value: &Self::Value, _: private::Paired) -> Errc {
        D::generic_code(value)
    }

    fn is_equivalent(
        &self,
        value: &Self::Value,
        other: &dyn AnyStatus,
        _: private::Paired,
    ) -> bool {
        D::equivalent(value, other)
    }

    fn visit_value(&self, value: &Self::Value, f: &mut dyn FnMut(&dyn Any), _: private::Paired) {
        f(value)
    }

    fn fmt_value(
        &self,
        value: &Self::Value,
        f: &mut fmt::Formatter<'_>,
        _: private::Paired,
    ) -> fmt::Result {
        fmt::Debug::fmt(value, f)
    }
}
