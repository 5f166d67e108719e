//! Bounded-width type erasure of status codes.
//!
//! A `StatusCode<Erased<W>>` can hold the value of any typed domain whose
//! value is [`ErasureSafe`] and at most `W` bytes wide. The domain travels
//! with the payload as a `'static` table of functions specialised for the
//! original domain, so success, generic mapping and equivalence keep working
//! after erasure.
//!
//! Narrowing is safe and checked at compile time. Widening back is either
//! [`StatusCode::widen`] (unsafe, the caller vouches for the domain) or
//! [`StatusCode::try_widen`] (checked, returns [`ErasureError`]).

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::mem::{MaybeUninit, size_of};
use std::ptr;

use crate::domain::private::Paired;
use crate::{AnyStatus, Domain, DomainId, Errc, ErasureError, StaticDomain, StatusCode};

mod sealed {
    pub trait Sealed {}
}

/// The closed set of supported payload widths, in bytes.
pub trait CanonicalWidth: sealed::Sealed {}

impl sealed::Sealed for Erased<4> {}
impl sealed::Sealed for Erased<8> {}
impl sealed::Sealed for Erased<16> {}
impl sealed::Sealed for Erased<32> {}
impl CanonicalWidth for Erased<4> {}
impl CanonicalWidth for Erased<8> {}
impl CanonicalWidth for Erased<16> {}
impl CanonicalWidth for Erased<32> {}

/// Pointer-sized payload; enough for any errno-style domain.
pub type DefaultErased = Erased<8>;

pub type ErasedCode<const W: usize> = StatusCode<Erased<W>>;

/// Value types that may be copied bit-for-bit into an erased payload.
///
/// `Copy` types have no drop glue and are valid after a bitwise copy, which
/// is all erasure needs. Whether the type also fits a given width is decided
/// by [`fits`], and enforced at compile time when narrowing.
pub trait ErasureSafe: Copy + Send + Sync + 'static {}

impl<T: Copy + Send + Sync + 'static> ErasureSafe for T {}

/// True if a `T` fits an erased payload of `W` bytes.
pub const fn fits<T, const W: usize>() -> bool {
    size_of::<T>() <= W
}

struct Fits<T, const W: usize>(PhantomData<T>);

impl<T, const W: usize> Fits<T, W> {
    const OK: () = assert!(fits::<T, W>(), "value type is wider than the erased payload");
}

/// Opaque payload of `W` bytes.
#[derive(Clone, Copy)]
pub struct ErasedValue<const W: usize> {
    bytes: [MaybeUninit<u8>; W],
}

impl<const W: usize> ErasedValue<W> {
    pub const WIDTH: usize = W;

    fn empty() -> Self {
        Self {
            bytes: [MaybeUninit::uninit(); W],
        }
    }

    fn store<T: ErasureSafe>(value: T) -> Self {
        let () = Fits::<T, W>::OK;
        let mut erased = Self::empty();
        // SAFETY: `Fits` guarantees `size_of::<T>() <= W`; the buffer has no
        // alignment so the write is unaligned.
        unsafe { ptr::write_unaligned(erased.bytes.as_mut_ptr().cast::<T>(), value) };
        erased
    }

    /// # Safety
    ///
    /// The payload must have been produced by `store::<T>`.
    unsafe fn load<T: ErasureSafe>(&self) -> T {
        let () = Fits::<T, W>::OK;
        // SAFETY: upheld by the caller; see `store`.
        unsafe { ptr::read_unaligned(self.bytes.as_ptr().cast::<T>()) }
    }
}

impl<const W: usize> fmt::Debug for ErasedValue<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("width", &W)
            .finish_non_exhaustive()
    }
}

/// Functions of the original domain, monomorphised over its value type.
struct ErasedVTable<const W: usize> {
    id: DomainId,
    name: &'static str,
    value_type: fn() -> TypeId,
    success: fn(&ErasedValue<W>) -> bool,
    generic_code: fn(&ErasedValue<W>) -> Errc,
    equivalent: fn(&ErasedValue<W>, &dyn AnyStatus) -> bool,
    visit: fn(&ErasedValue<W>, &mut dyn FnMut(&dyn Any)),
    fmt: fn(&ErasedValue<W>, &mut fmt::Formatter<'_>) -> fmt::Result,
}

struct VTableFor<D, const W: usize>(PhantomData<D>);

impl<D, const W: usize> VTableFor<D, W>
where
    D: StaticDomain,
    D::Value: ErasureSafe,
{
    const VTABLE: ErasedVTable<W> = ErasedVTable {
        id: D::ID,
        name: D::NAME,
        value_type: TypeId::of::<D::Value>,
        success: erased_success::<D, W>,
        generic_code: erased_generic_code::<D, W>,
        equivalent: erased_equivalent::<D, W>,
        visit: erased_visit::<D, W>,
        fmt: erased_fmt::<D, W>,
    };
}

// The tables built in `VTableFor` are the only callers of these, and they are
// only ever paired with payloads stored from `D::Value`.
fn read<D: StaticDomain, const W: usize>(value: &ErasedValue<W>) -> D::Value
where
    D::Value: ErasureSafe,
{
    // SAFETY: see above.
    unsafe { value.load::<D::Value>() }
}

fn erased_success<D: StaticDomain, const W: usize>(value: &ErasedValue<W>) -> bool
where
    D::Value: ErasureSafe,
{
    D::success(&read::<D, W>(value))
}

fn erased_generic_code<D: StaticDomain, const W: usize>(value: &ErasedValue<W>) -> Errc
where
    D::Value: ErasureSafe,
{
    D::generic_code(&read::<D, W>(value))
}

fn erased_equivalent<D: StaticDomain, const W: usize>(
    value: &ErasedValue<W>,
    other: &dyn AnyStatus,
) -> bool
where
    D::Value: ErasureSafe,
{
    D::equivalent(&read::<D, W>(value), other)
}

fn erased_visit<D: StaticDomain, const W: usize>(
    value: &ErasedValue<W>,
    f: &mut dyn FnMut(&dyn Any),
) where
    D::Value: ErasureSafe,
{
    f(&read::<D, W>(value))
}

fn erased_fmt<D: StaticDomain, const W: usize>(
    value: &ErasedValue<W>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    D::Value: ErasureSafe,
{
    fmt::Debug::fmt(&read::<D, W>(value), f)
}

/// The erased domain family. Empty (no domain) by default.
#[derive(Clone, Copy, Default)]
pub struct Erased<const W: usize> {
    vtable: Option<&'static ErasedVTable<W>>,
}

impl<const W: usize> fmt::Debug for Erased<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vtable {
            Some(vtable) => write!(f, "Erased<{W}>({})", vtable.name),
            None => write!(f, "Erased<{W}>(empty)"),
        }
    }
}

impl<const W: usize> Domain for Erased<W>
where
    Erased<W>: CanonicalWidth,
{
    type Value = ErasedValue<W>;

    fn id(&self) -> Option<DomainId> {
        self.vtable.map(|vtable| vtable.id)
    }

    fn name(&self) -> &'static str {
        self.vtable.map_or("empty", |vtable| vtable.name)
    }

    fn is_success(&self, value: &ErasedValue<W>, _: Paired) -> bool {
        self.vtable.is_some_and(|vtable| (vtable.success)(value))
    }

    fn to_generic(&self, value: &ErasedValue<W>, _: Paired) -> Errc {
        self.vtable
            .map_or(Errc::Unknown, |vtable| (vtable.generic_code)(value))
    }

    fn is_equivalent(&self, value: &ErasedValue<W>, other: &dyn AnyStatus, _: Paired) -> bool {
        self.vtable
            .is_some_and(|vtable| (vtable.equivalent)(value, other))
    }

    fn visit_value(&self, value: &ErasedValue<W>, f: &mut dyn FnMut(&dyn Any), _: Paired) {
        if let Some(vtable) = self.vtable {
            (vtable.visit)(value, f)
        }
    }

    fn fmt_value(
        &self,
        value: &ErasedValue<W>,
        f: &mut fmt::Formatter<'_>,
        _: Paired,
    ) -> fmt::Result {
        match self.vtable {
            Some(vtable) => (vtable.fmt)(value, f),
            None => f.write_str("<empty>"),
        }
    }
}

impl<D> StatusCode<D>
where
    D: StaticDomain,
    D::Value: ErasureSafe,
{
    /// Narrow into an erased code of width `W`.
    ///
    /// Fails to compile if `D::Value` is wider than `W` bytes.
    pub fn erase<const W: usize>(&self) -> StatusCode<Erased<W>>
    where
        Erased<W>: CanonicalWidth,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(domain = D::NAME, width = W, "narrowing status code");
        let domain = Erased {
            vtable: Some(&VTableFor::<D, W>::VTABLE),
        };
        StatusCode::from_parts(domain, ErasedValue::store(*self.value()))
    }
}

impl<D, const W: usize> From<StatusCode<D>> for StatusCode<Erased<W>>
where
    D: StaticDomain,
    D::Value: ErasureSafe,
    Erased<W>: CanonicalWidth,
{
    fn from(code: StatusCode<D>) -> Self {
        code.erase::<W>()
    }
}

impl<const W: usize> Default for StatusCode<Erased<W>>
where
    Erased<W>: CanonicalWidth,
{
    /// The empty code: no domain, neither success nor failure.
    fn default() -> Self {
        StatusCode::from_parts(Erased::default(), ErasedValue::empty())
    }
}

impl<const W: usize> StatusCode<Erased<W>>
where
    Erased<W>: CanonicalWidth,
{
    /// The erased payload, by value: its concrete type is not nameable here.
    pub fn value(&self) -> ErasedValue<W> {
        *self.raw_value()
    }

    /// Reinterpret the payload as a value of domain `D`.
    ///
    /// Debug builds assert that the code really came from `D`; release builds
    /// trust the caller.
    ///
    /// # Safety
    ///
    /// `self` must have been narrowed from a `StatusCode<D>` (or from a domain
    /// with the same value type). Widening an empty code is never valid.
    pub unsafe fn widen<D>(&self) -> StatusCode<D>
    where
        D: StaticDomain,
        D::Value: ErasureSafe,
    {
        debug_assert_eq!(
            self.domain().id(),
            Some(D::ID),
            "widening an erased status code into the wrong domain"
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(domain = D::NAME, width = W, "widening status code");
        // SAFETY: upheld by the caller.
        StatusCode::new(unsafe { self.raw_value().load::<D::Value>() })
    }

    /// Widen back into domain `D`, verifying both the domain identity and the
    /// stored value type first.
    pub fn try_widen<D>(&self) -> Result<StatusCode<D>, ErasureError>
    where
        D: StaticDomain,
        D::Value: ErasureSafe,
    {
        let vtable = self.domain().vtable.ok_or(ErasureError::EmptyDomain {
            expected: D::NAME,
        })?;
        if vtable.id != D::ID {
            let err = ErasureError::DomainMismatch {
                expected: D::ID,
                expected_name: D::NAME,
                found: vtable.id,
                found_name: vtable.name,
            };
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "rejected erased status code widening");
            return Err(err);
        }
        if (vtable.value_type)() != TypeId::of::<D::Value>() {
            return Err(ErasureError::ValueTypeMismatch { domain: D::NAME });
        }
        // SAFETY: the payload was stored from a value of type `D::Value`.
        Ok(StatusCode::new(unsafe {
            self.raw_value().load::<D::Value>()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericCode, GenericDomain};

    #[derive(Debug, Clone, Copy, Default)]
    struct SignalDomain;

    impl StaticDomain for SignalDomain {
        type Value = u32;
        const ID: DomainId = DomainId::from_u128(0x5197_a100_0000_4000_8000_0000_0000_0001);
        const NAME: &'static str = "signal";

        fn success(value: &u32) -> bool {
            *value == 0
        }
    }

    #[test]
    fn width_checks() {
        assert!(fits::<u32, 4>());
        assert!(fits::<u64, 8>());
        assert!(!fits::<u64, 4>());
        assert!(fits::<[u8; 12], 16>());
        assert_eq!(ErasedValue::<16>::WIDTH, 16);
    }

    #[test]
    fn narrowing_preserves_domain_behaviour() {
        let code = StatusCode::<SignalDomain>::new(9);
        let erased: ErasedCode<8> = code.erase();
        assert_eq!(erased.domain().id(), Some(SignalDomain::ID));
        assert_eq!(erased.domain().name(), "signal");
        assert!(erased.failure());
        assert!(StatusCode::<SignalDomain>::new(0).erase::<8>().success());
        assert_eq!(format!("{erased:?}"), "StatusCode { domain: \"signal\", value: 9 }");
    }

    #[test]
    fn narrow_then_widen_round_trips() {
        let code = StatusCode::<SignalDomain>::new(0xdead_beef);
        let erased = code.erase::<8>();
        // SAFETY: narrowed from `SignalDomain` just above.
        let back = unsafe { erased.widen::<SignalDomain>() };
        assert_eq!(*back.value(), 0xdead_beef);
        assert_eq!(
            *erased.try_widen::<SignalDomain>().expect("same domain").value(),
            0xdead_beef
        );
    }

    #[test]
    fn checked_widening_rejects_foreign_domains() {
        let erased = GenericCode::new(Errc::TimedOut).erase::<8>();
        let err = erased
            .try_widen::<SignalDomain>()
            .expect_err("generic is not signal");
        assert_eq!(
            err,
            ErasureError::DomainMismatch {
                expected: SignalDomain::ID,
                expected_name: "signal",
                found: GenericDomain::ID,
                found_name: "generic",
            }
        );
    }

    #[test]
    fn empty_code_is_neither_success_nor_failure() {
        let empty = ErasedCode::<8>::default();
        assert!(empty.is_empty());
        assert!(!empty.success());
        assert!(!empty.failure());
        assert_eq!(empty.generic_code(), Errc::Unknown);
        assert!(empty == ErasedCode::<16>::default());
        assert!(empty != Errc::Unknown);
        assert_eq!(
            empty.try_widen::<GenericDomain>(),
            Err(ErasureError::EmptyDomain { expected: "generic" })
        );
        assert_eq!(format!("{:?}", empty.domain()), "Erased<8>(empty)");
    }

    #[test]
    fn erased_codes_stay_equivalent_to_their_origin() {
        let typed = GenericCode::new(Errc::ResourceBusy);
        let narrow = typed.erase::<4>();
        let wide = typed.erase::<32>();
        assert!(narrow == typed);
        assert!(typed == narrow);
        assert!(narrow == wide);
        assert!(wide == Errc::ResourceBusy);
        let view: &dyn AnyStatus = &wide;
        assert_eq!(view.value_as::<Errc>(), Some(Errc::ResourceBusy));
    }

    #[test]
    fn from_impl_narrows() {
        let erased: DefaultErased = Erased::default();
        assert_eq!(erased.id(), None);
        let code: ErasedCode<8> = StatusCode::<SignalDomain>::new(4).into();
        assert_eq!(code.domain().id(), Some(SignalDomain::ID));
    }
}
