//! Cross-domain equivalence and erasure of plain status codes.
//!
//! Covered:
//! - Symmetry of `equivalent` between typed, generic and erased codes.
//! - Generic fallback: codes of unrelated domains meet through `Errc`.
//! - Narrowing to each canonical width and checked widening.
//! - The dynamic view (`dyn AnyStatus`) over both representations.
use proptest::prelude::*;

use status_core::{
    AnyStatus, Erased, ErasedCode, ErasureError, Errc, GenericCode, StatusCode, equivalent, fits,
};
use status_test_utils::{HttpDomain, RawCodeDomain, WideDomain};

fn any_errc() -> impl Strategy<Value = Errc> {
    prop::sample::select(Errc::ALL.to_vec())
}

proptest! {
    #[test]
    fn generic_fallback_is_symmetric(http in 0u16..700, raw in 0u32..140) {
        let a = StatusCode::<HttpDomain>::new(http);
        let b = StatusCode::<RawCodeDomain>::new(raw);
        prop_assert_eq!(equivalent(&a, &b), equivalent(&b, &a));
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn erasure_preserves_equivalence(http in 0u16..700, errc in any_errc()) {
        let typed = StatusCode::<HttpDomain>::new(http);
        let generic = GenericCode::new(errc);
        let erased: ErasedCode<8> = typed.erase();
        prop_assert_eq!(typed == generic, erased == generic);
        prop_assert_eq!(generic == typed, generic == erased);
        prop_assert!(erased == typed);
    }

    #[test]
    fn checked_widening_round_trips(raw in any::<u32>()) {
        let code = StatusCode::<RawCodeDomain>::new(raw);
        prop_assert_eq!(code.erase::<4>().try_widen::<RawCodeDomain>(), Ok(code.clone()));
        prop_assert_eq!(code.erase::<16>().try_widen::<RawCodeDomain>(), Ok(code));
    }
}

#[test]
fn unrelated_domains_meet_through_generic_codes() {
    let busy_http = StatusCode::<HttpDomain>::new(503);
    let busy_raw = StatusCode::<RawCodeDomain>::new(16);
    assert!(busy_http == busy_raw);
    assert!(busy_http == Errc::ResourceBusy);
    assert!(Errc::ResourceBusy == busy_raw);

    let teapot = StatusCode::<HttpDomain>::new(418);
    assert!(teapot != Errc::Unknown);
    assert!(teapot != StatusCode::<RawCodeDomain>::new(0xfeed));
}

#[test]
fn success_codes_are_equivalent_across_domains() {
    assert!(StatusCode::<HttpDomain>::new(200) == StatusCode::<RawCodeDomain>::new(0));
    assert!(StatusCode::<HttpDomain>::new(204) == Errc::Success);
}

#[test]
fn width_fit_is_known_at_compile_time() {
    const WIDE_FITS_EIGHT: bool = fits::<(u32, u32, u32), 8>();
    const WIDE_FITS_SIXTEEN: bool = fits::<(u32, u32, u32), 16>();
    assert!(!WIDE_FITS_EIGHT);
    assert!(WIDE_FITS_SIXTEEN);

    let wide = StatusCode::<WideDomain>::new((1, 2, 3));
    let erased: StatusCode<Erased<16>> = wide.into();
    assert_eq!(erased.try_widen::<WideDomain>().map(|c| *c.value()), Ok((1, 2, 3)));
}

#[test]
fn widening_into_the_wrong_domain_is_reported() {
    let erased = StatusCode::<HttpDomain>::new(404).erase::<8>();
    match erased.try_widen::<RawCodeDomain>() {
        Err(ErasureError::DomainMismatch {
            expected, found, ..
        }) => {
            assert_eq!(expected, <RawCodeDomain as status_core::StaticDomain>::ID);
            assert_eq!(found, <HttpDomain as status_core::StaticDomain>::ID);
        }
        other => panic!("expected a domain mismatch, got {other:?}"),
    }
    let empty = ErasedCode::<8>::default();
    assert!(matches!(
        empty.try_widen::<HttpDomain>(),
        Err(ErasureError::EmptyDomain { expected: "http" })
    ));
}

#[test]
fn dynamic_view_hands_out_the_concrete_value() {
    let typed = StatusCode::<RawCodeDomain>::new(2);
    let erased = typed.erase::<8>();
    for view in [&typed as &dyn AnyStatus, &erased as &dyn AnyStatus] {
        assert_eq!(view.domain_name(), "raw");
        assert_eq!(view.value_as::<u32>(), Some(2));
        assert_eq!(view.value_as::<u16>(), None);
        assert_eq!(view.generic_code(), Errc::NoSuchFileOrDirectory);
        assert!(view.equivalent(&GenericCode::new(Errc::NoSuchFileOrDirectory)));
    }
}
