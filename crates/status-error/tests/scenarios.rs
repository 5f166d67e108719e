//! End-to-end usage: generic failures, erased round trips, foreign errors and
//! `std::io` interop.
use status_error::{
    AnyStatus, DefaultErased, ErasedFailure, ErasureError, Errc, FailureStatus, GenericCode, GenericDomain,
    StatusCode, StaticDomain,
};
use status_test_utils::{DiskError, HttpDomain, LabelDomain, RawCodeDomain, init_tracing_once};

#[test]
fn resource_busy_reports_its_classification() {
    init_tracing_once();
    let status = FailureStatus::<GenericDomain>::new(GenericCode::new(Errc::ResourceBusy));
    assert_eq!(*status.value(), Errc::ResourceBusy);
    assert!(status == Errc::ResourceBusy);
    assert!(status != Errc::TimedOut);
}

#[test]
fn four_byte_value_survives_an_eight_byte_payload() {
    let original = FailureStatus::<RawCodeDomain>::from_value(0xdead_beef);
    let erased: ErasedFailure<8> = original.erase();
    assert_eq!(erased.domain_name(), RawCodeDomain::NAME);
    let back = erased
        .try_widen::<RawCodeDomain>()
        .expect("narrowed from the raw domain");
    assert_eq!(back.value().to_ne_bytes(), original.value().to_ne_bytes());
}

#[test]
fn wrong_domain_is_rejected_on_checked_widening() {
    let erased: ErasedFailure<8> = StatusCode::<HttpDomain>::new(503).into();
    let err = erased
        .try_widen::<RawCodeDomain>()
        .expect_err("http is not the raw domain");
    assert!(matches!(
        err,
        ErasureError::DomainMismatch {
            expected_name: "raw",
            found_name: "http",
            ..
        }
    ));
    // Same meaning, different domain: still equivalent.
    assert!(erased == FailureStatus::<RawCodeDomain>::from_value(16));
}

#[test]
fn empty_erased_status_only_equals_another_empty_one() {
    let empty = FailureStatus::<DefaultErased>::default();
    assert!(empty == FailureStatus::<DefaultErased>::default());
    assert!(empty != FailureStatus::<GenericDomain>::from(Errc::Unknown));
    assert!(empty != ErasedFailure::<8>::from(Errc::ResourceBusy));
    assert!(matches!(
        empty.try_widen::<GenericDomain>(),
        Err(ErasureError::EmptyDomain { .. })
    ));
}

#[test]
fn io_errors_convert_through_the_generic_domain() {
    let status = FailureStatus::<GenericDomain>::from(std::io::ErrorKind::NotFound);
    assert!(status == Errc::NoSuchFileOrDirectory);

    let err = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    let status = FailureStatus::<GenericDomain>::from(&err);
    assert_eq!(*status.value(), Errc::PermissionDenied);

    let erased = ErasedFailure::<4>::from(std::io::ErrorKind::TimedOut);
    assert!(erased == FailureStatus::<HttpDomain>::from_value(504));
}

#[test]
fn foreign_errors_meet_other_domains_through_generic_codes() {
    let missing: FailureStatus<RawCodeDomain> = DiskError::Missing.into();
    assert!(missing == FailureStatus::<HttpDomain>::from_value(404));
    assert!(missing == Errc::NoSuchFileOrDirectory);

    let quota: FailureStatus<RawCodeDomain> = DiskError::QuotaExceeded.into();
    assert!(quota != Errc::Unknown);

    let labelled = FailureStatus::<LabelDomain>::with(DiskError::Locked, "journal");
    assert_eq!(labelled.value(), "journal: Locked");
    assert!(labelled != FailureStatus::<RawCodeDomain>::from(DiskError::Locked));
}
