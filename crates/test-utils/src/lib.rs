//! Fixture domains and helpers shared by the workspace's tests.

use status_core::{DomainId, Errc, IntoStatusCode, IntoStatusCodeWith, StaticDomain, StatusCode};

/// HTTP status codes. Success below 400.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpDomain;

impl StaticDomain for HttpDomain {
    type Value = u16;

    const ID: DomainId = DomainId::from_u128(0x8c1f_52d4_3b0a_4e77_9d2c_61a4_0b3e_7f01);
    const NAME: &'static str = "http";

    fn success(value: &u16) -> bool {
        *value < 400
    }

    fn generic_code(value: &u16) -> Errc {
        match value {
            0..=399 => Errc::Success,
            400 => Errc::InvalidArgument,
            401 | 403 => Errc::PermissionDenied,
            404 => Errc::NoSuchFileOrDirectory,
            408 | 504 => Errc::TimedOut,
            413 => Errc::FileTooLarge,
            429 => Errc::ResourceUnavailableTryAgain,
            501 => Errc::FunctionNotSupported,
            503 => Errc::ResourceBusy,
            _ => Errc::Unknown,
        }
    }
}

/// errno-style numbers. Zero is success; everything else maps through
/// [`Errc::from_raw`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodeDomain;

impl StaticDomain for RawCodeDomain {
    type Value = u32;

    const ID: DomainId = DomainId::from_u128(0x2f6b_9e10_c4d8_4a3b_8e5f_0c7a_19d2_6b02);
    const NAME: &'static str = "raw";

    fn success(value: &u32) -> bool {
        *value == 0
    }

    fn generic_code(value: &u32) -> Errc {
        i32::try_from(*value)
            .ok()
            .and_then(Errc::from_raw)
            .unwrap_or(Errc::Unknown)
    }
}

/// Free-form labels. Not erasure-safe: the value owns a heap allocation.
/// Only `"ok"` is success, so the empty default label is a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelDomain;

impl StaticDomain for LabelDomain {
    type Value = String;

    const ID: DomainId = DomainId::from_u128(0xd03a_7715_6e2c_48f1_a6b9_2e80_5c14_9d03);
    const NAME: &'static str = "label";

    fn success(value: &String) -> bool {
        value == "ok"
    }
}

/// A 12-byte value: fits 16- and 32-byte payloads only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WideDomain;

impl StaticDomain for WideDomain {
    type Value = (u32, u32, u32);

    const ID: DomainId = DomainId::from_u128(0x61e4_0b9a_2d57_4c08_b3f1_7a26_e95d_0c04);
    const NAME: &'static str = "wide";

    fn success(value: &(u32, u32, u32)) -> bool {
        *value == (0, 0, 0)
    }
}

/// An error type from "somewhere else", plugged in through
/// [`IntoStatusCode`] and [`IntoStatusCodeWith`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskError {
    Missing,
    Locked,
    QuotaExceeded,
}

impl DiskError {
    pub const ALL: [DiskError; 3] = [DiskError::Missing, DiskError::Locked, DiskError::QuotaExceeded];

    pub fn raw(self) -> u32 {
        match self {
            DiskError::Missing => 2,
            DiskError::Locked => 16,
            DiskError::QuotaExceeded => 122,
        }
    }
}

impl IntoStatusCode for DiskError {
    type Domain = RawCodeDomain;

    fn into_status_code(self) -> StatusCode<RawCodeDomain> {
        StatusCode::new(self.raw())
    }
}

/// The extra-argument form: the error plus the context it happened in.
impl<'a> IntoStatusCodeWith<&'a str> for DiskError {
    type Domain = LabelDomain;

    fn into_status_code_with(self, context: &'a str) -> StatusCode<LabelDomain> {
        StatusCode::new(format!("{context}: {self:?}"))
    }
}

/**
Install a basic tracing subscriber if none is set yet. Honors RUST_LOG-like env filters.
Returns true if a subscriber was installed by this call, false if one already existed.
*/
pub fn init_tracing_once() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok()
}
