//! Account fixtures: users and authorities.

use std::sync::LazyLock;

use super::{HasSamples, Samples};
use crate::domain::{Authority, User};

static AUTHORITY: LazyLock<Samples<Authority>> = LazyLock::new(|| {
    let named = |name: &str| Authority { name: Some(name.to_owned()) };
    Samples::new(
        named("00d184f7-c4cf-447d-bada-d6c94556f087"),
        named("1d34d903-8f8a-4e6d-a474-b4e823338999"),
        named("355e0f90-d842-453f-8abc-0ebe1391b430"),
        Authority { name: None },
    )
});

static USER: LazyLock<Samples<User>> = LazyLock::new(|| {
    let record = |id, login: &str| User { id, login: Some(login.to_owned()) };
    Samples::new(
        record(Some(19726), "UHD"),
        record(Some(9035), "w!9}.R@W\\hc\\rq\\,pX\\Sbml"),
        record(Some(9085), "Esy"),
        record(None, "xkGdl"),
    )
});

#[must_use]
pub fn authority() -> &'static Samples<Authority> {
    &AUTHORITY
}

#[must_use]
pub fn user() -> &'static Samples<User> {
    &USER
}

impl HasSamples for Authority {
    fn samples() -> &'static Samples<Self> {
        authority()
    }
}

impl HasSamples for User {
    fn samples() -> &'static Samples<Self> {
        user()
    }
}
