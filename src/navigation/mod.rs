use actix_utils::future::{ready, Ready};
use actix_web::{dev::Payload, Error, FromRequest, HttpRequest};

pub const BRAND: &str = "Reauth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub url: &'static str,
    pub name: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        url: "/",
        name: "Home",
    },
    NavLink {
        url: "/login",
        name: "Sign in",
    },
    NavLink {
        url: "/register",
        name: "Create an account",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPath(String);

impl CurrentPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, url: &str) -> bool {
        self.0 == url
    }
}

impl FromRequest for CurrentPath {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(CurrentPath::new(req.path())))
    }
}
