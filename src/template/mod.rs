use askama::Template;

use crate::navigation::{CurrentPath, BRAND, NAV_LINKS};

pub mod error;
pub mod field;
pub mod user;

#[derive(Debug, Clone)]
pub struct NavItem {
    pub url: &'static str,
    pub name: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct NavBar {
    pub brand: &'static str,
    pub items: Vec<NavItem>,
}

impl NavBar {
    pub fn new(path: &CurrentPath) -> Self {
        let items = NAV_LINKS
            .iter()
            .map(|link| NavItem {
                url: link.url,
                name: link.name,
                current: path.is(link.url),
            })
            .collect();

        Self {
            brand: BRAND,
            items,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub nav: NavBar,
}
