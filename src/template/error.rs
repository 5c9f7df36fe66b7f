use askama::Template;

use super::NavBar;

#[derive(Template)]
#[template(path = "error/not_found.html")]
pub struct NotFoundErrorTemplate {
    pub nav: NavBar,
}
