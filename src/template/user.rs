use askama::Template;

use super::field::{button_view, input_views, ButtonView, InputView};
use super::NavBar;
use crate::form::controller::FormKind;
use crate::form::state::FormState;
use crate::navigation::CurrentPath;

pub const REGISTERED_NOTICE: &str = "Your account was registered, you can now sign in.";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub nav: NavBar,
    pub title: &'static str,
    pub inputs: Vec<InputView>,
    pub button: ButtonView,
    pub notice: String,
}

impl LoginTemplate {
    pub fn new(path: &CurrentPath, state: &FormState, registered: bool) -> Self {
        Self {
            nav: NavBar::new(path),
            title: "Sign in",
            inputs: input_views(FormKind::Login, state),
            button: button_view(FormKind::Login),
            notice: if registered {
                REGISTERED_NOTICE.to_string()
            } else {
                String::new()
            },
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub nav: NavBar,
    pub title: &'static str,
    pub inputs: Vec<InputView>,
    pub button: ButtonView,
    pub alert: String,
}

impl RegisterTemplate {
    pub fn new(path: &CurrentPath, state: &FormState) -> Self {
        Self {
            nav: NavBar::new(path),
            title: "Register an Account",
            inputs: input_views(FormKind::Register, state),
            button: button_view(FormKind::Register),
            alert: String::new(),
        }
    }

    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = alert.into();
        self
    }
}
