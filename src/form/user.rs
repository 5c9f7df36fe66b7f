use serde::Deserialize;

use super::controller::FormController;
use super::field::{CONFIRM_PASSWORD, EMAIL, FULLNAME, PASSWORD};

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct RegisterFormData {
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl RegisterFormData {
    pub fn apply_to(self, controller: &mut FormController) {
        controller.change(FULLNAME, self.fullname);
        controller.change(EMAIL, self.email);
        controller.change(PASSWORD, self.password);
        controller.change(CONFIRM_PASSWORD, self.confirm_password);
    }
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl LoginFormData {
    pub fn apply_to(self, controller: &mut FormController) {
        controller.change(EMAIL, self.email);
        controller.change(PASSWORD, self.password);
    }
}

#[derive(Deserialize, Default, Debug)]
pub struct LoginQuery {
    pub registered: Option<String>,
}
