//! Contact form hand-off to the visitor's mail client.

use std::collections::BTreeMap;

/// Markup that replaces the form once it has been submitted.
pub const SUCCESS_HTML: &str = r#"
      <div class="form-success revealed">
        <h3>Thank you!</h3>
        <p>We'll be in touch within 24 hours to start your growth journey.</p>
      </div>
    "#;

/// The fields the mail draft is built from. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub brand_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl Inquiry {
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            brand_name: get("brand_name"),
            phone: get("phone"),
            email: get("email"),
            message: get("message"),
        }
    }

    pub fn subject(&self) -> String {
        format!("New inquiry from {}", self.brand_name)
    }

    pub fn body(&self) -> String {
        format!(
            "Brand: {}\nPhone: {}\nEmail: {}\n\nMessage:\n{}",
            self.brand_name, self.phone, self.email, self.message
        )
    }

    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}
