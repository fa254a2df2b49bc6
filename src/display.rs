//! Today/tomorrow panel shown by the display adapter.

use ipm_cadence_resolver::Resolution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelValue {
    pub text: String,
    /// Marks the element with the `none` class
    pub empty: bool,
}

impl PanelValue {
    fn new(value: Option<&str>, placeholder: &str) -> Self {
        match value {
            Some(text) => Self {
                text: text.to_owned(),
                empty: false,
            },
            None => Self {
                text: placeholder.to_owned(),
                empty: true,
            },
        }
    }
}

#[derive(askama::Template, Debug, Clone, PartialEq, Eq)]
#[template(path = "panel.html")]
pub struct Panel {
    pub today: PanelValue,
    pub tomorrow: PanelValue,
}

impl Panel {
    pub fn new(current: Option<&str>, next: Option<&str>, placeholder: &str) -> Self {
        Self {
            today: PanelValue::new(current, placeholder),
            tomorrow: PanelValue::new(next, placeholder),
        }
    }

    pub fn from_resolution(resolution: &Resolution, placeholder: &str) -> Self {
        Self::new(
            resolution.current.as_deref(),
            resolution.next.as_deref(),
            placeholder,
        )
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        askama::Template::render(self)
    }

    /// Two-line rendering for terminals.
    pub fn to_plain_text(&self) -> String {
        format!(
            "Today:    {}\nTomorrow: {}",
            self.today.text, self.tomorrow.text
        )
    }
}
