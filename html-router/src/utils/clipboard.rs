use common::utils::config::AppConfig;
use serde::Serialize;

/// Whether pages may offer copy-to-clipboard buttons.
///
/// The copy itself happens in the browser (`assets/clipboard.js`), which also
/// checks that `navigator.clipboard` exists before using it. `Disabled` renders
/// no buttons and no script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardCapability {
    Interactive,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CopyButton {
    pub label: &'static str,
    pub value: String,
}

impl ClipboardCapability {
    pub const fn from_config(config: &AppConfig) -> Self {
        if config.copy_buttons {
            Self::Interactive
        } else {
            Self::Disabled
        }
    }

    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }

    /// A button for `value`, or nothing when disabled or there is nothing to copy.
    pub fn copy_button(self, label: &'static str, value: Option<&str>) -> Option<CopyButton> {
        if !self.is_interactive() {
            return None;
        }
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        Some(CopyButton {
            label,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_offers_buttons() {
        assert_eq!(
            ClipboardCapability::Disabled.copy_button("IFSC", Some("SBIN0000628")),
            None
        );
    }

    #[test]
    fn interactive_skips_missing_values() {
        let clipboard = ClipboardCapability::Interactive;
        assert_eq!(clipboard.copy_button("MICR", None), None);
        assert_eq!(clipboard.copy_button("MICR", Some("  ")), None);
        assert_eq!(
            clipboard.copy_button("IFSC", Some("SBIN0000628")),
            Some(CopyButton {
                label: "IFSC",
                value: "SBIN0000628".to_string()
            })
        );
    }

    #[test]
    fn follows_config_flag() {
        let config = AppConfig {
            copy_buttons: false,
            ..Default::default()
        };
        assert_eq!(
            ClipboardCapability::from_config(&config),
            ClipboardCapability::Disabled
        );
        assert!(ClipboardCapability::from_config(&AppConfig::default()).is_interactive());
    }
}
