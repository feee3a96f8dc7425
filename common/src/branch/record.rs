use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder rendered for any field the upstream left out.
pub const MISSING_FIELD: &str = "N/A";

/// Branch details as returned by the upstream IFSC API.
///
/// Every field is optional; the upstream contract makes no promises beyond the
/// shape. Unknown fields are ignored, and a field of an unexpected JSON type is
/// treated as absent rather than failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub ifsc: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub bank: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub micr: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub neft: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub rtgs: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub imps: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub upi: Option<bool>,
}

/// Strings pass through, numbers are kept in their JSON spelling, anything else is `None`.
fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_flag<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

/// A payment service badge on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBadge {
    pub label: &'static str,
    pub enabled: bool,
}

/// Render-ready projection of a [`BranchRecord`].
///
/// Text fields are passed through verbatim; blank or absent values are `None`
/// and rendered as the [`MISSING_FIELD`] placeholder by the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchView {
    pub ifsc: Option<String>,
    pub bank: Option<String>,
    pub branch: Option<String>,
    pub micr: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub services: Vec<ServiceBadge>,
    pub page_title: String,
    pub page_description: String,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

fn or_missing(value: Option<&String>) -> &str {
    present(value).unwrap_or(MISSING_FIELD)
}

fn cleaned(value: Option<&String>) -> Option<String> {
    present(value).map(String::from)
}

impl BranchRecord {
    /// Title of the detail page, e.g.
    /// `IFSC Code SBIN0000628 - State Bank of India, Bandra Kurla Complex, Mumbai`.
    pub fn page_title(&self) -> String {
        let mut title = format!(
            "IFSC Code {} - {}, {}",
            or_missing(self.ifsc.as_ref()),
            or_missing(self.bank.as_ref()),
            or_missing(self.branch.as_ref()),
        );
        if let Some(city) = present(self.city.as_ref()) {
            title.push_str(", ");
            title.push_str(city);
        }
        title
    }

    pub fn page_description(&self) -> String {
        format!(
            "Find details for IFSC Code {}: {}, {} branch, {}, {}.",
            or_missing(self.ifsc.as_ref()),
            or_missing(self.bank.as_ref()),
            or_missing(self.branch.as_ref()),
            or_missing(self.address.as_ref()),
            or_missing(self.city.as_ref()),
        )
    }

    pub fn services(&self) -> Vec<ServiceBadge> {
        [
            ("NEFT", self.neft),
            ("RTGS", self.rtgs),
            ("IMPS", self.imps),
            ("UPI", self.upi),
        ]
        .into_iter()
        .map(|(label, flag)| ServiceBadge {
            label,
            enabled: flag.unwrap_or(false),
        })
        .collect()
    }

    pub fn to_view(&self) -> BranchView {
        BranchView {
            ifsc: cleaned(self.ifsc.as_ref()),
            bank: cleaned(self.bank.as_ref()),
            branch: cleaned(self.branch.as_ref()),
            micr: cleaned(self.micr.as_ref()),
            contact: cleaned(self.contact.as_ref()),
            address: cleaned(self.address.as_ref()),
            city: cleaned(self.city.as_ref()),
            state: cleaned(self.state.as_ref()),
            services: self.services(),
            page_title: self.page_title(),
            page_description: self.page_description(),
        }
    }
}
