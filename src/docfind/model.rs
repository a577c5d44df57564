use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One doctor listing as returned by the data source.
///
/// Every field defaults when missing or `null`, and text fields accept bare
/// numbers and booleans, so a single sloppy record never fails the whole
/// payload; only the top-level array shape is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doctor {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub name_initials: String,
    #[serde(deserialize_with = "optional_text")]
    pub photo: Option<String>,
    #[serde(deserialize_with = "text")]
    pub doctor_introduction: String,
    #[serde(deserialize_with = "list")]
    pub specialities: Vec<Speciality>,
    #[serde(deserialize_with = "text")]
    pub fees: String,
    #[serde(deserialize_with = "text")]
    pub experience: String,
    #[serde(deserialize_with = "list")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub clinic: Clinic,
    #[serde(deserialize_with = "or_default")]
    pub video_consult: bool,
    #[serde(deserialize_with = "or_default")]
    pub in_clinic: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speciality {
    #[serde(deserialize_with = "text")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clinic {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "text")]
    pub locality: String,
    #[serde(deserialize_with = "text")]
    pub city: String,
    #[serde(deserialize_with = "text")]
    pub address_line1: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub logo_url: String,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strings, numbers and booleans as text; anything else is empty.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// `null` or a value of the wrong shape becomes the default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Keeps the elements that decode, drops the rest. A non-array is empty.
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

impl Doctor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_specialities<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specialities = names
            .into_iter()
            .map(|name| Speciality { name: name.into() })
            .collect();
        self
    }

    pub fn with_fees(mut self, fees: impl Into<String>) -> Self {
        self.fees = fees.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn with_consultation(mut self, video_consult: bool, in_clinic: bool) -> Self {
        self.video_consult = video_consult;
        self.in_clinic = in_clinic;
        self
    }

    pub fn speciality_names(&self) -> impl Iterator<Item = &str> {
        self.specialities.iter().map(|s| s.name.as_str())
    }

    /// Fee as a number, `None` when the text carries no usable digits.
    pub fn fee_amount(&self) -> Option<u64> {
        extract_number(&self.fees)
    }

    /// Years of experience, `None` when the text carries no usable digits.
    pub fn experience_years(&self) -> Option<u64> {
        extract_number(&self.experience)
    }
}

/// Keeps every ASCII digit of `text`, in order, and parses them as one number.
///
/// Thousands separators and currency symbols simply drop out ("₹1,500" is
/// 1500). Text without digits, or a digit string too long for `u64`, yields
/// `None`.
pub fn extract_number(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
