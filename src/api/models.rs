use serde::Deserialize;
use std::fmt;

/// A browsable grouping shown in the category region.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A nearby place, as returned by `/api/items/`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub phone: Phone,
    #[serde(default)]
    pub avatar_photo: Option<String>,
    #[serde(default)]
    pub phone_numbers: Option<String>,
}

impl Place {
    /// Phone text for display: the formatted `phone_numbers` when sent, else `phone`.
    pub fn phone_display(&self) -> String {
        match self.phone_numbers.as_deref() {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => self.phone.to_string(),
        }
    }
}

/// The server sends phones as numbers; text is accepted so leading zeros survive.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Phone {
    Number(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phone::Number(n) => write!(f, "{n}"),
            // Integral floats print without the trailing `.0`.
            Phone::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.0}"),
            Phone::Float(x) => write!(f, "{x}"),
            Phone::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category_without_icon() {
        let cats: Vec<Category> =
            serde_json::from_str(r#"[{"id":3,"name":"Food"}]"#).unwrap();
        assert_eq!(
            cats,
            vec![Category { id: 3, name: "Food".into(), icon: None }]
        );
    }

    #[test]
    fn decodes_place_with_numeric_phone() {
        let places: Vec<Place> = serde_json::from_str(
            r#"[{"id":1,"name":"Cafe","address":"Main St","phone":5551234}]"#,
        )
        .unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].phone, Phone::Number(5551234));
        assert_eq!(places[0].avatar_photo, None);
        assert_eq!(places[0].phone_display(), "5551234");
    }

    #[test]
    fn decodes_place_with_float_phone() {
        let places: Vec<Place> = serde_json::from_str(
            r#"[{"id":1,"name":"Cafe","address":"Main St","phone":5551234.0}]"#,
        )
        .unwrap();
        assert_eq!(places[0].phone, Phone::Float(5551234.0));
        assert_eq!(places[0].phone_display(), "5551234");
        assert_eq!(Phone::Float(12.5).to_string(), "12.5");
    }

    #[test]
    fn phone_numbers_take_precedence_when_present() {
        let p: Place = serde_json::from_str(
            r#"{"id":2,"name":"Bar","address":"2nd Ave","phone":"0123","phone_numbers":"+1 555 0100","extra":true}"#,
        )
        .unwrap();
        assert_eq!(p.phone, Phone::Text("0123".into()));
        assert_eq!(p.phone_display(), "+1 555 0100");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let res: Result<Vec<Place>, _> =
            serde_json::from_str(r#"[{"id":1,"name":"Cafe","phone":1}]"#);
        assert!(res.is_err());
    }
}
