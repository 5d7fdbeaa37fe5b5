//! Treatment outcome payload and its input form.

use serde::{Deserialize, Deserializer, Serialize};

/// Structured outcome attached when a record leaves active treatment.
///
/// The four counters follow the clinic's procedure names: `jarahi`
/// (surgery), `asab_keshi` (root canal), `tarmim` (restoration) and
/// `jerm_giri` (scaling). `tozihat` is a free-text note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentDetails {
    pub jarahi: u32,
    pub asab_keshi: u32,
    pub tarmim: u32,
    pub jerm_giri: u32,
    pub tozihat: String,
}

impl TreatmentDetails {
    /// Build details from a submitted form.
    ///
    /// Counters parse permissively: absent or non-numeric input becomes 0.
    pub fn from_form(form: &TreatmentForm) -> Self {
        Self {
            jarahi: parse_counter(form.jarahi.as_deref()),
            asab_keshi: parse_counter(form.asab_keshi.as_deref()),
            tarmim: parse_counter(form.tarmim.as_deref()),
            jerm_giri: parse_counter(form.jerm_giri.as_deref()),
            tozihat: form.tozihat.clone().unwrap_or_default(),
        }
    }

    /// Details for a canceled record: all counters zero, note kept.
    pub fn canceled(tozihat: Option<String>) -> Self {
        Self {
            tozihat: tozihat.unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Submitted counter values for a completed treatment.
///
/// Counters arrive as strings or numbers depending on the client; both are
/// accepted, and anything that does not parse as a non-negative integer
/// defaults to 0 when the details are built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentForm {
    #[serde(default, deserialize_with = "lenient_string")]
    pub jarahi: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub asab_keshi: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tarmim: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub jerm_giri: Option<String>,
    #[serde(default)]
    pub tozihat: Option<String>,
}

/// Accept a JSON string or number, carrying it forward as a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }))
}

fn parse_counter(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_parses_counters() {
        let form = TreatmentForm {
            jarahi: Some("3".into()),
            asab_keshi: Some("abc".into()),
            tarmim: None,
            jerm_giri: Some(" 2 ".into()),
            tozihat: Some("ok".into()),
        };
        let details = TreatmentDetails::from_form(&form);
        assert_eq!(details.jarahi, 3);
        assert_eq!(details.asab_keshi, 0);
        assert_eq!(details.tarmim, 0);
        assert_eq!(details.jerm_giri, 2);
        assert_eq!(details.tozihat, "ok");
    }

    #[test]
    fn test_from_form_negative_defaults_to_zero() {
        let form = TreatmentForm {
            jarahi: Some("-1".into()),
            ..TreatmentForm::default()
        };
        let details = TreatmentDetails::from_form(&form);
        assert_eq!(details.jarahi, 0);
        assert_eq!(details.tozihat, "");
    }

    #[test]
    fn test_canceled_zeroes_counters() {
        let details = TreatmentDetails::canceled(Some("moved away".into()));
        assert_eq!(details.jarahi, 0);
        assert_eq!(details.asab_keshi, 0);
        assert_eq!(details.tarmim, 0);
        assert_eq!(details.jerm_giri, 0);
        assert_eq!(details.tozihat, "moved away");
    }

    #[test]
    fn test_form_accepts_strings_and_numbers() {
        let form: TreatmentForm =
            serde_json::from_str(r#"{"jarahi": 4, "asabKeshi": "1", "tozihat": "ok"}"#).unwrap();
        let details = TreatmentDetails::from_form(&form);
        assert_eq!(details.jarahi, 4);
        assert_eq!(details.asab_keshi, 1);
        assert_eq!(details.tozihat, "ok");
    }

    #[test]
    fn test_details_json_uses_camel_case() {
        let details = TreatmentDetails {
            jarahi: 1,
            asab_keshi: 2,
            tarmim: 3,
            jerm_giri: 4,
            tozihat: "ok".into(),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["asabKeshi"], 2);
        assert_eq!(json["jermGiri"], 4);
    }
}
