//! Inbound query and outbound payload types for the lookup endpoint.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameters of `GET /api/exist`.
///
/// Missing parameters read as empty strings; nothing else is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQuery {
    pub word: String,
    pub language: String,
}

impl WordQuery {
    /// Read `word` and `lang` from a raw query string. Repeated keys keep
    /// their first value and unknown keys are ignored.
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let mut word = None;
        let mut language = None;
        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "word" if word.is_none() => word = Some(value.into_owned()),
                "lang" if language.is_none() => language = Some(value.into_owned()),
                _ => {}
            }
        }
        Self {
            word: word.unwrap_or_default(),
            language: language.unwrap_or_default(),
        }
    }
}

/// Success payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub word: String,
    #[serde(rename = "lang")]
    pub language: String,
    #[serde(rename = "exist")]
    pub exists: bool,
}

/// Failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// `GET /health` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_response_uses_wire_field_names() {
        let resp = LookupResponse {
            word: "Haus".into(),
            language: "german".into(),
            exists: true,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word": "Haus", "lang": "german", "exist": true})
        );
    }

    #[test]
    fn lookup_response_survives_serialization() {
        let cases = [
            ("", "", false),
            ("naïve", "french", true),
            ("say \"hi\"\\n", "en\tgb", false),
            ("日本", "japanese", true),
        ];
        for (word, language, exists) in cases {
            let original = LookupResponse {
                word: word.into(),
                language: language.into(),
                exists,
            };
            let text = serde_json::to_string(&original).unwrap();
            let parsed: LookupResponse = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn word_query_defaults_missing_params_to_empty() {
        let q = WordQuery::from_raw_query(Some("word=casa"));
        assert_eq!(q.word, "casa");
        assert_eq!(q.language, "");
        assert_eq!(WordQuery::from_raw_query(None), WordQuery::default());
    }

    #[test]
    fn word_query_keeps_first_of_repeated_params() {
        let q = WordQuery::from_raw_query(Some("lang=en&word=a&word=b&lang=fr&extra=1"));
        assert_eq!(q.word, "a");
        assert_eq!(q.language, "en");
    }

    #[test]
    fn word_query_decodes_form_encoding() {
        let q = WordQuery::from_raw_query(Some("lang=en%22gb&word=ice+cream%5C"));
        assert_eq!(q.word, "ice cream\\");
        assert_eq!(q.language, "en\"gb");
    }
}
