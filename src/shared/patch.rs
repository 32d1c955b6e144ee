use serde::Deserialize;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit update semantics for nullable fields)
// ──────────────────────────────────────────────────────────
// - omitted field => Unset (keep stored value, via #[serde(default)])
// - null          => Null  (clear stored value)
// - value         => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// Resolve against the stored value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        url: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.url.is_unset());
        assert_eq!(body.url.apply(Some("kept".into())), Some("kept".to_string()));
    }

    #[test]
    fn null_clears() {
        let body: Body = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert_eq!(body.url, PatchField::Null);
        assert_eq!(body.url.apply(Some("old".into())), None);
    }

    #[test]
    fn value_replaces() {
        let body: Body = serde_json::from_str(r#"{"url": "https://x.dev"}"#).unwrap();
        assert_eq!(
            body.url.apply(Some("old".into())),
            Some("https://x.dev".to_string())
        );
    }
}
