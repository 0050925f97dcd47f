use serde_json::{Value, json};

use super::errors::SuggestionError;
use super::model::Suggestion;

const REQUIRED_FIELDS: [&str; 3] = ["barcode", "suggestedAction", "reason"];

/// JSON Schema of the output the model must produce: an array of
/// `{ barcode, suggestedAction, reason }` string objects.
pub fn suggestion_list_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "barcode": { "type": "string" },
                "suggestedAction": { "type": "string" },
                "reason": { "type": "string" }
            },
            "required": REQUIRED_FIELDS,
            "additionalProperties": false
        }
    })
}

/// Validates a model payload against [`suggestion_list_schema`].
///
/// Any deviation rejects the whole payload; nothing is filled in or skipped.
/// An empty array is valid. Entries are not matched against the products
/// that were sent.
pub fn parse_suggestions(payload: Value) -> Result<Vec<Suggestion>, SuggestionError> {
    let items = match payload {
        Value::Array(items) => items,
        _ => return Err(SuggestionError::AnalysisOutputInvalid),
    };

    items.into_iter().map(parse_entry).collect()
}

fn parse_entry(entry: Value) -> Result<Suggestion, SuggestionError> {
    let object = entry
        .as_object()
        .ok_or(SuggestionError::AnalysisOutputInvalid)?;

    if object.len() != REQUIRED_FIELDS.len() {
        return Err(SuggestionError::AnalysisOutputInvalid);
    }

    let field = |name: &str| -> Result<String, SuggestionError> {
        object
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(SuggestionError::AnalysisOutputInvalid)
    };

    Ok(Suggestion {
        barcode: field("barcode")?,
        suggested_action: field("suggestedAction")?,
        reason: field("reason")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_well_formed_payload() {
        let payload = json!([
            {"barcode": "123", "suggestedAction": "remove from shelf", "reason": "expired 9 days ago"},
            {"barcode": "456", "suggestedAction": "discount", "reason": "expires in 2 days"}
        ]);

        let suggestions = parse_suggestions(payload).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].barcode, "123");
        assert_eq!(suggestions[0].suggested_action, "remove from shelf");
        assert_eq!(suggestions[1].reason, "expires in 2 days");
    }

    #[test]
    fn should_accept_empty_array() {
        assert_eq!(parse_suggestions(json!([])), Ok(vec![]));
    }

    #[test]
    fn should_accept_duplicate_barcodes() {
        let payload = json!([
            {"barcode": "123", "suggestedAction": "discount", "reason": "a"},
            {"barcode": "123", "suggestedAction": "remove", "reason": "b"}
        ]);

        assert_eq!(parse_suggestions(payload).unwrap().len(), 2);
    }

    #[test]
    fn should_reject_whole_payload_when_one_reason_is_missing() {
        let payload = json!([
            {"barcode": "123", "suggestedAction": "discount", "reason": "soon"},
            {"barcode": "456", "suggestedAction": "discount"}
        ]);

        assert_eq!(
            parse_suggestions(payload),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_reject_null_payload() {
        assert_eq!(
            parse_suggestions(Value::Null),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_reject_object_instead_of_array() {
        let payload = json!({"barcode": "123", "suggestedAction": "discount", "reason": "x"});
        assert_eq!(
            parse_suggestions(payload),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_reject_non_string_field() {
        let payload = json!([{"barcode": 123, "suggestedAction": "discount", "reason": "x"}]);
        assert_eq!(
            parse_suggestions(payload),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_reject_extra_field() {
        let payload = json!([{
            "barcode": "123",
            "suggestedAction": "discount",
            "reason": "x",
            "discountPercent": 50
        }]);
        assert_eq!(
            parse_suggestions(payload),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_reject_non_object_entry() {
        assert_eq!(
            parse_suggestions(json!(["discount 123"])),
            Err(SuggestionError::AnalysisOutputInvalid)
        );
    }

    #[test]
    fn should_declare_all_fields_required_in_schema() {
        let schema = suggestion_list_schema();
        assert_eq!(schema["type"], "array");
        assert_eq!(
            schema["items"]["required"],
            json!(["barcode", "suggestedAction", "reason"])
        );
        assert_eq!(schema["items"]["additionalProperties"], false);
    }
}
