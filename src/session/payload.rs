use serde_json::Value;

use crate::domain::FieldDescriptor;
use crate::form::{Record, RowState, is_truthy};

// Included iff edited, always_send, or defaulted, and the kind is sendable.
// A default substitutes for a falsy live value and so wins over an explicit
// empty/false edit; a survivor with no value at all lands as null.
pub(super) fn build_payload(row: &RowState) -> Record {
    let mut payload = Record::new();
    for (name, field) in row.iter() {
        if !field.kind.profile().sendable {
            continue;
        }
        if !(field.always_send || field.edited || field.default_value.is_some()) {
            continue;
        }
        let value = if is_truthy(field.value.as_ref()) {
            field.value.clone()
        } else if field.default_value.is_some() {
            field.default_value.clone()
        } else {
            field.value.clone()
        };
        payload.insert(name.to_string(), value.unwrap_or(Value::Null));
    }
    payload
}

pub(super) fn first_missing_required<'a>(
    descriptors: &'a [FieldDescriptor],
    row: &RowState,
) -> Option<&'a FieldDescriptor> {
    descriptors.iter().find(|descriptor| {
        descriptor.required
            && row
                .field(&descriptor.name)
                .is_none_or(|field| field.is_missing())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::FieldKind;
    use crate::form::FieldEvent;

    use super::*;

    fn build_row(descriptors: &[FieldDescriptor], record: &Record) -> RowState {
        RowState::build(descriptors, record)
    }

    fn record(entries: &[(&str, Value)]) -> Record {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn untouched_fields_stay_out_of_the_payload() {
        let descriptors = [FieldDescriptor::text("title")];
        let row = build_row(&descriptors, &record(&[("title", json!("Old"))]));
        assert!(build_payload(&row).is_empty());
    }

    #[test]
    fn edited_always_send_and_defaulted_fields_are_included() {
        let descriptors = [
            FieldDescriptor::text("title"),
            FieldDescriptor::text("owner").always_send(),
            FieldDescriptor::new("active", FieldKind::Checkbox).with_default(false),
        ];
        let mut row = build_row(
            &descriptors,
            &record(&[("title", json!("Old")), ("owner", json!("me"))]),
        );
        row.field_mut("title")
            .unwrap()
            .set_value(FieldEvent::text("New").candidate_value());

        let payload = build_payload(&row);
        assert_eq!(payload.get("title"), Some(&json!("New")));
        assert_eq!(payload.get("owner"), Some(&json!("me")));
        assert_eq!(payload.get("active"), Some(&json!(false)));
    }

    #[test]
    fn readonly_fields_never_enter_the_payload() {
        let descriptors =
            [FieldDescriptor::new("id", FieldKind::Readonly).always_send()];
        let row = build_row(&descriptors, &record(&[("id", json!("abc"))]));
        assert!(build_payload(&row).is_empty());
    }

    #[test]
    fn default_wins_over_an_explicit_falsy_edit() {
        let descriptors =
            [FieldDescriptor::new("active", FieldKind::Checkbox).with_default(true)];
        let mut row = build_row(&descriptors, &record(&[("active", json!(true))]));
        row.field_mut("active")
            .unwrap()
            .set_value(FieldEvent::checked(false).candidate_value());

        let payload = build_payload(&row);
        assert_eq!(payload.get("active"), Some(&json!(true)));
    }

    #[test]
    fn edited_field_with_no_value_and_no_default_lands_as_null() {
        let descriptors = [FieldDescriptor::text("title")];
        let mut row = build_row(&descriptors, &record(&[("title", json!("Old"))]));
        row.field_mut("title")
            .unwrap()
            .set_value(FieldEvent::text("").candidate_value());

        let payload = build_payload(&row);
        assert_eq!(payload.get("title"), Some(&Value::Null));
    }

    #[test]
    fn first_missing_required_reports_declaration_order() {
        let descriptors = [
            FieldDescriptor::text("optional"),
            FieldDescriptor::text("first").required(),
            FieldDescriptor::text("second").required(),
        ];
        let row = build_row(&descriptors, &Record::new());
        let offender = first_missing_required(&descriptors, &row).unwrap();
        assert_eq!(offender.name, "first");
    }

    #[test]
    fn required_fields_with_values_pass() {
        let descriptors = [FieldDescriptor::text("title").required()];
        let row = build_row(&descriptors, &record(&[("title", json!("x"))]));
        assert!(first_missing_required(&descriptors, &row).is_none());
    }
}
