use serde_json::Value;

use crate::domain::FieldDescriptor;

use super::row::RowState;

/// First matching option's `extra`, scanning options in declaration order.
pub fn resolve_extra(descriptor: &FieldDescriptor, candidate: &Value) -> Option<Value> {
    descriptor
        .options
        .iter()
        .find(|option| option.accepts(candidate))
        .and_then(|option| option.extra.clone())
}

/// Overwrites each dependant field's `extra` in place; `value` and `edited` stay put.
pub fn propagate_extra(descriptor: &FieldDescriptor, row: &mut RowState, extra: Option<&Value>) {
    let Some(extra) = extra else {
        return;
    };
    for name in &descriptor.dependant_fields {
        if let Some(field) = row.field_mut(name) {
            field.extra = Some(extra.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{FieldKind, FieldOption};
    use crate::form::Record;

    use super::*;

    fn category_descriptor() -> FieldDescriptor {
        FieldDescriptor::new("category", FieldKind::Select)
            .with_options(vec![
                FieldOption::new("a", "A"),
                FieldOption::new("b", "B").with_extra(json!({"max": 10})),
                FieldOption::new("b", "B again").with_extra(json!({"max": 99})),
            ])
            .with_dependants(["limit"])
    }

    #[test]
    fn first_matching_option_decides() {
        let descriptor = category_descriptor();
        assert_eq!(resolve_extra(&descriptor, &json!("a")), None);
        assert_eq!(
            resolve_extra(&descriptor, &json!("b")),
            Some(json!({"max": 10}))
        );
        assert_eq!(resolve_extra(&descriptor, &json!("zzz")), None);
    }

    #[test]
    fn matcher_predicate_substitutes_for_equality() {
        let descriptor = FieldDescriptor::new("kind", FieldKind::Select).with_options(vec![
            FieldOption::new("exact", "Exact"),
            FieldOption::new("pre", "Prefixed")
                .with_extra(json!("meta"))
                .with_matcher(|v| v.as_str().is_some_and(|s| s.starts_with("pre"))),
        ]);
        assert_eq!(
            resolve_extra(&descriptor, &json!("prefab")),
            Some(json!("meta"))
        );
    }

    #[test]
    fn propagation_overwrites_extra_only() {
        let descriptors = [category_descriptor(), FieldDescriptor::text("limit")];
        let mut record = Record::new();
        record.insert("limit".into(), json!(3));
        let mut row = RowState::build(&descriptors, &record);

        propagate_extra(&descriptors[0], &mut row, Some(&json!({"max": 10})));
        let limit = row.field("limit").unwrap();
        assert_eq!(limit.extra, Some(json!({"max": 10})));
        assert_eq!(limit.value, Some(json!(3)));
        assert!(!limit.edited);
    }

    #[test]
    fn undefined_extra_propagates_nothing() {
        let descriptors = [category_descriptor(), FieldDescriptor::text("limit")];
        let mut row = RowState::build(&descriptors, &Record::new());
        propagate_extra(&descriptors[0], &mut row, None);
        assert_eq!(row.field("limit").unwrap().extra, None);
    }

    #[test]
    fn unknown_dependants_are_skipped() {
        let descriptor =
            FieldDescriptor::new("category", FieldKind::Select).with_dependants(["ghost"]);
        let mut row = RowState::build(&[descriptor.clone()], &Record::new());
        propagate_extra(&descriptor, &mut row, Some(&json!(1)));
    }
}
