use serde_json::json;

use rowform::{
    DisplayOptions, EditSession, FieldDescriptor, FieldEvent, FieldKind, FieldOption, Notice,
    NotificationSink, Record, SaveCompletion, SessionOptions, display_value,
};

struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&mut self, notice: Notice) {
        println!(
            "[{}] {}: {} ({:?})",
            match notice.kind {
                rowform::NoticeKind::Success => "ok",
                rowform::NoticeKind::Error => "err",
            },
            notice.title,
            notice.message,
            notice.display_duration
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let descriptors = vec![
        FieldDescriptor::text("title").with_label("Title").required(),
        FieldDescriptor::new("category", FieldKind::Select)
            .with_label("Category")
            .with_options(vec![
                FieldOption::new("book", "Book").with_extra(json!({"max_pages": 5000})),
                FieldOption::new("article", "Article").with_extra(json!({"max_pages": 40})),
            ])
            .with_dependants(["pages"]),
        FieldDescriptor::text("pages").with_label("Pages"),
        FieldDescriptor::new("active", FieldKind::Checkbox)
            .with_label("Active")
            .with_default(false),
        FieldDescriptor::new("id", FieldKind::Readonly).with_label("Identifier"),
    ];

    let mut record = Record::new();
    record.insert("title".into(), json!("An Old Title"));
    record.insert("category".into(), json!("book"));
    record.insert("id".into(), json!("rec-0042"));

    let options = SessionOptions::default().with_success_message("Record saved");
    let mut session = EditSession::new(descriptors, options, Box::new(StdoutSink));
    session.open(&record, true)?;

    session.change_field("title", FieldEvent::text("A Better Title"))?;
    session.change_field("category", FieldEvent::value("article"))?;
    println!(
        "pages now carries {:?}",
        session.row().field("pages").and_then(|f| f.extra.clone())
    );

    let status = session.save(&mut |payload: Record, done: SaveCompletion| {
        println!("persisting {}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        done.succeed();
    })?;
    println!("save finished with {status:?}");

    let display = DisplayOptions::default();
    for (descriptor, state) in session.visible_fields() {
        println!(
            "{:<12} {}",
            descriptor.label,
            display_value(descriptor, state, &display)
        );
    }

    println!("anything saved this session: {}", session.close());
    Ok(())
}
