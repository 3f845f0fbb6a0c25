use crate::config::{IdStrategy, RegistryConfig};
use crate::controller::CommitOutcome;
use crate::session::Session;
use cabinet_registry_shared::{
    Choice, Draft, Field, FieldChange, FileSelection, MemberFields, Ministry, Party, Position,
    Prefix, RecordId, RegistryError, SelectedFile,
};
use std::sync::Once;
use tracing::debug;

static INIT: Once = Once::new();

fn setup_session() -> Session {
    INIT.call_once(|| {
        // another test binary may have got there first, that's fine
        let _ = crate::logging::init(true);
    });
    Session::new(RegistryConfig {
        id_strategy: IdStrategy::Counter,
        ..Default::default()
    })
    .expect("Failed to start session")
}

/// A draft with every required field filled in and no photo
pub(crate) fn filled_draft() -> Draft {
    Draft {
        prefix: Prefix::Mr.label().to_string(),
        first_name: "Somchai".to_string(),
        last_name: "Jaidee".to_string(),
        attachment: FileSelection::none(),
        work_history: "Provincial governor, 2010-2020".to_string(),
        primary_role: Position::Minister.label().to_string(),
        secondary_role: String::new(),
        department: Ministry::Interior.label().to_string(),
        affiliation: Party::Independent.label().to_string(),
    }
}

pub(crate) fn member(first_name: &str) -> MemberFields {
    MemberFields {
        prefix: Prefix::Mr,
        first_name: first_name.to_string(),
        last_name: "Jaidee".to_string(),
        work_history: "Provincial governor, 2010-2020".to_string(),
        primary_role: Position::Minister,
        secondary_role: None,
        department: Ministry::Interior,
        affiliation: Party::Independent,
    }
}

/// A small PNG-typed file whose contents are its own name
pub(crate) fn photo(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/png", name.as_bytes().to_vec())
}

fn fill(session: &mut Session, draft: Draft) {
    session.on_field_change(FieldChange::Prefix(draft.prefix));
    session.on_field_change(FieldChange::FirstName(draft.first_name));
    session.on_field_change(FieldChange::LastName(draft.last_name));
    session.on_field_change(FieldChange::Attachment(draft.attachment));
    session.on_field_change(FieldChange::WorkHistory(draft.work_history));
    session.on_field_change(FieldChange::PrimaryRole(draft.primary_role));
    session.on_field_change(FieldChange::SecondaryRole(draft.secondary_role));
    session.on_field_change(FieldChange::Department(draft.department));
    session.on_field_change(FieldChange::Affiliation(draft.affiliation));
}

#[test]
fn test_create_edit_delete_scenario() {
    let mut session = setup_session();
    assert!(session.get_records().is_empty());

    let mut draft = filled_draft();
    draft.attachment = FileSelection::single(photo("portrait.png"));
    fill(&mut session, draft);

    let outcome = session.on_submit().expect("Failed to create record");
    let CommitOutcome::Created(id) = outcome else {
        panic!("expected a create, got {:?}", outcome);
    };
    assert_eq!(session.get_records().len(), 1);
    assert!(session.get_draft().is_empty());
    let original = session.get_records()[0].attachment.clone();
    assert!(original.is_some());

    // edit the last name, leave the photo alone
    assert!(session.on_edit_click(id));
    assert_eq!(session.editing_target(), Some(id));
    assert!(session.get_draft().attachment.is_empty());
    session.on_field_change(FieldChange::LastName("Z".to_string()));
    let outcome = session.on_submit().expect("Failed to update record");
    assert_eq!(outcome, CommitOutcome::Updated(id));

    let records = session.get_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].fields.last_name, "Z");
    assert_eq!(records[0].attachment, original);
    assert!(!session.is_editing());

    assert!(session.on_delete_click(id).is_some());
    assert!(session.get_records().is_empty());
    debug!("scenario complete");
}

#[test]
fn test_missing_fields_never_touch_store() {
    let mut session = setup_session();
    fill(&mut session, filled_draft());
    session.on_submit().unwrap();

    session.on_field_change(FieldChange::FirstName("Only a name".to_string()));
    let errors = match session.on_submit() {
        Err(RegistryError::ValidationError(errors)) => errors,
        other => panic!("expected validation failure, got {:?}", other),
    };
    for field in [
        Field::Prefix,
        Field::LastName,
        Field::WorkHistory,
        Field::PrimaryRole,
        Field::Department,
        Field::Affiliation,
    ] {
        assert!(errors.contains(field), "missing error for {field}");
    }
    assert_eq!(session.get_errors(), &errors);
    assert_eq!(session.get_records().len(), 1);
    assert_eq!(session.get_draft().first_name, "Only a name");
}

#[test]
fn test_failed_edit_submit_stays_in_edit_mode() {
    let mut session = setup_session();
    fill(&mut session, filled_draft());
    let CommitOutcome::Created(id) = session.on_submit().unwrap() else {
        panic!("expected a create");
    };

    session.on_edit_click(id);
    session.on_field_change(FieldChange::WorkHistory(String::new()));
    assert!(session.on_submit().is_err());
    assert_eq!(session.editing_target(), Some(id));
    assert!(session.get_errors().contains(Field::WorkHistory));

    session.on_field_change(FieldChange::WorkHistory("Fixed".to_string()));
    assert_eq!(session.on_submit().unwrap(), CommitOutcome::Updated(id));
    assert_eq!(session.get_records()[0].fields.work_history, "Fixed");
    assert!(session.get_errors().is_empty());
}

#[test]
fn test_edit_with_new_photo_replaces_and_releases_preview() {
    let mut session = setup_session();
    let mut draft = filled_draft();
    draft.attachment = FileSelection::single(photo("old.png"));
    fill(&mut session, draft);
    let CommitOutcome::Created(id) = session.on_submit().unwrap() else {
        panic!("expected a create");
    };

    let old_uri = session
        .preview(id)
        .unwrap()
        .expect("record should have a preview")
        .to_string();
    assert_eq!(session.live_previews(), 1);

    session.on_edit_click(id);
    session.on_field_change(FieldChange::Attachment(FileSelection::single(photo(
        "new.png",
    ))));
    session.on_submit().unwrap();

    let stored = session.get_records()[0].attachment.clone().unwrap();
    assert_eq!(stored.filename, "new.png");
    // the old photo's handle went with it
    assert_eq!(session.live_previews(), 0);
    let new_uri = session.preview(id).unwrap().unwrap().to_string();
    assert_ne!(old_uri, new_uri);

    session.on_delete_click(id);
    assert_eq!(session.live_previews(), 0);
}

#[test]
fn test_keeping_photo_keeps_preview() {
    let mut session = setup_session();
    let mut draft = filled_draft();
    draft.attachment = FileSelection::single(photo("kept.png"));
    fill(&mut session, draft);
    let CommitOutcome::Created(id) = session.on_submit().unwrap() else {
        panic!("expected a create");
    };
    session.preview(id).unwrap();

    session.on_edit_click(id);
    session.on_submit().unwrap();
    assert_eq!(session.live_previews(), 1);
}

#[test]
fn test_deleting_edited_record_turns_next_submit_into_create() {
    let mut session = setup_session();
    fill(&mut session, filled_draft());
    let CommitOutcome::Created(id) = session.on_submit().unwrap() else {
        panic!("expected a create");
    };

    session.on_edit_click(id);
    session.on_delete_click(id);
    assert!(!session.is_editing());
    assert!(session.get_draft().is_empty());

    fill(&mut session, filled_draft());
    let outcome = session.on_submit().unwrap();
    assert_eq!(outcome, CommitOutcome::Created(RecordId(2)));
    assert_eq!(session.get_records().len(), 1);
}

#[test]
fn test_cancel_edit() {
    let mut session = setup_session();
    fill(&mut session, filled_draft());
    session.on_submit().unwrap();
    let id = session.get_records()[0].id;

    session.on_edit_click(id);
    session.on_field_change(FieldChange::FirstName("Changed".to_string()));
    session.on_cancel_edit();

    assert!(!session.is_editing());
    assert!(session.get_draft().is_empty());
    assert_eq!(session.get_records()[0].fields.first_name, "Somchai");
}

#[test]
fn test_edited_records_keep_their_position() {
    let mut session = setup_session();
    for name in ["First", "Second", "Third"] {
        let mut draft = filled_draft();
        draft.first_name = name.to_string();
        fill(&mut session, draft);
        session.on_submit().unwrap();
    }
    let middle = session.get_records()[1].id;

    session.on_edit_click(middle);
    session.on_field_change(FieldChange::FirstName("Middle".to_string()));
    session.on_submit().unwrap();

    let names: Vec<&str> = session
        .get_records()
        .iter()
        .map(|record| record.fields.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Middle", "Third"]);
}

#[test]
fn test_view_snapshot() {
    let mut session = setup_session();
    let mut draft = filled_draft();
    draft.attachment = FileSelection::single(photo("a.png"));
    draft.secondary_role = Position::DeputyPrimeMinister.label().to_string();
    fill(&mut session, draft);
    session.on_submit().unwrap();
    fill(&mut session, filled_draft());
    session.on_submit().unwrap();

    let view = session.view();
    assert_eq!(view.editing, None);
    assert_eq!(view.records.len(), 2);
    assert_eq!(view.records[0].full_name, "Somchai Jaidee");
    assert_eq!(view.records[0].prefix, "นาย");
    assert_eq!(
        view.records[0].secondary_role.as_deref(),
        Some("รองนายกรัฐมนตรี")
    );
    assert!(view.records[0]
        .preview
        .as_deref()
        .is_some_and(|uri| uri.starts_with("data:image/png;base64,")));
    assert!(view.records[1].preview.is_none());
    assert_eq!(session.live_previews(), 1);

    session.on_edit_click(view.records[1].id);
    let view = session.view();
    assert_eq!(view.editing, Some(view.records[1].id));
    assert_eq!(view.draft.first_name, "Somchai");
    assert!(view.draft.attachment.is_empty());

    let res = serde_json::to_value(&view).expect("Failed to serialize view");
    assert_eq!(res["draft"]["primaryRole"], "รัฐมนตรีว่าการ");
    assert_eq!(res["records"][1]["department"], "กระทรวงมหาดไทย");
}

#[test]
fn test_english_messages() {
    let mut session = Session::new(
        RegistryConfig::from_json(r#"{"locale": "english"}"#).expect("Failed to parse config"),
    )
    .expect("Failed to start session");
    let res = session.on_submit();
    assert!(res.is_err());
    assert_eq!(
        session.get_errors().get(Field::Affiliation),
        Some("Please select a party.")
    );
}

#[test]
fn test_timestamp_ids_are_unique() {
    let mut session = Session::default();
    for _ in 0..5 {
        fill(&mut session, filled_draft());
        session.on_submit().unwrap();
    }
    let ids: Vec<RecordId> = session.get_records().iter().map(|r| r.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_untyped_single_file_is_accepted_by_default() {
    let mut session = Session::new(RegistryConfig::default()).expect("Failed to start session");
    let mut draft = filled_draft();
    draft.attachment = FileSelection::single(SelectedFile::new("scan.heic", "", vec![1, 2, 3]));
    fill(&mut session, draft);

    let res = session.on_submit();
    assert!(
        matches!(res, Ok(CommitOutcome::Created(_))),
        "single file rejected: {:?}",
        res
    );
    let stored = session.get_records()[0].attachment.clone().unwrap();
    assert_eq!(stored.filename, "scan.heic");
    assert_eq!(stored.contents().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_fixing_a_field_clears_its_message() {
    let mut session = setup_session();
    assert!(session.on_submit().is_err());
    assert_eq!(
        session.get_errors().get(Field::Prefix),
        Some("กรุณาเลือกคำนำหน้า")
    );

    session.on_field_change(FieldChange::Prefix("นาย".to_string()));
    assert!(!session.get_errors().contains(Field::Prefix));
    assert!(session.get_errors().contains(Field::FirstName));

    // the same goes for events coming in over the wire
    session
        .dispatch_json(r#"{"action": "fieldChange", "change": {"field": "firstName", "value": "Somchai"}}"#)
        .unwrap();
    assert!(!session.get_errors().contains(Field::FirstName));
    assert_eq!(session.view().errors, session.get_errors().clone());
}

#[test]
fn test_invalid_config_is_refused() {
    let res = Session::new(RegistryConfig {
        max_attachment_bytes: 0,
        ..Default::default()
    });
    assert!(matches!(res, Err(RegistryError::Configuration(_))));

    let res = Session::new(RegistryConfig {
        accepted_content_prefix: Some(String::new()),
        ..Default::default()
    });
    assert!(matches!(res, Err(RegistryError::Configuration(_))));
}
