use todoboard_core::{
    Age, DispatchOutcome, Draft, DraftValidationError, FormError, FormSession, FormTarget, Record,
    TodoBoard,
};

#[test]
fn open_add_resets_draft_and_submit_appends() {
    let mut board = TodoBoard::new();
    let mut form = FormSession::new();
    form.set_name("stale");

    form.open_add();
    assert!(form.is_open());
    assert_eq!(form.title(), "Add New User");
    assert_eq!(form.draft(), &Draft::default());

    form.set_name("Tom");
    form.set_age("9");
    let outcome = form.submit(&mut board).unwrap();

    assert_eq!(outcome, DispatchOutcome::Added(6));
    assert!(!form.is_open());
    assert_eq!(
        board.records().last(),
        Some(&Record::new(6, "Tom", Age::Years(9)))
    );
}

#[test]
fn open_edit_prefills_and_submit_updates_in_place() {
    let mut board = TodoBoard::new();
    let mut form = FormSession::new();
    let target = board.records()[2].clone();

    form.open_edit(&target);
    assert_eq!(form.title(), "Edit User");
    assert_eq!(form.target(), FormTarget::Existing(5));
    assert_eq!(form.draft(), &Draft::new("Gapizuer", "17"));

    form.set_name("Gapi");
    form.set_age("18");
    assert_eq!(form.submit(&mut board), Ok(DispatchOutcome::Updated(5)));
    assert_eq!(board.records()[2], Record::new(5, "Gapi", Age::Years(18)));
    assert_eq!(board.records().len(), 3);
}

#[test]
fn blank_submit_keeps_form_open_and_store_untouched() {
    let mut board = TodoBoard::new();
    let before = board.store().clone();
    let mut form = FormSession::new();

    form.open_add();
    form.set_name("   ");
    form.set_age("9");
    let err = form.submit(&mut board).unwrap_err();

    assert_eq!(err, FormError::Invalid(DraftValidationError::BlankName));
    assert!(form.is_open());
    assert_eq!(form.last_error(), Some(DraftValidationError::BlankName));
    assert_eq!(board.store(), &before);

    form.set_name("Tom");
    form.submit(&mut board).unwrap();
    assert_eq!(form.last_error(), None);
    assert_eq!(board.records().len(), 4);
}

#[test]
fn submit_on_closed_form_is_rejected() {
    let mut board = TodoBoard::new();
    let mut form = FormSession::new();

    assert_eq!(form.submit(&mut board), Err(FormError::NotOpen));
}

#[test]
fn close_keeps_draft_without_committing() {
    let mut board = TodoBoard::new();
    let mut form = FormSession::new();

    form.open_add();
    form.set_name("Tom");
    form.close();

    assert_eq!(form.draft().name, "Tom");
    assert_eq!(board.records().len(), 3);
    assert_eq!(form.submit(&mut board), Err(FormError::NotOpen));
}

#[test]
fn edit_of_removed_record_is_silent_noop() {
    let mut board = TodoBoard::new();
    let mut form = FormSession::new();
    let target = board.records()[0].clone();

    form.open_edit(&target);
    board.remove(target.id);
    let outcome = form.submit(&mut board).unwrap();

    assert_eq!(outcome, DispatchOutcome::NoMatch(1));
    assert_eq!(board.records().len(), 2);
}

#[test]
fn projections_follow_store_order_and_status_text() {
    let mut board = TodoBoard::new();
    board.toggle_complete(4);

    let rows = board.table_rows();
    assert_eq!(
        rows.iter().map(|row| row.status).collect::<Vec<_>>(),
        vec!["active", "active", "inactive"]
    );
    assert_eq!(rows[2].name, "Gapizuer");

    let items = board.panel_items();
    assert_eq!(items[0].primary, "Name: Ali");
    assert_eq!(items[0].secondary, "Status: active, Age: 12");
    assert_eq!(items[2].secondary, "Status: inactive, Age: 17");
}

#[test]
fn panel_renders_nan_age() {
    let mut board = TodoBoard::new();
    board.submit_add(Draft::new("Tom", "abc")).unwrap();

    let last = board.panel_items().pop().unwrap();
    assert_eq!(last.secondary, "Status: inactive, Age: NaN");
}

#[test]
fn panel_visibility_toggles() {
    let mut board = TodoBoard::new();
    assert!(!board.panel_open());
    board.open_panel();
    assert!(board.panel_open());
    board.close_panel();
    assert!(!board.panel_open());
}
