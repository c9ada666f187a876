use std::sync::Once;

use storefront_core::{
    update_list, FieldValue, ListEffect, ListMsg, ListState, Record, RecordData, ViewStatus,
    PRODUCTS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(storefront_logging::initialize_for_tests);
}

fn product(id: &str, nome: &str, preco: f64, descricao: &str) -> Record {
    let mut data = RecordData::new();
    data.insert("nome", FieldValue::Text(nome.to_string()));
    data.insert("preco", FieldValue::Number(preco));
    data.insert("descricao", FieldValue::Text(descricao.to_string()));
    data.insert(
        "imagem",
        FieldValue::Text(format!("https://example.com/{id}.jpg")),
    );
    Record {
        id: id.to_string(),
        data,
    }
}

fn loaded_state(records: Vec<Record>) -> ListState {
    let (state, effects) = update_list(ListState::new(&PRODUCTS), ListMsg::RefreshRequested);
    assert_eq!(effects, vec![ListEffect::LoadCollection]);
    let (state, effects) = update_list(state, ListMsg::CollectionLoaded(records));
    assert!(effects.is_empty());
    state
}

#[test]
fn refresh_sets_loading_and_requests_collection() {
    init_logging();
    let (state, effects) = update_list(ListState::new(&PRODUCTS), ListMsg::RefreshRequested);

    assert_eq!(effects, vec![ListEffect::LoadCollection]);
    assert_eq!(state.view().status, ViewStatus::Loading);
}

#[test]
fn refresh_is_noop_while_fetch_outstanding() {
    init_logging();
    let (state, _) = update_list(ListState::new(&PRODUCTS), ListMsg::RefreshRequested);
    let (state, effects) = update_list(state, ListMsg::RefreshRequested);

    assert!(effects.is_empty());
    assert_eq!(state.view().status, ViewStatus::Loading);
}

#[test]
fn empty_collection_is_empty_not_error() {
    init_logging();
    let state = loaded_state(Vec::new());

    assert_eq!(state.view().status, ViewStatus::Empty);
}

#[test]
fn failed_refresh_keeps_previous_snapshot_visible() {
    init_logging();
    let state = loaded_state(vec![
        product("1", "Caneca", 24.0, "caneca térmica"),
        product("2", "Garrafa", 48.0, "garrafa de inox"),
        product("3", "Copo", 12.0, "copo de vidro"),
    ]);

    let (state, _) = update_list(state, ListMsg::RefreshRequested);
    let (state, effects) = update_list(
        state,
        ListMsg::LoadFailed("failed to load products: network error".to_string()),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.status,
        ViewStatus::Error("failed to load products: network error".to_string())
    );
    assert_eq!(view.rows.len(), 3);
}

#[test]
fn refresh_after_failure_clears_error_on_success() {
    init_logging();
    let state = loaded_state(vec![product("1", "Caneca", 24.0, "caneca")]);
    let (state, _) = update_list(state, ListMsg::RefreshRequested);
    let (state, _) = update_list(state, ListMsg::LoadFailed("boom".to_string()));
    assert_eq!(state.view().status, ViewStatus::Error("boom".to_string()));

    let (state, _) = update_list(state, ListMsg::RefreshRequested);
    assert_eq!(state.view().status, ViewStatus::Loading);

    let (state, _) = update_list(
        state,
        ListMsg::CollectionLoaded(vec![product("1", "Caneca", 24.0, "caneca")]),
    );
    assert_eq!(state.view().status, ViewStatus::Ready);
}

#[test]
fn search_matches_any_field_case_insensitively() {
    init_logging();
    let state = loaded_state(vec![
        product("1", "Caneca Sage Green", 24.0, "caneca térmica pequena"),
        product("2", "Garrafa", 48.5, "garrafa de inox"),
    ]);

    let (state, _) = update_list(state, ListMsg::SearchChanged("SAGE".to_string()));
    let view = state.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].record.id, "1");

    // The numeric field matches by its decimal string.
    let (state, _) = update_list(state, ListMsg::SearchChanged("48.5".to_string()));
    let view = state.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].record.id, "2");

    // A description hit counts as much as a name hit.
    let (state, _) = update_list(state, ListMsg::SearchChanged("inox".to_string()));
    assert_eq!(state.view().rows.len(), 1);

    let (state, _) = update_list(state, ListMsg::SearchChanged(String::new()));
    assert_eq!(state.view().rows.len(), 2);
}

#[test]
fn unmatched_search_reports_no_matches_not_empty() {
    init_logging();
    let state = loaded_state(vec![product("1", "Caneca", 24.0, "caneca")]);
    let (state, _) = update_list(state, ListMsg::SearchChanged("zzz".to_string()));

    let view = state.view();
    assert_eq!(view.status, ViewStatus::Ready);
    assert!(view.rows.is_empty());
    assert!(view.no_matches);
}

#[test]
fn confirmed_deletion_removes_exactly_one_record() {
    init_logging();
    let target = product("2", "Garrafa", 48.0, "garrafa");
    let state = loaded_state(vec![
        product("1", "Caneca", 24.0, "caneca"),
        target.clone(),
        product("3", "Copo", 12.0, "copo"),
    ]);

    let (state, effects) = update_list(state, ListMsg::DeletionRequested(target.clone()));
    assert!(effects.is_empty());
    assert_eq!(state.view().pending_deletion, Some(target));

    let (state, effects) = update_list(state, ListMsg::DeletionConfirmed);
    assert_eq!(
        effects,
        vec![ListEffect::DeleteRecord {
            id: "2".to_string()
        }]
    );
    assert!(state.view().delete_in_flight);
    // Snapshot is untouched until the gateway confirms.
    assert_eq!(state.view().rows.len(), 3);

    let (state, _) = update_list(state, ListMsg::DeletionSucceeded("2".to_string()));
    let view = state.view();
    assert_eq!(view.rows.len(), 2);
    assert!(view.rows.iter().all(|row| row.record.id != "2"));
    assert_eq!(view.pending_deletion, None);
    assert!(!view.delete_in_flight);
}

#[test]
fn failed_deletion_keeps_snapshot_and_clears_target() {
    init_logging();
    let target = product("1", "Caneca", 24.0, "caneca");
    let state = loaded_state(vec![target.clone(), product("2", "Garrafa", 48.0, "garrafa")]);

    let (state, _) = update_list(state, ListMsg::DeletionRequested(target));
    let (state, _) = update_list(state, ListMsg::DeletionConfirmed);
    let (state, _) = update_list(
        state,
        ListMsg::DeletionFailed("failed to delete product, try again".to_string()),
    );

    let view = state.view();
    assert_eq!(view.rows.len(), 2);
    assert!(view.rows.iter().any(|row| row.record.id == "1"));
    assert_eq!(view.pending_deletion, None);
    assert!(!view.delete_in_flight);
    assert_eq!(
        view.status,
        ViewStatus::Error("failed to delete product, try again".to_string())
    );
}

#[test]
fn confirm_without_pending_target_is_noop() {
    init_logging();
    let state = loaded_state(vec![product("1", "Caneca", 24.0, "caneca")]);
    let before = state.clone();

    let (state, effects) = update_list(state, ListMsg::DeletionConfirmed);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn cancel_without_pending_target_is_noop() {
    init_logging();
    let state = loaded_state(vec![product("1", "Caneca", 24.0, "caneca")]);
    let before = state.clone();

    let (state, effects) = update_list(state, ListMsg::DeletionCancelled);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn confirm_is_noop_while_delete_in_flight() {
    init_logging();
    let target = product("1", "Caneca", 24.0, "caneca");
    let state = loaded_state(vec![target.clone()]);
    let (state, _) = update_list(state, ListMsg::DeletionRequested(target));
    let (state, effects) = update_list(state, ListMsg::DeletionConfirmed);
    assert_eq!(effects.len(), 1);

    let (_state, effects) = update_list(state, ListMsg::DeletionConfirmed);
    assert!(effects.is_empty());
}

#[test]
fn navigation_intents_emit_schema_paths() {
    init_logging();
    let state = loaded_state(vec![product("42", "Caneca", 24.0, "caneca")]);

    let (state, effects) = update_list(state, ListMsg::CreateRequested);
    assert_eq!(
        effects,
        vec![ListEffect::Navigate {
            path: "/produtos/cadastro".to_string()
        }]
    );

    let (_state, effects) = update_list(state, ListMsg::EditRequested("42".to_string()));
    assert_eq!(
        effects,
        vec![ListEffect::Navigate {
            path: "/produtos/editar/42".to_string()
        }]
    );
}
