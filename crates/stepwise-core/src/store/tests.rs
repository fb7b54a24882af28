//! Tests for the form store.

use tempfile::TempDir;

use super::*;
use crate::{
    config::FormConfig,
    error::StepwiseError,
    host::FormEvent,
    models::StepState,
    params::{CreateForm, Id, ListForms, OpenStep, SetStepText, StepTarget, UncompleteStep},
};

/// Helper function to create a test store
async fn create_test_store() -> (TempDir, FormStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = FormStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Helper to create a form with the given titles and return its ID
async fn create_test_form(store: &FormStore, titles: &[&str], confirmation: bool) -> u64 {
    let config = FormConfig {
        confirmation_enabled: confirmation,
        ..FormConfig::new(titles.iter().map(|t| t.to_string()).collect())
    };
    store
        .create_form(&CreateForm {
            name: "Test Form".to_string(),
            config,
        })
        .await
        .expect("Failed to create form")
        .form
        .id
}

#[tokio::test]
async fn test_create_form_opens_first_step() {
    let (_temp_dir, store) = create_test_store().await;

    let outcome = store
        .create_form(&CreateForm {
            name: "Signup".to_string(),
            config: FormConfig::new(vec!["Name".into(), "Email".into()]),
        })
        .await
        .expect("Failed to create form");

    assert!(outcome.applied);
    assert_eq!(
        outcome.events,
        vec![
            FormEvent::ContentCreated(0),
            FormEvent::ContentCreated(1),
            FormEvent::Opening(0),
        ]
    );
    assert_eq!(outcome.form.name, "Signup");
    assert_eq!(outcome.form.steps.len(), 3);
    assert_eq!(outcome.form.active_step, 0);
    assert_eq!(outcome.form.progress, 0);
}

#[tokio::test]
async fn test_create_form_rejects_bad_input() {
    let (_temp_dir, store) = create_test_store().await;

    let empty = store
        .create_form(&CreateForm {
            name: "Empty".to_string(),
            config: FormConfig::default(),
        })
        .await;
    assert!(matches!(empty, Err(StepwiseError::InvalidConfiguration { .. })));

    let unnamed = store
        .create_form(&CreateForm {
            name: "  ".to_string(),
            config: FormConfig::new(vec!["A".into()]),
        })
        .await;
    assert!(matches!(unnamed, Err(StepwiseError::InvalidConfiguration { .. })));

    let forms = store.list_forms(&ListForms::default()).await.unwrap();
    assert!(forms.is_empty());
}

#[tokio::test]
async fn test_locked_step_is_refused_and_state_survives() {
    let (_temp_dir, store) = create_test_store().await;
    let id = create_test_form(&store, &["A", "B", "C"], true).await;

    let refused = store.open_step(&OpenStep { id, index: 2 }).await.unwrap();
    assert!(!refused.applied);
    assert!(refused.events.is_empty());
    assert_eq!(refused.form.active_step, 0);

    store
        .complete_step(&StepTarget { id, index: None })
        .await
        .unwrap();
    let next = store.next_step(&Id { id }).await.unwrap();
    assert!(next.applied);
    assert_eq!(next.events, vec![FormEvent::Opening(1)]);

    // A fresh load sees the persisted state
    let view = store.show_form(&Id { id }).await.unwrap();
    assert_eq!(view.active_step, 1);
    assert_eq!(view.steps[0].state, StepState::CollapsedComplete);
    assert_eq!(view.steps[1].state, StepState::Active);
    assert_eq!(view.steps[2].state, StepState::Locked);
    assert_eq!(view.steps[3].state, StepState::Locked);
}

#[tokio::test]
async fn test_full_walkthrough_and_submit() {
    let (_temp_dir, store) = create_test_store().await;
    let id = create_test_form(&store, &["A", "B"], true).await;

    let early = store.submit_form(&Id { id }).await;
    assert!(matches!(early, Err(StepwiseError::NotReadyToSubmit { id: e }) if e == id));

    for _ in 0..2 {
        store
            .complete_step(&StepTarget { id, index: None })
            .await
            .unwrap();
        store.press_button(&Id { id }).await.unwrap();
    }

    // Opening the confirmation step completes it
    let view = store.show_form(&Id { id }).await.unwrap();
    assert_eq!(view.active_step, 2);
    assert!(view.steps[2].completed);
    assert!(view.ready_to_submit);

    let submitted = store.submit_form(&Id { id }).await.unwrap();
    assert_eq!(submitted.events, vec![FormEvent::Submitted]);
    assert!(submitted.form.submitted);
    assert_eq!(submitted.form.displayed_progress, 3);

    let again = store.submit_form(&Id { id }).await;
    assert!(matches!(again, Err(StepwiseError::SessionSubmitted { .. })));
    let edit = store.previous_step(&Id { id }).await;
    assert!(matches!(edit, Err(StepwiseError::SessionSubmitted { .. })));

    // Submitted forms stay viewable but leave the default listing
    assert!(store.show_form(&Id { id }).await.unwrap().submitted);
    let active = store.list_forms(&ListForms::default()).await.unwrap();
    assert!(active.is_empty());
    let all = store
        .list_forms(&ListForms {
            all: true,
            name_contains: None,
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].submitted);
}

#[tokio::test]
async fn test_press_button_submits_without_confirmation() {
    let (_temp_dir, store) = create_test_store().await;
    let id = create_test_form(&store, &["Only"], false).await;

    store
        .complete_step(&StepTarget { id, index: None })
        .await
        .unwrap();
    let outcome = store.press_button(&Id { id }).await.unwrap();

    assert!(outcome.applied);
    assert_eq!(outcome.events, vec![FormEvent::Submitted]);
    assert!(store.get_form(id).await.unwrap().unwrap().submitted);
}

#[tokio::test]
async fn test_uncomplete_cascades_and_keeps_message() {
    let (_temp_dir, store) = create_test_store().await;
    let id = create_test_form(&store, &["A", "B"], true).await;

    for index in 0..2 {
        store
            .complete_step(&StepTarget {
                id,
                index: Some(index),
            })
            .await
            .unwrap();
    }
    store.open_step(&OpenStep { id, index: 2 }).await.unwrap();

    let outcome = store
        .uncomplete_step(&UncompleteStep {
            id,
            index: Some(0),
            message: Some("Name is required".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(
        outcome.events,
        vec![FormEvent::Uncompleted(2), FormEvent::Uncompleted(0)]
    );

    let view = store.show_form(&Id { id }).await.unwrap();
    assert_eq!(view.steps[0].error.as_deref(), Some("Name is required"));
    assert!(!view.steps[2].completed);
    // The active confirmation step is now locked behind step 0
    assert_eq!(view.steps[2].state, StepState::Locked);

    // Completing clears the message
    store
        .complete_step(&StepTarget { id, index: Some(0) })
        .await
        .unwrap();
    let view = store.show_form(&Id { id }).await.unwrap();
    assert_eq!(view.steps[0].error, None);
}

#[tokio::test]
async fn test_reload_keeps_reopened_confirmation_incomplete() {
    let (_temp_dir, store) = create_test_store().await;
    let id = create_test_form(&store, &["Only"], true).await;

    store
        .complete_step(&StepTarget { id, index: None })
        .await
        .unwrap();
    store.next_step(&Id { id }).await.unwrap();
    store
        .uncomplete_step(&UncompleteStep {
            id,
            index: Some(0),
            message: None,
        })
        .await
        .unwrap();
    let outcome = store
        .complete_step(&StepTarget { id, index: Some(0) })
        .await
        .unwrap();
    assert_eq!(outcome.events, vec![FormEvent::Completed(0)]);

    let record = store.get_form(id).await.unwrap().unwrap();
    assert_eq!(record.snapshot.completed_steps, vec![true, false]);
    assert_eq!(record.snapshot.active_step_index, 1);

    // Reloading for show must not re-open the active confirmation step
    let view = store.show_form(&Id { id }).await.unwrap();
    assert_eq!(view.active_step, 1);
    assert_eq!(view.progress, 1);
    assert!(!view.steps[1].completed);
    assert!(!view.ready_to_submit);

    let listed = store.list_forms(&ListForms::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].completed_steps as usize, view.progress);

    let submit = store.submit_form(&Id { id }).await;
    assert!(matches!(submit, Err(StepwiseError::NotReadyToSubmit { id: e }) if e == id));
    let record = store.get_form(id).await.unwrap().unwrap();
    assert!(!record.submitted);
    assert_eq!(record.snapshot.completed_steps, vec![true, false]);
}

#[tokio::test]
async fn test_step_text_edits_persist() {
    let (_temp_dir, store) = create_test_store().await;
    let id = store
        .create_form(&CreateForm {
            name: "Profile".to_string(),
            config: FormConfig {
                subtitles: Some(vec!["first".into(), "second".into()]),
                ..FormConfig::new(vec!["A".into(), "B".into()])
            },
        })
        .await
        .unwrap()
        .form
        .id;

    let renamed = store
        .set_title(&SetStepText {
            id,
            index: 1,
            text: "Bravo".to_string(),
        })
        .await
        .unwrap();
    assert!(renamed.applied);

    let blank = store
        .set_title(&SetStepText {
            id,
            index: 1,
            text: " ".to_string(),
        })
        .await
        .unwrap();
    assert!(!blank.applied);

    store
        .set_subtitle(&SetStepText {
            id,
            index: 0,
            text: "updated".to_string(),
        })
        .await
        .unwrap();

    let record = store.get_form(id).await.unwrap().unwrap();
    assert_eq!(record.config.titles, vec!["A", "Bravo"]);
    assert_eq!(
        record.config.subtitles,
        Some(vec!["updated".to_string(), "second".to_string()])
    );

    let out_of_range = store
        .set_title(&SetStepText {
            id,
            index: 9,
            text: "X".to_string(),
        })
        .await;
    assert!(matches!(
        out_of_range,
        Err(StepwiseError::IndexOutOfRange { index: 9, len: 3 })
    ));
}

#[tokio::test]
async fn test_missing_form_errors() {
    let (_temp_dir, store) = create_test_store().await;

    assert!(matches!(
        store.show_form(&Id { id: 99 }).await,
        Err(StepwiseError::SessionNotFound { id: 99 })
    ));
    assert!(matches!(
        store.next_step(&Id { id: 99 }).await,
        Err(StepwiseError::SessionNotFound { id: 99 })
    ));
    assert!(matches!(
        store.delete_form(&Id { id: 99 }).await,
        Err(StepwiseError::SessionNotFound { id: 99 })
    ));
}

#[tokio::test]
async fn test_delete_and_filter_by_name() {
    let (_temp_dir, store) = create_test_store().await;
    let first = create_test_form(&store, &["A"], true).await;
    store
        .create_form(&CreateForm {
            name: "Checkout".to_string(),
            config: FormConfig::new(vec!["Cart".into(), "Payment".into()]),
        })
        .await
        .unwrap();

    let filtered = store
        .list_forms(&ListForms {
            all: false,
            name_contains: Some("check".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Checkout");
    assert_eq!(filtered[0].total_steps, 3);

    let deleted = store.delete_form(&Id { id: first }).await.unwrap();
    assert_eq!(deleted.resource.id, first);
    assert_eq!(
        store.list_forms(&ListForms::default()).await.unwrap().len(),
        1
    );
}
