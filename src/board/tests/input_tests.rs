//! Unit tests for the project input form.

use crate::board::alert::{INVALID_INPUT_MESSAGE, MockUserAlert, UserAlert};
use crate::board::board_document;
use crate::board::config::{BoardConfig, ConfigError, FormRules};
use crate::board::error::BoardError;
use crate::board::input::{ProjectInputForm, SubmitOutcome};
use crate::board::templates::BoardTemplates;
use crate::board::validation::FormFields;
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::ProjectId,
    ports::{MockProjectRepository, ProjectRepositoryError},
    services::{InMemoryProjectStore, ProjectStore},
};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

type Form = ProjectInputForm<InMemoryProjectRepository, DefaultClock>;

fn form_with(
    store: &Arc<InMemoryProjectStore>,
    alert: Arc<dyn UserAlert>,
) -> Result<Form, BoardError> {
    let config = BoardConfig::default();
    let document = board_document(&config).into_shared();
    ProjectInputForm::mount(
        Arc::clone(store),
        &document,
        Arc::new(BoardTemplates::new()?),
        alert,
        &config,
    )
}

fn silent_alert() -> Arc<dyn UserAlert> {
    let mut alert = MockUserAlert::new();
    alert.expect_alert().never();
    Arc::new(alert)
}

#[rstest]
fn valid_submission_adds_project_and_clears_fields() -> eyre::Result<()> {
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let mut form = form_with(&store, silent_alert())?;
    form.fill("Write docs", "Describe every module", "2");

    let outcome = form.submit()?;

    ensure!(outcome == SubmitOutcome::Added(ProjectId::FIRST));
    ensure!(form.fields() == &FormFields::default());
    let snapshot = store.snapshot()?;
    let record = snapshot.first().ok_or_else(|| eyre::eyre!("missing record"))?;
    ensure!(record.title() == "Write docs");
    ensure!(record.people().value() == 2);
    Ok(())
}

#[rstest]
fn invalid_submission_alerts_once_and_keeps_fields() -> eyre::Result<()> {
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let mut alert = MockUserAlert::new();
    alert
        .expect_alert()
        .withf(|message| message.to_string() == INVALID_INPUT_MESSAGE)
        .times(1)
        .return_const(());
    let mut form = form_with(&store, Arc::new(alert))?;
    form.fill("Hi", "short", "7");

    let SubmitOutcome::Rejected(errors) = form.submit()? else {
        bail!("expected rejection");
    };

    ensure!(!errors.is_empty());
    ensure!(form.fields().title == "Hi");
    ensure!(store.is_empty()?);
    Ok(())
}

#[rstest]
fn form_is_mounted_first_with_configured_id() -> eyre::Result<()> {
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let form = form_with(&store, silent_alert())?;

    ensure!(form.element().tag() == "form");
    ensure!(form.element().id() == Some("user-input"));
    ensure!(form.html().contains(r#"<form id="user-input">"#));
    Ok(())
}

#[rstest]
fn missing_input_template_is_fatal() -> eyre::Result<()> {
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let config = BoardConfig {
        input_template_id: "absent".to_owned(),
        ..BoardConfig::default()
    };
    let document = board_document(&BoardConfig::default()).into_shared();
    let result = Form::mount(
        store,
        &document,
        Arc::new(BoardTemplates::new()?),
        silent_alert(),
        &config,
    );
    match result {
        Err(BoardError::MissingTemplate(id)) if id == "absent" => Ok(()),
        Err(other) => bail!("expected missing template, got {other:?}"),
        Ok(_) => bail!("expected missing template, form mounted"),
    }
}

#[rstest]
fn people_limits_beyond_project_range_fail_mount() -> eyre::Result<()> {
    let store = Arc::new(InMemoryProjectStore::in_memory());
    let config = BoardConfig {
        form: FormRules {
            people_max: 9,
            ..FormRules::default()
        },
        ..BoardConfig::default()
    };
    let document = board_document(&config).into_shared();
    let result = Form::mount(
        Arc::clone(&store),
        &document,
        Arc::new(BoardTemplates::new()?),
        silent_alert(),
        &config,
    );
    match result {
        Err(BoardError::Config(ConfigError::PeopleLimits { min: 1, max: 9 })) => {}
        Err(other) => bail!("expected people limits error, got {other:?}"),
        Ok(_) => bail!("expected people limits error, form mounted"),
    }
    ensure!(store.is_empty()?);
    Ok(())
}

#[rstest]
fn failed_insert_keeps_typed_fields() -> eyre::Result<()> {
    let mut repository = MockProjectRepository::new();
    repository
        .expect_append()
        .times(1)
        .returning(|_| Err(ProjectRepositoryError::persistence(std::io::Error::other("full"))));
    let store = Arc::new(ProjectStore::new(Arc::new(repository), Arc::new(DefaultClock)));
    let config = BoardConfig::default();
    let document = board_document(&config).into_shared();
    let mut form = ProjectInputForm::mount(
        store,
        &document,
        Arc::new(BoardTemplates::new()?),
        silent_alert(),
        &config,
    )?;
    form.fill("Big team", "Needs several people", "4");

    ensure!(matches!(form.submit(), Err(BoardError::Store(_))));
    ensure!(form.fields().title == "Big team");
    ensure!(form.fields().people == "4");
    Ok(())
}
