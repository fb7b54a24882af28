//! Command definitions and their handlers.
//!
//! Every command has a clap argument struct that converts into the matching
//! interface-agnostic parameter type from [`stepwise_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → FormStore → Display → Renderer
//! ```
//!
//! Clap attributes and help text stay here; the core never sees them.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use stepwise_core::{
    params::{CreateForm, Id, ListForms, OpenStep, SetStepText, StepTarget, UncompleteStep},
    FormConfig, FormStore, DEFAULT_CONFIRMATION_TITLE,
};

use crate::renderer::TerminalRenderer;

/// Create a new form
///
/// Steps are given in order. Subtitles, when used, must be given once per
/// step in the same order.
#[derive(Args)]
pub struct CreateFormArgs {
    /// Name of the form
    pub name: String,
    /// Titles of the steps, in order
    #[arg(required = true)]
    pub titles: Vec<String>,
    /// Subtitle of a step; repeat once per step
    #[arg(long = "subtitle")]
    pub subtitles: Vec<String>,
    /// Do not append a confirmation step
    #[arg(long)]
    pub no_confirmation: bool,
    /// Title of the confirmation step
    #[arg(long)]
    pub confirmation_title: Option<String>,
    /// Hide the inline button of the last step
    #[arg(long)]
    pub hide_last_next_button: bool,
    /// Hide the previous/next navigation bar
    #[arg(long)]
    pub hide_navigation: bool,
}

impl From<CreateFormArgs> for CreateForm {
    fn from(val: CreateFormArgs) -> Self {
        let subtitles = (!val.subtitles.is_empty()).then_some(val.subtitles);
        CreateForm {
            name: val.name,
            config: FormConfig {
                titles: val.titles,
                subtitles,
                confirmation_enabled: !val.no_confirmation,
                confirmation_title: val
                    .confirmation_title
                    .unwrap_or_else(|| DEFAULT_CONFIRMATION_TITLE.to_string()),
                display_bottom_navigation: !val.hide_navigation,
                show_last_step_next_button: !val.hide_last_next_button,
            },
        }
    }
}

/// List forms
///
/// Submitted forms are hidden unless --all is given.
#[derive(Args)]
pub struct ListFormsArgs {
    /// Include submitted forms
    #[arg(short, long)]
    pub all: bool,
    /// Only forms whose name contains this text
    #[arg(short, long)]
    pub name: Option<String>,
}

impl From<ListFormsArgs> for ListForms {
    fn from(val: ListFormsArgs) -> Self {
        ListForms {
            all: val.all,
            name_contains: val.name,
        }
    }
}

/// Identifies a single form
#[derive(Args)]
pub struct FormIdArgs {
    /// ID of the form
    pub id: u64,
}

impl From<FormIdArgs> for Id {
    fn from(val: FormIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum FormCommands {
    /// Create a new form and open its first step
    #[command(alias = "c")]
    Create(CreateFormArgs),
    /// List forms
    #[command(aliases = ["l", "ls"])]
    List(ListFormsArgs),
    /// Show a form with the state of every step
    #[command(alias = "s")]
    Show(FormIdArgs),
    /// Delete a form permanently
    #[command(aliases = ["d", "rm"])]
    Delete(FormIdArgs),
    /// Submit a form whose final step is open and completed
    Submit(FormIdArgs),
}

/// Open a step
///
/// A step can be opened once every step before it is completed. Opening the
/// active step again only works after it has been completed.
#[derive(Args)]
pub struct OpenStepArgs {
    /// ID of the form
    pub id: u64,
    /// Index of the step to open (0-based)
    pub index: usize,
}

impl From<OpenStepArgs> for OpenStep {
    fn from(val: OpenStepArgs) -> Self {
        OpenStep {
            id: val.id,
            index: val.index,
        }
    }
}

/// Targets one step of a form, the active step by default
#[derive(Args)]
pub struct StepTargetArgs {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based); defaults to the active step
    #[arg(short, long)]
    pub index: Option<usize>,
}

impl From<StepTargetArgs> for StepTarget {
    fn from(val: StepTargetArgs) -> Self {
        StepTarget {
            id: val.id,
            index: val.index,
        }
    }
}

/// Mark a step as not completed
///
/// Steps after it become locked again, and a completed confirmation step is
/// invalidated.
#[derive(Args)]
pub struct UncompleteStepArgs {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based); defaults to the active step
    #[arg(short, long)]
    pub index: Option<usize>,
    /// Message explaining what needs fixing
    #[arg(short, long)]
    pub message: Option<String>,
}

impl From<UncompleteStepArgs> for UncompleteStep {
    fn from(val: UncompleteStepArgs) -> Self {
        UncompleteStep {
            id: val.id,
            index: val.index,
            message: val.message,
        }
    }
}

/// Replace the text shown for a step
#[derive(Args)]
pub struct SetStepTextArgs {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based)
    pub index: usize,
    /// New text
    pub text: String,
}

impl From<SetStepTextArgs> for SetStepText {
    fn from(val: SetStepTextArgs) -> Self {
        SetStepText {
            id: val.id,
            index: val.index,
            text: val.text,
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Open a step
    #[command(alias = "o")]
    Open(OpenStepArgs),
    /// Open the step after the active one
    #[command(alias = "n")]
    Next(FormIdArgs),
    /// Open the step before the active one
    #[command(aliases = ["p", "previous"])]
    Prev(FormIdArgs),
    /// Mark a step as completed
    #[command(alias = "c")]
    Complete(StepTargetArgs),
    /// Mark a step as not completed
    #[command(alias = "u")]
    Uncomplete(UncompleteStepArgs),
    /// Press the button of the active step (continue, submit or confirm)
    Press(FormIdArgs),
    /// Change the title of a step
    Title(SetStepTextArgs),
    /// Change the subtitle of a step
    Subtitle(SetStepTextArgs),
}

/// Runs commands against a form store and renders the results.
pub struct Cli {
    store: FormStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: FormStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_form_command(&self, command: FormCommands) -> Result<()> {
        match command {
            FormCommands::Create(args) => {
                let outcome = self
                    .store
                    .create_form(&args.into())
                    .await
                    .context("Failed to create form")?;
                self.render(outcome)
            }
            FormCommands::List(args) => self.list_forms(&args.into()).await,
            FormCommands::Show(args) => {
                let view = self
                    .store
                    .show_form(&args.into())
                    .await
                    .context("Failed to show form")?;
                self.render(view)
            }
            FormCommands::Delete(args) => {
                let deleted = self
                    .store
                    .delete_form(&args.into())
                    .await
                    .context("Failed to delete form")?;
                self.render(deleted)
            }
            FormCommands::Submit(args) => {
                let outcome = self
                    .store
                    .submit_form(&args.into())
                    .await
                    .context("Failed to submit form")?;
                self.render(outcome)
            }
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        let outcome = match command {
            StepCommands::Open(args) => self.store.open_step(&args.into()).await,
            StepCommands::Next(args) => self.store.next_step(&args.into()).await,
            StepCommands::Prev(args) => self.store.previous_step(&args.into()).await,
            StepCommands::Complete(args) => self.store.complete_step(&args.into()).await,
            StepCommands::Uncomplete(args) => self.store.uncomplete_step(&args.into()).await,
            StepCommands::Press(args) => self.store.press_button(&args.into()).await,
            StepCommands::Title(args) => self.store.set_title(&args.into()).await,
            StepCommands::Subtitle(args) => self.store.set_subtitle(&args.into()).await,
        }
        .context("Step command failed")?;

        debug!(
            "{} (applied: {}, {} events)",
            outcome.action,
            outcome.applied,
            outcome.events.len()
        );
        self.render(outcome)
    }

    pub async fn list_forms(&self, params: &ListForms) -> Result<()> {
        let forms = self
            .store
            .list_forms(params)
            .await
            .context("Failed to list forms")?;
        self.render(forms)
    }

    fn render(&self, output: impl Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }
}
