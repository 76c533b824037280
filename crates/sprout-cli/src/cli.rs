//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into the framework-free
//! parameter types of `sprout_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ProjectManager
//! ```
//!
//! Plant types and sort keys are parsed by clap as [`ValueEnum`]s; the core
//! validates everything else, so a missing required field is reported
//! together with every other missing one.

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use jiff::civil::Date;
use sprout_core::{
    display::{DeleteResult, PlantTypes, ProjectList, UpdateResult},
    models::parse_date,
    params::{CreateProject, EditProject, Id, ListProjects},
    CreateResult, PlantType, ProjectId, ProjectManager, SortKey,
};

use crate::renderer::TerminalRenderer;

/// Plant types as accepted on the command line
///
/// Accented labels are accepted as aliases, so both `pimentao` and `pimentão`
/// select the same type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlantTypeArg {
    Alface,
    Tomate,
    #[value(alias = "pimentão")]
    Pimentao,
    #[value(alias = "hortelã")]
    Hortela,
    #[value(alias = "ora-pró-nobis")]
    OraProNobis,
    Cenoura,
    #[value(alias = "brócolis")]
    Brocolis,
}

impl From<PlantTypeArg> for PlantType {
    fn from(val: PlantTypeArg) -> Self {
        match val {
            PlantTypeArg::Alface => PlantType::Alface,
            PlantTypeArg::Tomate => PlantType::Tomate,
            PlantTypeArg::Pimentao => PlantType::Pimentao,
            PlantTypeArg::Hortela => PlantType::Hortela,
            PlantTypeArg::OraProNobis => PlantType::OraProNobis,
            PlantTypeArg::Cenoura => PlantType::Cenoura,
            PlantTypeArg::Brocolis => PlantType::Brocolis,
        }
    }
}

/// Sort keys as accepted on the command line
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    /// Alphabetical by project name
    #[default]
    Name,
    /// Oldest start date first
    Date,
    /// Alphabetical by plant type
    PlantType,
}

impl From<SortKeyArg> for SortKey {
    fn from(val: SortKeyArg) -> Self {
        match val {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Date => SortKey::Date,
            SortKeyArg::PlantType => SortKey::PlantType,
        }
    }
}

impl std::fmt::Display for SortKeyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKeyArg::Name => write!(f, "name"),
            SortKeyArg::Date => write!(f, "date"),
            SortKeyArg::PlantType => write!(f, "plant-type"),
        }
    }
}

fn parse_start_date(raw: &str) -> std::result::Result<Date, String> {
    parse_date(raw.trim())
}

/// List projects
///
/// Projects are matched case-insensitively against the search keyword in
/// their name and description, then narrowed to one plant type if given.
/// Descriptions longer than 100 characters are shortened unless expanded.
#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Keyword matched against name and description
    #[arg(long)]
    pub search: Option<String>,
    /// Only show projects growing this plant type
    #[arg(long, value_enum)]
    pub plant_type: Option<PlantTypeArg>,
    /// Sort order
    #[arg(long, value_enum, default_value_t = SortKeyArg::Name)]
    pub sort: SortKeyArg,
    /// Show the full description of this project
    #[arg(long, value_name = "ID")]
    pub expand: Option<String>,
}

impl From<ListArgs> for ListProjects {
    fn from(val: ListArgs) -> Self {
        ListProjects {
            search: val.search,
            plant_type: val.plant_type.map(Into::into),
            sort: val.sort.into(),
            expand: val.expand.map(ProjectId::from),
        }
    }
}

/// Show one project
///
/// The position refers to the list produced by the same view flags, so
/// `sprout show 2 --sort date` shows the second project by start date.
#[derive(Args)]
pub struct ShowArgs {
    /// 1-based position in the list
    pub position: usize,
    #[command(flatten)]
    pub view: ListArgs,
}

/// Create a new project
///
/// Plant type and start date are required by the store; leaving them out
/// reports every missing field without contacting it.
#[derive(Args)]
pub struct AddArgs {
    /// Name of the school or garden running the project
    pub name: String,
    /// What the project grows
    #[arg(short, long, value_enum)]
    pub plant_type: Option<PlantTypeArg>,
    /// Day the project started (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_start_date)]
    pub start_date: Option<Date>,
    /// Free-form description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddArgs> for CreateProject {
    fn from(val: AddArgs) -> Self {
        CreateProject {
            name: val.name,
            description: val.description,
            plant_type: val.plant_type.map(Into::into),
            start_date: val.start_date,
        }
    }
}

/// Change fields of an existing project
///
/// Only the given fields change; at least one is required.
#[derive(Args)]
pub struct EditArgs {
    /// ID of the project to edit
    pub id: String,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New plant type
    #[arg(short, long, value_enum)]
    pub plant_type: Option<PlantTypeArg>,
    /// New start date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_start_date)]
    pub start_date: Option<Date>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<EditArgs> for EditProject {
    fn from(val: EditArgs) -> Self {
        EditProject {
            id: ProjectId::from(val.id),
            name: val.name,
            description: val.description,
            plant_type: val.plant_type.map(Into::into),
            start_date: val.start_date,
        }
    }
}

/// Delete a project
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the project to delete
    pub id: String,
}

impl From<DeleteArgs> for Id {
    fn from(val: DeleteArgs) -> Self {
        Id {
            id: ProjectId::from(val.id),
        }
    }
}

/// Names of the fields an edit touches, for the update summary.
fn changed_fields(params: &EditProject) -> Vec<String> {
    [
        ("name", params.name.is_some()),
        ("description", params.description.is_some()),
        ("plant type", params.plant_type.is_some()),
        ("start date", params.start_date.is_some()),
    ]
    .into_iter()
    .filter(|(_, changed)| *changed)
    .map(|(field, _)| format!("Changed {field}"))
    .collect()
}

/// Runs one-shot commands against a loaded manager.
pub struct Cli {
    manager: ProjectManager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: ProjectManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    pub async fn list(&self, params: &ListProjects) -> Result<()> {
        self.manager
            .list(params)
            .await
            .context("Failed to list projects")?;
        let snapshot = self.manager.snapshot().await;
        self.renderer.render(
            &ProjectList::with_selection(&snapshot.view, &snapshot.selection).to_string(),
        )
    }

    pub async fn show(&self, position: usize, params: &ListProjects) -> Result<()> {
        self.manager
            .list(params)
            .await
            .context("Failed to list projects")?;
        let index = position
            .checked_sub(1)
            .ok_or_else(|| anyhow!("Position must be 1 or greater"))?;
        let project = self
            .manager
            .select_at(index)
            .await
            .ok_or_else(|| anyhow!("No project at position {position}"))?;
        self.renderer.render(&project.to_string())
    }

    pub async fn add(&self, params: &CreateProject) -> Result<()> {
        let outcome = self
            .manager
            .create_project(params)
            .await
            .context("Failed to create project")?;
        self.renderer
            .render(&CreateResult::new(outcome.project().clone()).to_string())
    }

    pub async fn edit(&self, params: &EditProject) -> Result<()> {
        let outcome = self
            .manager
            .edit_project(params)
            .await
            .with_context(|| format!("Failed to edit project {}", params.id))?;
        let result = UpdateResult::with_changes(outcome.project().clone(), changed_fields(params));
        self.renderer.render(&result.to_string())
    }

    pub async fn delete(&self, params: &Id) -> Result<()> {
        let removed = self
            .manager
            .delete(&params.id)
            .await
            .with_context(|| format!("Failed to delete project {}", params.id))?;
        let result = match removed {
            Some(project) => DeleteResult::with_name(project.id, project.name),
            None => DeleteResult::new(params.id.clone()),
        };
        self.renderer.render(&result.to_string())
    }

    pub fn plant_types(renderer: &TerminalRenderer) -> Result<()> {
        renderer.render(&PlantTypes.to_string())
    }
}
