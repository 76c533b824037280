//! Interactive session over a single [`ProjectManager`].
//!
//! Each input line is one command. Failures are printed and the session
//! continues; only `quit`, end of input or Ctrl-C end it.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;
use sprout_core::{
    display::{DeleteResult, OperationStatus, ProjectList, SessionStatus},
    DraftField, PlantType, ProjectId, ProjectManager, SortKey, SproutError,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `list`: show the current view
- `search <text>`: filter by keyword, empty to clear
- `filter <plant type>`: filter by plant type, `none` to clear
- `sort name|date|plant-type`: change the sort order
- `select <position>`: select and show a project
- `show`: show the selected project
- `expand [id]`: toggle the full description
- `add`: start a new project draft
- `edit <id>`: start editing a project
- `set <field> <value>`: set name, description, plantType or startDate
- `submit`: save the draft to the store
- `cancel`: discard the draft
- `delete [id]`: delete a project, the selected one by default
- `reload`: fetch the project list again
- `status`: show the session state
- `quit`: leave the shell
";

/// Outcome of one input line.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Markdown to print before reading the next line
    Continue(String),
    Quit,
}

pub struct Shell {
    manager: ProjectManager,
}

impl Shell {
    pub fn new(manager: ProjectManager) -> Self {
        Self { manager }
    }

    /// Read commands from stdin until the user quits.
    pub async fn run(&self, renderer: &TerminalRenderer) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        renderer.render("Type `help` for a list of commands.\n")?;

        loop {
            prompt(renderer)?;
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(line) = line else {
                break;
            };

            match self.execute(&line).await {
                Reply::Quit => break,
                Reply::Continue(output) => renderer.render(&output)?,
            }
        }

        debug!("Shell closed");
        Ok(())
    }

    /// Run one command line and return what to print.
    pub async fn execute(&self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => Reply::Continue(String::new()),
            "quit" | "exit" | "q" => Reply::Quit,
            _ => Reply::Continue(match self.dispatch(command, rest).await {
                Ok(output) => output,
                Err(e) => OperationStatus::from(&e).to_string(),
            }),
        }
    }

    async fn dispatch(&self, command: &str, rest: &str) -> sprout_core::Result<String> {
        let manager = &self.manager;

        match command {
            "help" | "?" => Ok(HELP.to_string()),
            "list" | "ls" => Ok(self.listing().await),
            "status" => Ok(SessionStatus(&manager.snapshot().await).to_string()),
            "show" => manager
                .selected()
                .await
                .map(|project| project.to_string())
                .ok_or_else(|| {
                    SproutError::invalid_input("selection")
                        .with_reason("No project selected. Use `select <position>` first")
                }),

            "search" => {
                manager.set_search_term(rest).await;
                Ok(self.listing().await)
            }
            "filter" => {
                let plant_type = match rest {
                    "" | "none" | "all" => None,
                    label => Some(label.parse::<PlantType>().map_err(|reason| {
                        SproutError::invalid_input("plantType").with_reason(reason)
                    })?),
                };
                manager.set_plant_filter(plant_type).await;
                Ok(self.listing().await)
            }
            "sort" => {
                let key = rest.parse::<SortKey>().map_err(|reason| {
                    SproutError::invalid_input("sort").with_reason(reason)
                })?;
                manager.set_sort_key(key).await;
                Ok(self.listing().await)
            }
            "select" => {
                let position = parse_position(rest)?;
                manager
                    .select_at(position - 1)
                    .await
                    .map(|project| project.to_string())
                    .ok_or_else(|| {
                        SproutError::invalid_input("position")
                            .with_reason(format!("No project at position {position}"))
                    })
            }
            "expand" => {
                let id = self.target_id(rest).await?;
                manager.toggle_description(&id).await?;
                Ok(self.listing().await)
            }

            _ => self.dispatch_change(command, rest).await,
        }
    }

    /// Commands that edit drafts or change the store.
    async fn dispatch_change(&self, command: &str, rest: &str) -> sprout_core::Result<String> {
        let manager = &self.manager;

        match command {
            "add" | "new" => {
                manager.begin_create().await;
                Ok(self.draft_status("Started a new project draft").await)
            }
            "edit" => {
                let id = self.target_id(rest).await?;
                manager.begin_edit(&id).await?;
                Ok(self.draft_status(&format!("Editing project {id}")).await)
            }
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = field.parse::<DraftField>().map_err(|reason| {
                    SproutError::invalid_input("field").with_reason(reason)
                })?;
                manager.set_field(field, value).await?;
                Ok(self.draft_status(&format!("Set {field}")).await)
            }
            "submit" => Ok(manager.submit().await?.to_string()),
            "cancel" => Ok(if manager.cancel_edit().await {
                OperationStatus::success("Draft discarded").to_string()
            } else {
                OperationStatus::success("No draft in progress").to_string()
            }),

            "delete" | "rm" => {
                let id = self.target_id(rest).await?;
                let result = match manager.delete(&id).await? {
                    Some(project) => DeleteResult::with_name(project.id, project.name),
                    None => DeleteResult::new(id),
                };
                Ok(result.to_string())
            }
            "reload" => {
                let count = manager.load().await?;
                Ok(format!(
                    "{}\n{}",
                    OperationStatus::success(format!("Loaded {count} projects")),
                    self.listing().await
                ))
            }

            other => Err(SproutError::invalid_input("command").with_reason(format!(
                "Unknown command '{other}'. Type `help` for a list of commands"
            ))),
        }
    }

    async fn listing(&self) -> String {
        let snapshot = self.manager.snapshot().await;
        ProjectList::with_selection(&snapshot.view, &snapshot.selection).to_string()
    }

    async fn draft_status(&self, message: &str) -> String {
        let editor = self.manager.editor().await;
        let draft = editor.draft().map(ToString::to_string).unwrap_or_default();
        format!("{}\n{draft}", OperationStatus::success(message))
    }

    /// The id given on the line, or the selected project's.
    async fn target_id(&self, rest: &str) -> sprout_core::Result<ProjectId> {
        if !rest.is_empty() {
            return Ok(ProjectId::from(rest));
        }
        self.manager
            .selection()
            .await
            .selected()
            .cloned()
            .ok_or_else(|| {
                SproutError::invalid_input("id")
                    .with_reason("Give a project ID or select a project first")
            })
    }
}

fn parse_position(raw: &str) -> sprout_core::Result<usize> {
    match raw.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(SproutError::invalid_input("position")
            .with_reason(format!("Expected a position of 1 or more, got '{raw}'"))),
    }
}

fn prompt(renderer: &TerminalRenderer) -> Result<()> {
    let mut stdout = std::io::stdout();
    if renderer.is_rich() {
        write!(stdout, "\x1b[32msprout>\x1b[0m ")?;
    } else {
        write!(stdout, "sprout> ")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::civil::date;
    use sprout_core::{InMemoryGateway, ManagerBuilder, Project, ProjectFields};

    use super::*;

    async fn shell_with(projects: Vec<Project>) -> (Arc<InMemoryGateway>, Shell) {
        let gateway = Arc::new(InMemoryGateway::with_projects(projects));
        let manager = ManagerBuilder::new()
            .with_gateway(gateway.clone())
            .build()
            .await
            .expect("Failed to create manager");
        (gateway, Shell::new(manager))
    }

    fn project(id: &str, name: &str, plant_type: PlantType) -> Project {
        Project::new(
            ProjectId::from(id),
            ProjectFields {
                name: name.to_string(),
                description: "x".repeat(120),
                plant_type,
                start_date: date(2024, 4, 1),
            },
        )
    }

    async fn output(shell: &Shell, line: &str) -> String {
        match shell.execute(line).await {
            Reply::Continue(output) => output,
            Reply::Quit => panic!("unexpected quit on '{line}'"),
        }
    }

    #[tokio::test]
    async fn test_quit_and_blank_lines() {
        let (_gateway, shell) = shell_with(vec![]).await;
        assert_eq!(shell.execute("quit").await, Reply::Quit);
        assert_eq!(shell.execute("   ").await, Reply::Continue(String::new()));
    }

    #[tokio::test]
    async fn test_draft_submit_flow() {
        let (gateway, shell) = shell_with(vec![]).await;

        output(&shell, "add").await;
        output(&shell, "set name Horta da Escola").await;
        let missing = output(&shell, "submit").await;
        assert_eq!(missing, "Error: Missing required fields: plantType, startDate\n");
        assert!(gateway.projects().is_empty());

        output(&shell, "set plantType Cenoura").await;
        output(&shell, "set date 2024-02-01").await;
        let created = output(&shell, "submit").await;
        assert!(created.starts_with("Created project with ID: p1"));
        assert_eq!(gateway.projects()[0].name, "Horta da Escola");
    }

    #[tokio::test]
    async fn test_view_commands() {
        let (_gateway, shell) = shell_with(vec![
            project("1", "Tomate-school", PlantType::Tomate),
            project("2", "Alface-school", PlantType::Alface),
        ])
        .await;

        let sorted = output(&shell, "sort plant-type").await;
        assert!(sorted.contains("## 1. Alface-school"));

        let filtered = output(&shell, "filter tomate").await;
        assert!(filtered.contains("## 1. Tomate-school"));
        assert!(!filtered.contains("Alface-school"));

        let bad = output(&shell, "filter roses").await;
        assert!(bad.starts_with("Error: Invalid input for field 'plantType'"));

        output(&shell, "filter none").await;
        let selected = output(&shell, "select 2").await;
        assert!(selected.starts_with("# Tomate-school"));

        let expanded = output(&shell, "expand").await;
        assert!(expanded.contains(&"x".repeat(120)));
    }

    #[tokio::test]
    async fn test_delete_selected_clears_selection() {
        let (gateway, shell) =
            shell_with(vec![project("1", "Horta Norte", PlantType::Hortela)]).await;

        output(&shell, "select 1").await;
        let deleted = output(&shell, "delete").await;
        assert_eq!(deleted, "Deleted project 'Horta Norte' (ID: 1)\n");
        assert!(gateway.projects().is_empty());

        let show = output(&shell, "show").await;
        assert!(show.starts_with("Error:"));
        assert!(output(&shell, "list").await.contains("No projects found."));
    }

    #[tokio::test]
    async fn test_errors_keep_session_alive() {
        let (gateway, shell) = shell_with(vec![]).await;

        assert!(output(&shell, "frobnicate").await.contains("Unknown command"));
        assert!(output(&shell, "select 0").await.starts_with("Error:"));
        assert!(output(&shell, "edit ghost").await.contains("not found"));

        gateway.fail_next(SproutError::unreachable("connection refused"));
        let reload = output(&shell, "reload").await;
        assert!(reload.starts_with("Error: Remote store unreachable"));
        assert!(output(&shell, "reload").await.starts_with("Success: Loaded 0 projects"));
    }
}
