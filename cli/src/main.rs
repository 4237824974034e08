//! CLI entrypoint for Role Allocator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use allocator_application::{
    AllocationNotifier, AllocatorConfig, AssignRoleInput, AssignRoleUseCase, EventLogger,
    InitWorkspaceUseCase, InspectTeamUseCase, ManageTeamUseCase, NoEventLogger, NoNotifier,
    RunAllocationUseCase, TransferUseCase,
};
use allocator_domain::{MemberId, RoleId, SkillId};
use allocator_infrastructure::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputFormat, JsonFileTransfer, JsonStateStore,
    JsonlEventLogger,
};
use allocator_presentation::{
    Cli, Command, ConsoleFormatter, ConsoleNotifier, MemberCommand, OutputConfig, OutputFormat,
    RoleCommand, SkillCommand,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Everything a command handler needs, built once from config and flags
struct App {
    store: Arc<JsonStateStore>,
    event_logger: Arc<dyn EventLogger>,
    notifier: Box<dyn AllocationNotifier>,
    allocator: AllocatorConfig,
    export_dir: PathBuf,
    format: OutputFormat,
    file_config: FileConfig,
    config_path: Option<PathBuf>,
    no_config: bool,
}

impl App {
    fn print(&self, text: impl FnOnce() -> String, value: serde_json::Value) {
        match self.format {
            OutputFormat::Text => print!("{}", text()),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&value)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_ref());

    info!("Starting Role Allocator");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    for issue in file_config.validate() {
        warn!("{}", issue);
    }

    let output = OutputConfig {
        format: file_config.output.format.map(|f| match f {
            FileOutputFormat::Text => OutputFormat::Text,
            FileOutputFormat::Json => OutputFormat::Json,
        }),
        color: file_config.output.color,
    };
    let format = output.resolve_format(cli.output);
    if !output.use_color(cli.no_color, format) {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let state_path = cli
        .state
        .clone()
        .unwrap_or_else(|| file_config.storage.state_path());
    info!("Using team state at {}", state_path.display());

    let event_logger: Arc<dyn EventLogger> = match file_config
        .storage
        .event_log_path()
        .and_then(JsonlEventLogger::new)
    {
        Some(logger) => {
            info!("Recording history to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoEventLogger),
    };

    let notifier: Box<dyn AllocationNotifier> = match format {
        OutputFormat::Text => Box::new(ConsoleNotifier::new(cli.quiet)),
        OutputFormat::Json => Box::new(NoNotifier),
    };

    let app = App {
        store: Arc::new(JsonStateStore::new(state_path)),
        event_logger,
        notifier,
        allocator: file_config.allocation.to_allocator_config(),
        export_dir: file_config.storage.export_path(),
        format,
        file_config,
        config_path: cli.config,
        no_config: cli.no_config,
    };

    run(&app, cli.command).await
}

fn init_logging(verbose: u8, log_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "role-allocator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn show_config(app: &App) -> Result<()> {
    let config = &app.file_config;
    println!("Configuration sources (in priority order):");
    if app.no_config {
        println!("  (disabled by --no-config)");
    } else {
        for line in ConfigLoader::describe_sources(app.config_path.as_deref()) {
            println!("  {}", line);
        }
    }

    let issues = config.validate();
    if !issues.is_empty() {
        println!("\nIssues:");
        for issue in &issues {
            println!("  {}", issue);
        }
    }

    println!("\nEffective configuration:");
    println!(
        "{}",
        toml::to_string_pretty(config).context("Failed to render configuration")?
    );

    if ConfigIssue::has_errors(&issues) {
        warn!("Configuration has errors; built-in defaults are used in their place");
    }
    Ok(())
}

async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Init {
            name,
            sample,
            force,
        } => {
            let use_case = InitWorkspaceUseCase::new(app.store.clone())
                .with_event_logger(app.event_logger.clone());
            let state = use_case
                .execute(app.allocator.to_init_input(name, sample, force))
                .await?;
            app.print(
                || ConsoleFormatter::board(&state),
                serde_json::to_value(&state)?,
            );
        }

        Command::Show { members } => {
            let overview = InspectTeamUseCase::new(app.store.clone()).overview().await?;
            let state = &overview.state;
            app.print(
                || {
                    if members {
                        ConsoleFormatter::members(state)
                    } else {
                        ConsoleFormatter::board(state)
                    }
                },
                json!({ "state": state, "summary": overview.summary }),
            );
        }

        Command::Allocate { method, seed } => {
            let use_case = RunAllocationUseCase::new(app.store.clone())
                .with_event_logger(app.event_logger.clone());
            let output = use_case
                .execute_with_notifier(
                    app.allocator.to_run_input(method, seed),
                    app.notifier.as_ref(),
                )
                .await?;
            app.print(
                || ConsoleFormatter::board(&output.state),
                json!({
                    "report": output.report,
                    "summary": output.summary,
                    "state": output.state,
                }),
            );
        }

        Command::Assign { role, member } => {
            assign(app, AssignRoleInput::assign(role, member)).await?;
        }

        Command::Unassign { role } => {
            assign(app, AssignRoleInput::unassign(role)).await?;
        }

        Command::Score { member, role } => {
            let use_case = InspectTeamUseCase::new(app.store.clone());
            match (member, role) {
                (Some(member), Some(role)) => {
                    let score = use_case
                        .score(&MemberId::from(member), &RoleId::from(role))
                        .await?;
                    let skills = use_case.overview().await?.state.skills;
                    app.print(
                        || ConsoleFormatter::score(&score, &skills),
                        serde_json::to_value(&score)?,
                    );
                }
                _ => {
                    let ranking = use_case.ranking().await?;
                    app.print(
                        || ConsoleFormatter::ranking(&ranking),
                        serde_json::to_value(&ranking)?,
                    );
                }
            }
        }

        Command::Check => {
            let overview = InspectTeamUseCase::new(app.store.clone()).overview().await?;
            let issues: Vec<String> = overview.issues.iter().map(|i| i.to_string()).collect();
            app.print(
                || ConsoleFormatter::issues(&overview.issues, &overview.summary),
                json!({
                    "consistent": issues.is_empty(),
                    "issues": issues,
                    "summary": overview.summary,
                }),
            );
            if !overview.issues.is_empty() {
                bail!("{} assignment issue(s) found", overview.issues.len());
            }
        }

        Command::Member { action } => member(app, action).await?,
        Command::Role { action } => role(app, action).await?,
        Command::Skill { action } => skill(app, action).await?,

        Command::Rename { name } => {
            manage(app).rename_team(&name).await?;
            app.print(
                || format!("Team renamed to {}\n", name.trim()),
                json!({ "name": name.trim() }),
            );
        }

        Command::Import { path } => {
            let use_case = TransferUseCase::new(app.store.clone(), Arc::new(JsonFileTransfer::new()))
                .with_event_logger(app.event_logger.clone());
            use_case
                .import_with_notifier(&path, app.notifier.as_ref())
                .await?;
            let overview = InspectTeamUseCase::new(app.store.clone()).overview().await?;
            for issue in &overview.issues {
                warn!("{}", issue);
            }
            app.print(
                || ConsoleFormatter::board(&overview.state),
                serde_json::to_value(&overview.state)?,
            );
        }

        Command::Export { dir } => {
            let use_case = TransferUseCase::new(app.store.clone(), Arc::new(JsonFileTransfer::new()))
                .with_event_logger(app.event_logger.clone());
            let dir = dir.unwrap_or_else(|| app.export_dir.clone());
            let path = use_case
                .export_with_notifier(&dir, app.notifier.as_ref())
                .await?;
            app.print(
                || format!("{}\n", path.display()),
                json!({ "path": path.display().to_string() }),
            );
        }

        Command::ShowConfig => show_config(app)?,
    }
    Ok(())
}

async fn assign(app: &App, input: AssignRoleInput) -> Result<()> {
    let use_case =
        AssignRoleUseCase::new(app.store.clone()).with_event_logger(app.event_logger.clone());
    let output = use_case.execute(input).await?;
    app.print(
        || ConsoleFormatter::change(&output.change, &output.state.allocation),
        serde_json::to_value(&output.change)?,
    );
    Ok(())
}

fn manage(app: &App) -> ManageTeamUseCase<JsonStateStore> {
    ManageTeamUseCase::new(app.store.clone()).with_event_logger(app.event_logger.clone())
}

async fn member(app: &App, action: MemberCommand) -> Result<()> {
    let use_case = manage(app);
    match action {
        MemberCommand::Add(args) => {
            let draft = args.into_draft();
            let name = draft.name.trim().to_string();
            let id = use_case.add_member(draft).await?;
            app.print(
                || format!("Added member {} ({})\n", name, id),
                json!({ "id": id, "name": name }),
            );
        }
        MemberCommand::Edit { id, details } => {
            let id = MemberId::from(id);
            use_case.update_member(&id, details.into_draft()).await?;
            app.print(|| format!("Updated member {}\n", id), json!({ "id": id }));
        }
        MemberCommand::Remove { id } => {
            let removed = use_case.remove_member(&MemberId::from(id)).await?;
            app.print(
                || format!("Removed member {} ({})\n", removed.name, removed.id),
                serde_json::to_value(&removed)?,
            );
        }
        MemberCommand::Prefer { id, roles } => {
            let id = MemberId::from(id);
            let roles: Vec<RoleId> = roles.into_iter().map(RoleId::from).collect();
            use_case.set_preferences(&id, roles.clone()).await?;
            app.print(
                || {
                    let list: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
                    format!("Preferences for {}: {}\n", id, list.join(" > "))
                },
                json!({ "id": id, "preferredRoles": roles }),
            );
        }
    }
    Ok(())
}

async fn role(app: &App, action: RoleCommand) -> Result<()> {
    let use_case = manage(app);
    match action {
        RoleCommand::Add(args) => {
            let draft = args.into_draft();
            let name = draft.name.trim().to_string();
            let id = use_case.add_role(draft).await?;
            app.print(
                || format!("Added role {} ({})\n", name, id),
                json!({ "id": id, "name": name }),
            );
        }
        RoleCommand::Edit { id, details } => {
            let id = RoleId::from(id);
            use_case.update_role(&id, details.into_draft()).await?;
            app.print(|| format!("Updated role {}\n", id), json!({ "id": id }));
        }
        RoleCommand::Remove { id } => {
            let removed = use_case.remove_role(&RoleId::from(id)).await?;
            app.print(
                || format!("Removed role {} ({})\n", removed.name, removed.id),
                serde_json::to_value(&removed)?,
            );
        }
    }
    Ok(())
}

async fn skill(app: &App, action: SkillCommand) -> Result<()> {
    let use_case = manage(app);
    match action {
        SkillCommand::Add { name } => {
            let id = use_case.add_skill(&name).await?;
            app.print(
                || format!("Added skill {} ({})\n", name.trim(), id),
                json!({ "id": id, "name": name.trim() }),
            );
        }
        SkillCommand::Rename { id, name } => {
            let id = SkillId::from(id);
            use_case.rename_skill(&id, &name).await?;
            app.print(
                || format!("Renamed skill {} to {}\n", id, name.trim()),
                json!({ "id": id, "name": name.trim() }),
            );
        }
        SkillCommand::Remove { id } => {
            let id = SkillId::from(id);
            use_case.remove_skill(&id).await?;
            app.print(|| format!("Removed skill {}\n", id), json!({ "id": id }));
        }
        SkillCommand::List => {
            let overview = InspectTeamUseCase::new(app.store.clone()).overview().await?;
            let skills = &overview.state.skills;
            app.print(
                || ConsoleFormatter::skills(skills),
                serde_json::to_value(skills)?,
            );
        }
    }
    Ok(())
}
