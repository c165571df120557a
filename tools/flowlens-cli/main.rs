use clap::{Parser, Subcommand, ValueEnum};
use flowlens::prelude::*;
use std::path::PathBuf;

/// Inspect automation-workflow documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding one `<id>.json` file per workflow
    #[arg(short, long, env = "FLOWLENS_WORKFLOW_DIR", default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all workflows in the directory
    List,
    /// Render one workflow by id
    Show {
        id: String,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a workflow JSON file directly
    Inspect {
        path: String,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Set a workflow's active flag
    Activate { id: String },
    /// Clear a workflow's active flag
    Deactivate { id: String },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Expand the parameters of the node with this id
    #[arg(short, long = "expand", value_name = "NODE_ID")]
    expand: Vec<String>,

    /// Expand the credentials of the node with this id
    #[arg(long = "expand-credentials", value_name = "NODE_ID")]
    expand_credentials: Vec<String>,

    /// Expand the long message body of the mail node with this id
    #[arg(long = "expand-message", value_name = "NODE_ID")]
    expand_message: Vec<String>,

    /// Expand every region of every node
    #[arg(short = 'a', long)]
    expand_all: bool,

    /// Print the document exactly as received instead of the rendered view
    #[arg(long, conflicts_with = "format")]
    raw: bool,

    /// Output format of the rendered view
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let source = DirectorySource::new(cli.dir);

    match cli.command {
        Command::List => run_list(&source),
        Command::Show { id, render } => {
            let workflow = source
                .fetch_workflow(&id)
                .unwrap_or_else(|e| exit_with_fetch_error(&e));
            run_render(&workflow, &render);
        }
        Command::Inspect { path, render } => {
            let workflow = Workflow::from_file(&path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load workflow from '{}': {}", path, e))
            });
            run_render(&workflow, &render);
        }
        Command::Activate { id } => run_set_active(&source, &id, true),
        Command::Deactivate { id } => run_set_active(&source, &id, false),
    }
}

fn run_list(source: &DirectorySource) {
    let summaries = source
        .fetch_workflow_list()
        .unwrap_or_else(|e| exit_with_fetch_error(&e));
    if summaries.is_empty() {
        println!("No workflows found in '{}'", source.root().display());
        return;
    }
    for summary in summaries {
        let status = if summary.active { "Active" } else { "Inactive" };
        print!(
            "{:<24} {:<40} {:<8} {:>3} nodes  updated {}",
            summary.id, summary.name, status, summary.node_count, summary.updated_at
        );
        if !summary.tags.is_empty() {
            print!("  [{}]", summary.tags.join(", "));
        }
        println!();
    }
}

fn run_render(workflow: &Workflow, args: &RenderArgs) {
    if args.raw {
        println!("{}", raw_document(workflow));
        return;
    }

    let state = expansion_state(workflow, args);
    let view = ViewBuilder::new().build(workflow, &state);
    match args.format {
        OutputFormat::Text => print!("{}", ViewFormatter::format_view(&view)),
        OutputFormat::Json => match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize view: {}", e)),
        },
    }
}

fn expansion_state(workflow: &Workflow, args: &RenderArgs) -> ExpansionState {
    if args.expand_all {
        return workflow
            .nodes
            .iter()
            .flat_map(|node| {
                [Region::Parameters, Region::Credentials, Region::Message]
                    .map(|region| ExpansionKey::new(&node.id, region))
            })
            .collect();
    }

    let mut state = ExpansionState::new();
    for id in &args.expand {
        state.expand(ExpansionKey::parameters(id));
    }
    for id in &args.expand_credentials {
        state.expand(ExpansionKey::credentials(id));
    }
    for id in &args.expand_message {
        state.expand(ExpansionKey::message(id));
    }
    state
}

fn run_set_active(source: &DirectorySource, id: &str, active: bool) {
    let result = if active {
        source.activate_workflow(id)
    } else {
        source.deactivate_workflow(id)
    };
    let workflow = result.unwrap_or_else(|e| exit_with_fetch_error(&e));
    println!(
        "Workflow '{}' is now {}",
        workflow.name,
        if workflow.active { "active" } else { "inactive" }
    );
}

fn exit_with_fetch_error(error: &FetchError) -> ! {
    exit_with_error(&format!("{} (status {})", error, error.status()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
