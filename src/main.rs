//! Formdesk - command line front end
//!
//! Each invocation performs one desk action and prints the resulting table
//! or detail fragment as HTML on stdout. Notices go to the terminal.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formdesk::{
    config::AppConfig,
    models::Entity,
    services::{EntityDesk, SearchCriteria},
    ui::ConsoleNotifier,
    AppResult, AppState,
};

#[derive(Parser, Debug)]
#[command(name = "formdesk", version, about = "Book and student record desk")]
struct Cli {
    /// Backend base URL, overrides configuration
    #[arg(long, env = "BACKEND_URL", global = true)]
    backend: Option<String>,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    target: Target,
}

#[derive(Subcommand, Debug)]
enum Target {
    /// Manage books
    Books {
        #[command(subcommand)]
        action: Action,
    },
    /// Manage students
    Students {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Show every record
    List,
    /// Show one record in detail
    Show { id: i64 },
    /// Create a record from field=value pairs
    Create(Fields),
    /// Change a record; unspecified fields keep their current value
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete a record
    Delete { id: i64 },
    /// Search by field; the first non-empty field=query pair is used
    Search(Fields),
}

#[derive(Args, Debug)]
struct Fields {
    /// Form field as field=value, repeatable
    #[arg(short = 'f', long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got `{}`", s))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.backend.clone() {
        config.backend.base_url = url;
    }
    if cli.yes {
        config.ui.assume_yes = true;
    }

    init_tracing(&config);

    let notifier = Arc::new(ConsoleNotifier {
        assume_yes: config.ui.assume_yes,
    });
    let mut state = AppState::new(config, notifier)?;
    tracing::debug!(
        "Formdesk v{} using {}",
        env!("CARGO_PKG_VERSION"),
        state.config.backend.base_url
    );

    let result = match cli.target {
        Target::Books { action } => run(&mut state.services.books, action).await,
        Target::Students { action } => run(&mut state.services.students, action).await,
    };

    // the desk has already shown the message
    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("formdesk={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run<E: Entity>(desk: &mut EntityDesk<E>, action: Action) -> AppResult<()> {
    match action {
        Action::List => {
            desk.load_all().await?;
            println!("{}", desk.view().table.0);
        }
        Action::Show { id } => {
            desk.show_detail(id).await?;
            if let Some(detail) = desk.modals().detail.content() {
                println!("{}", detail.0);
            }
        }
        Action::Create(Fields { fields }) => {
            desk.submit(fields).await?;
            println!("{}", desk.view().table.0);
        }
        Action::Update { id, fields } => {
            desk.begin_edit(id).await?;
            let mut values = desk.form().values().clone();
            for (k, v) in fields.fields {
                values.set(k, v);
            }
            desk.submit(values.iter()).await?;
            println!("{}", desk.view().table.0);
        }
        Action::Delete { id } => {
            if desk.delete(id).await? {
                println!("{}", desk.view().table.0);
            }
        }
        Action::Search(Fields { fields }) => {
            let criteria = fields
                .into_iter()
                .fold(SearchCriteria::new(), |c, (k, v)| c.with(k, v));
            desk.search(&criteria).await?;
            println!("{}", desk.view().table.0);
        }
    }
    Ok(())
}
