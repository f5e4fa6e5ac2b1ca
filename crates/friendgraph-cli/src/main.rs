//! CLI entry point for the friendgraph scenario.
//!
//! Connects, writes a greeting, seeds the sample graph, runs the read
//! queries, and always wipes the graph and closes the connection before
//! exiting. The report goes to stdout; logs go to stderr.

mod report;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use friendgraph_client::{GraphConfig, GraphSessionClient};
use friendgraph_core::config::Settings;
use friendgraph_core::SampleGraph;

#[derive(Parser)]
#[command(name = "friendgraph")]
#[command(about = "Exercise a Neo4j database with a small social graph, then wipe it")]
struct Cli {
    /// Config file prefix (default: friendgraph).
    #[arg(short, long, default_value = "friendgraph")]
    config: String,

    /// Bolt URI, overrides neo4j.uri.
    #[arg(long)]
    uri: Option<String>,

    /// Username, overrides neo4j.user.
    #[arg(long)]
    user: Option<String>,

    /// Password, overrides neo4j.password.
    #[arg(long)]
    password: Option<String>,

    /// Message stored on the greeting node.
    #[arg(long)]
    message: Option<String>,

    /// JSON file with a custom sample graph.
    #[arg(long)]
    sample: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let sample = load_sample(settings.scenario.sample_path.as_deref())?;

    let graph_config = GraphConfig::from(settings.neo4j.clone());
    let mut client = GraphSessionClient::connect(&graph_config).await?;

    let outcome = run_scenario(&client, &settings.scenario.greeting, &sample).await;
    let cleanup = cleanup(&mut client).await;

    finish(outcome, cleanup)
}

/// Merge the scenario and cleanup results. A scenario error wins; a cleanup
/// error that follows it is only logged.
fn finish(outcome: anyhow::Result<()>, cleanup: anyhow::Result<()>) -> anyhow::Result<()> {
    match (outcome, cleanup) {
        (Err(e), Err(cleanup_err)) => {
            tracing::error!(error = %cleanup_err, "Cleanup failed after scenario error");
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}

async fn run_scenario(
    client: &GraphSessionClient,
    message: &str,
    sample: &SampleGraph,
) -> anyhow::Result<()> {
    let greeting = client.run_greeting_write(message).await?;
    println!("{}", report::greeting(&greeting));

    client.seed_sample_graph(sample).await?;
    println!("{}", report::seeded());

    for name in distinct_names(sample) {
        let friends = client.friends_of(name).await?;
        println!("{}", report::friends(name, &friends));
    }

    let mut people = client.people_by_age_desc().await?;
    println!("{}", report::people_header());
    while let Some(person) = people.next().await? {
        println!("{}", report::person(&person));
    }

    Ok(())
}

/// Wipe the graph and close the connection. Close happens even if the wipe fails.
async fn cleanup(client: &mut GraphSessionClient) -> anyhow::Result<()> {
    let wiped = client.delete_all().await;
    if let Ok(deleted) = &wiped {
        println!("{}", report::deleted(*deleted));
    }
    client.close();
    println!("{}", report::closed());
    wiped?;
    Ok(())
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load(&cli.config)?;
    if let Some(uri) = &cli.uri {
        settings.neo4j.uri = uri.clone();
    }
    if let Some(user) = &cli.user {
        settings.neo4j.user = user.clone();
    }
    if let Some(password) = &cli.password {
        settings.neo4j.password = password.clone();
    }
    if let Some(message) = &cli.message {
        settings.scenario.greeting = message.clone();
    }
    if let Some(sample) = &cli.sample {
        settings.scenario.sample_path = Some(sample.clone());
    }
    Ok(settings)
}

fn load_sample(path: Option<&str>) -> anyhow::Result<SampleGraph> {
    match path {
        Some(path) => {
            let input = std::fs::read_to_string(path)?;
            let sample = SampleGraph::from_json(&input)?;
            tracing::info!(path, people = sample.people.len(), "Loaded sample graph");
            Ok(sample)
        }
        None => Ok(SampleGraph::default()),
    }
}

/// Person names in first-seen order, without repeats.
fn distinct_names(sample: &SampleGraph) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::with_capacity(sample.people.len());
    for p in &sample.people {
        if !names.contains(&p.name.as_str()) {
            names.push(&p.name);
        }
    }
    names
}
