//! Scripted session for the filtered to-do list.
//!
//! Starts from the seeded list, walks through the filter and form, and
//! prints the rendered HTML after every step.
//!
//! ```bash
//! RUST_LOG=debug TODO_DEVTOOLS=1 cargo run -p todo-filtered
//! ```

use composable_todo_view::{AppConfig, DomEvent, Target};
use todo_filtered::{TodoApp, launch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn step(app: &mut TodoApp, label: &str, event: DomEvent) -> anyhow::Result<()> {
    app.dispatch(event).await?;
    println!("{label}\n  {}\n", app.html());
    Ok(())
}

fn select(filter: &str) -> DomEvent {
    DomEvent::Change(Target::Tag("select"), filter.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_filtered=debug,composable_todo_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(container = %config.container, devtools = config.devtools, "Starting filtered to-do list");

    let mut app = launch(&config);
    println!("=== Filtered Todo ===\n\nMounted\n  {}\n", app.html());

    step(&mut app, "Filter: todo", select("todo")).await?;
    step(&mut app, "Toggled \"Learn Scala\"", DomEvent::Click(Target::text("Learn Scala"))).await?;
    step(&mut app, "Filter: complete", select("complete")).await?;

    // Unknown filter names are ignored
    step(&mut app, "Filter: done (ignored)", select("done")).await?;

    step(&mut app, "Filter: all", select("all")).await?;

    app.dispatch(DomEvent::Input(Target::Tag("input"), " Learn Rust ".to_string()))
        .await?;
    step(&mut app, "Clicked add", DomEvent::Click(Target::text("add"))).await?;

    step(
        &mut app,
        "Cleared completed",
        DomEvent::Click(Target::text("clear completed")),
    )
    .await?;

    let state = app.snapshot();
    println!(
        "=== Done: {} item(s), filter {} ===",
        state.count(),
        state.filter
    );
    Ok(())
}
