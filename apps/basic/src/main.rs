//! Scripted session for the basic to-do list.
//!
//! Drives the headless host the way a user would and prints the rendered
//! HTML after every step.
//!
//! ```bash
//! RUST_LOG=debug TODO_DEVTOOLS=1 cargo run -p todo-basic
//! ```

use composable_todo_view::{AppConfig, DomEvent, Target};
use todo_basic::{TodoApp, launch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn step(app: &mut TodoApp, label: &str, event: DomEvent) -> anyhow::Result<()> {
    app.dispatch(event).await?;
    println!("{label}\n  {}\n", app.html());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_basic=debug,composable_todo_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(container = %config.container, devtools = config.devtools, "Starting basic to-do list");

    let mut app = launch(&config);
    println!("=== Basic Todo ===\n\nMounted\n  {}\n", app.html());

    for subject in ["Buy milk", "  Write docs  ", "Walk the dog"] {
        app.dispatch(DomEvent::Input(Target::Tag("input"), subject.to_string()))
            .await?;
        step(&mut app, &format!("Submitted {subject:?}"), DomEvent::Submit(Target::Tag("form"))).await?;
    }

    step(&mut app, "Toggled item 0", DomEvent::Click(Target::key(0))).await?;
    step(&mut app, "Toggled item 2", DomEvent::Click(Target::key(2))).await?;

    // Blank input is ignored
    app.dispatch(DomEvent::Input(Target::Tag("input"), "   ".to_string()))
        .await?;
    step(&mut app, "Submitted blank input", DomEvent::Submit(Target::Tag("form"))).await?;

    step(
        &mut app,
        "Cleared completed",
        DomEvent::Click(Target::text("clear completed")),
    )
    .await?;

    let state = app.snapshot();
    println!(
        "=== Done: {} item(s), {} completed ===",
        state.count(),
        state.completed_count()
    );
    Ok(())
}
