use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use navigation::{ActionId, MemoryHistory, NavigationController, NavigationView};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Replays screen navigation actions against an in-memory history")]
struct Args {
    /// Path the history starts on.
    #[arg(long, default_value = "/")]
    start: String,
    /// Action to trigger, by id (`next-screen-action` or `home-action`).
    #[arg(long = "press", value_name = "ACTION_ID", value_parser = parse_action_id)]
    presses: Vec<ActionId>,
    /// Print each rendered view as a JSON line.
    #[arg(long)]
    json: bool,
}

fn parse_action_id(raw: &str) -> Result<ActionId, String> {
    ActionId::from_id(raw).ok_or_else(|| {
        let known: Vec<_> = ActionId::ALL.iter().map(|id| id.as_str()).collect();
        format!("unknown action '{raw}' (expected one of: {})", known.join(", "))
    })
}

fn write_view(out: &mut impl Write, view: &NavigationView, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(view)?)?;
        return Ok(());
    }

    writeln!(out, "{}  {}", view.location, view.location.title())?;
    for action in view.actions() {
        writeln!(out, "  [{}] {}", action.id.as_str(), action.label)?;
    }
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> Result<MemoryHistory> {
    let mut controller = NavigationController::new(MemoryHistory::new(args.start.clone()));

    for action in &args.presses {
        let view = controller
            .render()
            .with_context(|| format!("cannot render '{}'", controller.router().current_path()))?;
        write_view(out, &view, args.json)?;

        let target = controller
            .trigger(&view, *action)
            .with_context(|| format!("cannot trigger {} on {}", action.as_str(), view.location))?;
        info!(action = action.as_str(), to = %target, "navigated");
    }

    let view = controller
        .render()
        .with_context(|| format!("cannot render '{}'", controller.router().current_path()))?;
    write_view(out, &view, args.json)?;

    Ok(controller.into_router())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let history = run(&args, &mut io::stdout().lock())?;
    info!(entries = history.len(), "history replay finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_action_id, run, Args};
    use clap::{CommandFactory, Parser};
    use navigation::ActionId;

    fn output(argv: &[&str]) -> anyhow::Result<String> {
        let args = Args::try_parse_from(argv.iter().copied()).expect("valid args");
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn parses_repeated_presses() {
        let args = Args::try_parse_from([
            "screens",
            "--start",
            "/1",
            "--press",
            "next-screen-action",
            "--press",
            "home-action",
        ])
        .expect("parse");
        assert_eq!(args.presses, [ActionId::NextScreen, ActionId::Home]);
        assert_eq!(args.start, "/1");
    }

    #[test]
    fn rejects_unknown_action_ids() {
        assert!(parse_action_id("Component-Button-NextScreen").is_err());
        assert!(Args::try_parse_from(["screens", "--press", "back"]).is_err());
    }

    #[test]
    fn prints_each_rendered_screen() {
        let text = output(&["screens", "--press", "next-screen-action", "--press", "home-action"])
            .expect("replay");
        assert_eq!(
            text,
            "/  Screen 0\n  [next-screen-action] Go to Screen 2\n\
             /2  Screen 2\n  [next-screen-action] Go to Screen 1\n  [home-action] Home\n\
             /  Screen 0\n  [next-screen-action] Go to Screen 2\n"
        );
    }

    #[test]
    fn prints_json_lines() {
        let text = output(&["screens", "--start", "/2", "--json"]).expect("replay");
        let view: serde_json::Value = serde_json::from_str(text.trim()).expect("json line");
        assert_eq!(view["primary"]["target"], "screen_a");
    }

    #[test]
    fn home_on_root_is_an_error() {
        let err = output(&["screens", "--press", "home-action"]).expect_err("no home on root");
        assert!(err.to_string().contains("home-action"), "{err}");
    }

    #[test]
    fn unknown_start_path_is_an_error() {
        let err = output(&["screens", "--start", "/7"]).expect_err("no screen for /7");
        assert!(format!("{err:#}").contains("unknown route path '/7'"), "{err:#}");
    }

    #[test]
    fn every_flag_is_documented_in_help() {
        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("Path the history starts on"), "{help}");
        assert!(help.contains("Action to trigger"), "{help}");
        assert!(help.contains("Print each rendered view as a JSON line"), "{help}");
    }
}
