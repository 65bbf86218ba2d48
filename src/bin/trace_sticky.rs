// Trace tool: drives the storefront page through scroll offsets and resizes and
// prints what every sticky sidebar decided and wrote
//
// Usage:
//   trace-sticky [--config PATH] [--width PX] STEP...
//   STEP is a scroll offset (e.g. 400) or resize=<w>x<h> (e.g. resize=600x800)

use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

use site_behaviors::config_validation::load_and_validate_config;
use site_behaviors::core::{App, Document};
use site_behaviors::utilities::init_stderr_logging;

const DEFAULT_WIDTH: f64 = 1200.0;
const DEFAULT_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Scroll(f64),
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    width: Option<f64>,
    steps: Vec<Step>,
}

fn parse_step(text: &str) -> Result<Step> {
    if let Some(size) = text.strip_prefix("resize=") {
        let (width, height) = size
            .split_once('x')
            .ok_or_else(|| anyhow!("expected resize=<w>x<h>, got '{}'", text))?;
        return Ok(Step::Resize {
            width: parse_length(width)?,
            height: parse_length(height)?,
        });
    }
    Ok(Step::Scroll(parse_length(text)?))
}

fn parse_length(text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().with_context(|| format!("not a number: '{}'", text))?;
    if !value.is_finite() || value < 0.0 {
        bail!("expected a non-negative length, got '{}'", text);
    }
    Ok(value)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--width" => {
                let width = args.next().context("--width needs a value")?;
                parsed.width = Some(parse_length(&width)?);
            }
            _ => parsed.steps.push(parse_step(&arg)?),
        }
    }

    if parsed.steps.is_empty() {
        bail!("usage: trace-sticky [--config PATH] [--width PX] STEP...");
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    init_stderr_logging()?;

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_and_validate_config(args.config)?;
    let mut app = App::with_viewport(config, args.width.unwrap_or(DEFAULT_WIDTH), DEFAULT_HEIGHT)?;

    println!(
        "=== {} bound sidebar(s), body {}px, viewport {}px ===",
        app.sidebars.iter().map(|s| s.instances().len()).sum::<usize>(),
        app.page.body_width(),
        app.page.viewport_height()
    );

    for step in &args.steps {
        let label = match step {
            Step::Scroll(top) => {
                app.scroll_to(*top);
                format!("scroll {}", app.page.scroll_top())
            }
            Step::Resize { width, height } => {
                app.resize_px(*width, *height);
                format!("resize {}x{}", width, height)
            }
        };

        if app.last_results.is_empty() {
            println!("{:<16} (no recompute)", label);
            continue;
        }
        for result in &app.last_results {
            let top = result
                .placement
                .top
                .map_or_else(|| "-".to_string(), |top| format!("{}", top));
            let writes: Vec<String> = result
                .writes
                .iter()
                .map(|w| format!("{}={}", w.property, w.value))
                .collect();
            println!(
                "{:<16} mode={:<8} top={:<8} writes=[{}]",
                label,
                result.placement.mode.as_str(),
                top,
                writes.join(", ")
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!(parse_step("400").unwrap(), Step::Scroll(400.0));
        assert_eq!(
            parse_step("resize=600x800").unwrap(),
            Step::Resize {
                width: 600.0,
                height: 800.0
            }
        );
        assert!(parse_step("resize=600").is_err());
        assert!(parse_step("-5").is_err());
        assert!(parse_step("abc").is_err());
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["--width", "1024", "0", "300", "resize=600x800"]).unwrap();
        assert_eq!(parsed.width, Some(1024.0));
        assert_eq!(parsed.steps.len(), 3);
        assert!(parsed.config.is_none());

        assert!(args(&[]).is_err());
        assert!(args(&["--config"]).is_err());
    }
}
