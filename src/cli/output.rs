use anyhow::Result;
use clap::ValueEnum;
use workorder_chain_core::Route;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

/// Renders routes for stdout. Human output is one result per line, with the
/// visited stages appended when `trace` is set.
pub fn render_routes(routes: &[Route], format: OutputFormat, trace: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Human => {
            let mut out = String::new();
            for route in routes {
                out.push_str(&route.result);
                if trace {
                    out.push_str(&format!("  [{}]", route.visited.join(" -> ")));
                }
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(routes)?;
            out.push('\n');
            out
        }
        OutputFormat::Yaml => serde_yaml::to_string(routes)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use workorder_chain_core::Chain;

    #[test]
    fn human_lists_results() {
        let chain = Chain::standard();
        let routes = vec![chain.route("Valid request"), chain.route("late")];
        let text = render_routes(&routes, OutputFormat::Human, false).unwrap();
        assert_eq!(text, "Validation succeeded\nDeadline check failed\n");
    }

    #[test]
    fn human_trace_shows_hops() {
        let routes = vec![Chain::standard().route("On time request")];
        let text = render_routes(&routes, OutputFormat::Human, true).unwrap();
        assert_eq!(
            text,
            "Deadline check succeeded  [validator -> availability -> deadline]\n"
        );
    }

    #[test]
    fn json_is_an_array_of_routes() {
        let routes = vec![Chain::standard().route("Available request")];
        let text = render_routes(&routes, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["request"], "Available request");
        assert_eq!(value[0]["resolved_by"], "availability");
    }
}
