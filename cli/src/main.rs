use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use graphjson_projection::{project_document, Graph, ProjectionConfig};
use graphjson_web::GatewayConfig;
use oxrdfio::{RdfFormat, RdfParser};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{stdin, stdout, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = Args::parse();
    match matches.command {
        Command::Serve {
            bind,
            endpoint,
            timeout_secs,
            cors,
            projection,
        } => {
            let config = GatewayConfig {
                bind,
                endpoint,
                request_timeout: Duration::from_secs(timeout_secs),
                cors,
                projection: projection.into(),
            };
            graphjson_web::serve(config).await
        }
        Command::Project {
            file,
            format,
            base,
            projection,
        } => project(file, format, base, &projection.into()),
    }
}

/// Logs to stderr, so that `project` can write its document to stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn project(
    file: Option<PathBuf>,
    format: Option<String>,
    base: Option<String>,
    config: &ProjectionConfig,
) -> anyhow::Result<()> {
    let format = if let Some(format) = format {
        rdf_format_from_name(&format)?
    } else if let Some(file) = &file {
        rdf_format_from_path(file)?
    } else {
        bail!("The --format option must be set when reading from stdin")
    };
    let mut parser = RdfParser::from_format(format);
    if let Some(base) = base {
        parser = parser
            .with_base_iri(&base)
            .with_context(|| format!("Invalid base IRI {base}"))?;
    }

    let graph = if let Some(file) = file {
        let reader = File::open(&file)
            .with_context(|| format!("Could not open {}", file.display()))?;
        read_graph(parser, reader)?
    } else {
        read_graph(parser, stdin().lock())?
    };
    info!(triples = graph.len(), "Loaded graph.");

    let document = project_document(&graph, config);
    let mut writer = stdout().lock();
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)?;
    Ok(writer.flush()?)
}

fn read_graph<R: Read>(parser: RdfParser, reader: R) -> anyhow::Result<Graph> {
    let mut graph = Graph::new();
    for quad in parser.for_reader(reader) {
        graph.insert_rdf(quad?.into())?;
    }
    Ok(graph)
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, |ext| {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn, reason = "Tests")]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    const RESPONSE: &str = "@prefix : <http://example.org/ontology#> .\n\
        :root a :getGraphOutput ; :results :r1 .\n\
        :r1 :name \"Alice\" .\n";

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("graphjson");
        command.arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn cli_project_stdin() {
        cli_command()
            .arg("project")
            .arg("--format")
            .arg("ttl")
            .write_stdin(RESPONSE)
            .assert()
            .success()
            .stdout("{\n  \"getGraphOutput\": {\n    \"results\": [\n      {\n        \"name\": \"Alice\"\n      }\n    ]\n  }\n}\n");
    }

    #[test]
    fn cli_project_file_with_base() -> Result<()> {
        let input_file = NamedTempFile::new("response.ttl")?;
        input_file.write_str(
            "@prefix : <http://example.org/ontology#> .\n<out_Instance> a :getGraphOutput ; :status \"OK\" .\n",
        )?;
        cli_command()
            .arg("project")
            .arg("--file")
            .arg(input_file.path())
            .arg("--base")
            .arg("http://example.com/")
            .arg("--root-field")
            .arg("answer")
            .assert()
            .success()
            .stdout("{\n  \"answer\": {\n    \"status\": \"OK\"\n  }\n}\n");
        Ok(())
    }

    #[test]
    fn cli_project_strict_root() {
        cli_command()
            .arg("project")
            .arg("--format")
            .arg("text/turtle")
            .arg("--strict-root")
            .write_stdin("@prefix : <http://example.org/ontology#> .\n:a a :getGraphOutput .\n:b a :getGraphOutput ; :name \"b\" .\n")
            .assert()
            .success()
            .stdout("{\n  \"getGraphOutput\": {}\n}\n");
    }

    #[test]
    fn cli_project_unknown_format() {
        cli_command()
            .arg("project")
            .arg("--format")
            .arg("foo")
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("The file format 'foo' is unknown"));
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
