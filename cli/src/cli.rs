use clap::{Parser, Subcommand, ValueHint};
use graphjson_projection::{
    ProjectionConfig, RootFallback, DEFAULT_NAMESPACE, DEFAULT_ROOT_FIELD, DEFAULT_ROOT_TYPE,
};
use graphjson_web::{DEFAULT_BIND, DEFAULT_ENDPOINT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "graphjson")]
/// GraphJSON command line tool and SPARQL DESCRIBE to JSON gateway
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP gateway
    Serve {
        /// Host and port to listen to
        #[arg(short, long, env = "GRAPHJSON_BIND", default_value = DEFAULT_BIND, value_hint = ValueHint::Hostname)]
        bind: String,
        /// SPARQL query endpoint that answers the DESCRIBE queries
        #[arg(short, long, env = "GRAPHJSON_ENDPOINT", default_value = DEFAULT_ENDPOINT, value_hint = ValueHint::Url)]
        endpoint: String,
        /// Time limit in seconds for a single request to the SPARQL endpoint
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
        #[command(flatten)]
        projection: ProjectionOptions,
    },
    /// Project an RDF document into the JSON document the gateway would answer with
    Project {
        /// File to project
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// The format of the file
        ///
        /// It can be an extension like "ttl" or a MIME type like "text/turtle".
        ///
        /// By default the format is guessed from the file extension.
        #[arg(long, required_unless_present = "file")]
        format: Option<String>,
        /// Base IRI of the file to read
        #[arg(long, value_hint = ValueHint::Url)]
        base: Option<String>,
        #[command(flatten)]
        projection: ProjectionOptions,
    },
}

/// The naming conventions of the projection.
#[derive(clap::Args)]
pub struct ProjectionOptions {
    /// Namespace of the response ontology
    #[arg(long, env = "GRAPHJSON_NAMESPACE", default_value = DEFAULT_NAMESPACE, value_hint = ValueHint::Url)]
    pub namespace: String,
    /// Local name of the type of the root resource
    #[arg(long, default_value = DEFAULT_ROOT_TYPE)]
    pub root_type: String,
    /// Name of the top-level field of the JSON document
    #[arg(long, default_value = DEFAULT_ROOT_FIELD)]
    pub root_field: String,
    /// Only accept root resources whose IRI contains "_Instance"
    ///
    /// By default, the second resource of the root type is used if none matches.
    #[arg(long)]
    pub strict_root: bool,
}

impl From<ProjectionOptions> for ProjectionConfig {
    fn from(value: ProjectionOptions) -> Self {
        Self {
            namespace: value.namespace,
            root_type: value.root_type,
            root_field: value.root_field,
            root_fallback: if value.strict_root {
                RootFallback::Reject
            } else {
                RootFallback::SecondCandidate
            },
        }
    }
}
