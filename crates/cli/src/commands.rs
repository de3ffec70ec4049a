use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the pipeline, model, and subscription, then start the pipeline
    Provision {
        #[arg(long, help = "Spec file path; defaults to the built-in starter spec")]
        config: Option<String>,

        #[arg(
            long,
            help = "Load KEY=VALUE pairs from this file before resolving credentials"
        )]
        env_file: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the assembled spec as JSON without calling any service
    Render {
        #[arg(long, help = "Spec file path; defaults to the built-in starter spec")]
        config: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON spec to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
