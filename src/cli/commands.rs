// CLI command definitions

use super::template::{GenerateCommand, PropertiesCommand, ValidateCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "clustertemplate-kube",
    version,
    about = "Instance generation tool for cluster templates",
    long_about = "A standalone CLI tool for generating and validating cluster template instances on Kubernetes"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a ClusterTemplateInstance YAML from a cluster template
    Generate(GenerateCommand),

    /// List the properties a template's status resolves to
    Properties(PropertiesCommand),

    /// Validate a cluster template manifest
    Validate(ValidateCommand),
}
