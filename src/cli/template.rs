//! Cluster template commands

use crate::cli::display::{StatusIcon, TableRenderer};
use crate::domain::instance::builder::{build_instance, generate_instance_yaml};
use crate::domain::template::validator::TemplateValidator;
use crate::infrastructure::io::{load_template_file, write_output_file};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    /// Path to the cluster template YAML file
    #[arg(long, short = 'f')]
    pub file: String,

    /// Write the instance YAML to this path instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

impl GenerateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let template = load_template_file(&self.file)?;
        debug!(file = %self.file, template = template.name(), "loaded cluster template");

        let yaml = generate_instance_yaml(&template)?;

        match &self.output {
            Some(path) => {
                write_output_file(path, &yaml)?;
                println!("Instance YAML written to {}", path);
            }
            None => print!("{}", yaml),
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct PropertiesCommand {
    /// Path to the cluster template YAML file
    #[arg(long, short = 'f')]
    pub file: String,
}

impl PropertiesCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let template = load_template_file(&self.file)?;
        let instance = build_instance(&template)?;

        let created = template
            .metadata
            .creation_timestamp
            .as_ref()
            .map(|time| time.0.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "Cluster template: {}  (created: {})",
            template.name().cyan().bold(),
            created
        );

        match instance.spec.values.as_deref() {
            Some(properties) => {
                let renderer = TableRenderer::new();
                println!("{}", renderer.render_properties(properties));
            }
            None => {
                println!(
                    "{} Template status resolves to no properties",
                    StatusIcon::WARNING.yellow()
                );
            }
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateCommand {
    /// Path to the cluster template YAML file
    #[arg(long, short = 'f')]
    pub file: String,
}

impl ValidateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let template = load_template_file(&self.file)?;
        debug!(template = template.name(), "validating cluster template");

        let validator = TemplateValidator::new();
        let checks = [
            ("template name", validator.validate_metadata(&template)),
            ("cost", validator.validate_cost(&template)),
            ("cluster setup names", validator.validate_setup_names(&template)),
            ("chart values", validator.validate_values(&template)),
        ];

        let mut failed = false;
        for (subject, outcome) in checks {
            match outcome {
                Ok(()) => println!("{} {}", StatusIcon::SUCCESS.green(), subject),
                Err(err) => {
                    failed = true;
                    println!("{} {}: {}", StatusIcon::ERROR.red(), subject, err);
                }
            }
        }

        if failed {
            anyhow::bail!("Cluster template '{}' failed validation", template.name());
        }
        println!("Cluster template '{}' is valid", template.name());
        Ok(())
    }
}
