pub mod marks_file;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "marks-registry")]
#[command(about = "Capture exam marks and calculate per-student averages")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with a batch of marks to capture")]
    pub marks_file: Option<String>,

    #[arg(long, help = "Report the average for this student only")]
    pub student: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.marks_file {
            validation::validate_path("marks_file", path)?;
        }

        if let Some(student) = &self.student {
            validation::validate_non_empty_string("student", student)?;
        }

        Ok(())
    }
}
