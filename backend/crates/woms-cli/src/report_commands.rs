use woms_db::ExportKind;

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Applicants,
    Applications,
    Employment,
    TrainingPrograms,
    Resources,
    /// Every dataset, one file each
    All,
}

impl ExportArg {
    pub fn kinds(self) -> Vec<ExportKind> {
        match self {
            Self::Applicants => vec![ExportKind::Applicants],
            Self::Applications => vec![ExportKind::Applications],
            Self::Employment => vec![ExportKind::Employment],
            Self::TrainingPrograms => vec![ExportKind::TrainingPrograms],
            Self::Resources => vec![ExportKind::Resources],
            Self::All => vec![
                ExportKind::Applicants,
                ExportKind::Applications,
                ExportKind::Employment,
                ExportKind::TrainingPrograms,
                ExportKind::Resources,
            ],
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Program metrics as JSON
    Metrics,

    /// Poverty reduction report as text
    Summary,

    /// Write CSV exports
    Export {
        #[arg(value_enum)]
        dataset: ExportArg,

        /// Output directory; prints the CSV when omitted with a single dataset
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
