use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List jobs
    List,

    /// Get a job with its required skills
    Get {
        id: i64,
    },

    /// Create a job
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Monthly salary
        #[arg(long)]
        salary: f64,
    },

    /// Delete a job and its dependent rows
    Delete {
        id: i64,
    },

    /// Replace every job with the livelihood catalog
    ResetCatalog,

    /// Remove blocklisted titles and over-ceiling salaries
    PurgeExcluded,

    /// Add a required skill to a job
    AddSkill {
        job_id: i64,

        #[arg(long)]
        skill: String,
    },

    /// Jobs ranked by how many of their required skills an applicant has
    Matches {
        applicant_id: i64,
    },
}
