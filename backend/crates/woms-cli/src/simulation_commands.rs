use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SimulationCommands {
    /// Record a simulation run, stamped with the current time
    Create {
        #[arg(long)]
        description: String,

        #[arg(long)]
        results: String,
    },

    /// List simulation runs
    List,
}
