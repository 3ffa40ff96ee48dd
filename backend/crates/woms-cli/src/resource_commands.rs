use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Record a resource
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        quantity: i64,
    },

    /// List resources
    List,
}
