use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum HouseholdCommands {
    /// Create a household
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,
    },

    /// Households with their member ids
    List,

    /// Add an applicant to a household
    AddMember {
        household_id: i64,

        #[arg(long)]
        applicant_id: i64,
    },
}
