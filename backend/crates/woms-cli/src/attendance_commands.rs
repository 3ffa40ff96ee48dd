use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AttendanceCommands {
    /// Record today's time-in
    TimeIn {
        applicant_id: i64,
    },

    /// Close today's open time-in
    TimeOut {
        applicant_id: i64,
    },

    /// Attendance history, newest first
    List {
        applicant_id: i64,
    },

    /// Today's record, if any
    Today {
        applicant_id: i64,
    },
}
