use clap::Subcommand;

/// Assignment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssignmentCommands {
    /// Create an assignment.
    Create {
        #[arg(long)]
        course: String,
        #[arg(long)]
        title: String,
        /// Due date, YYYY-MM-DD.
        #[arg(long)]
        due: String,
        #[arg(long, default_value_t = 100)]
        points: u32,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },
    /// List a course's assignments.
    List {
        #[arg(long)]
        course: String,
        /// pending, submitted, graded
        #[arg(long)]
        status: Option<String>,
    },
    /// Get an assignment by ID.
    Get { id: String },
    /// Update an assignment.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        points: Option<u32>,
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Delete an assignment.
    Delete { id: String },
    /// Submit an assignment.
    Submit {
        id: String,
        #[arg(long)]
        student: String,
    },
    /// Grade a submitted assignment (0-100).
    Grade {
        id: String,
        #[arg(long)]
        grade: u8,
    },
}
