use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Create a lesson.
    Create {
        #[arg(long)]
        course: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        video: String,
        /// Position in the course (defaults to last).
        #[arg(long)]
        order: Option<u32>,
        #[arg(long = "resource")]
        resources: Vec<String>,
    },
    /// List a course's lessons in order.
    List {
        #[arg(long)]
        course: String,
    },
    /// Get a lesson by ID.
    Get { id: String },
    /// Update a lesson.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        video: Option<String>,
        #[arg(long)]
        order: Option<u32>,
    },
    /// Delete a lesson.
    Delete { id: String },
}
