use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a course.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        educator: String,
        #[arg(long, default_value = "")]
        educator_name: String,
        /// beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        level: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long)]
        image: Option<String>,
    },
    /// List courses.
    List {
        #[arg(long)]
        educator: Option<String>,
    },
    /// Get a course with its lessons, assignments, and quizzes.
    Get { id: String },
    /// Update a course.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        educator_name: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a course and its lessons, assignments, and quizzes.
    Delete { id: String },
}
