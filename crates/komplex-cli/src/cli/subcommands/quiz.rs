use clap::Subcommand;

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Create a quiz from a JSON file of questions.
    Create {
        #[arg(long)]
        course: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Time limit in minutes.
        #[arg(long, default_value_t = 30)]
        time_limit: u32,
        #[arg(long, default_value_t = 70)]
        passing_score: u8,
        /// JSON array of `{question, options[4], correctAnswer, points}`.
        #[arg(long)]
        questions: String,
    },
    /// List a course's quizzes.
    List {
        #[arg(long)]
        course: String,
    },
    /// Get a quiz by ID.
    Get { id: String },
    /// Delete a quiz.
    Delete { id: String },
    /// Grade an attempt and mark the quiz taken.
    Submit {
        id: String,
        #[arg(long)]
        student: String,
        /// Comma-separated option indexes; `-` leaves a question unanswered.
        #[arg(long, default_value = "")]
        answers: String,
    },
}
