use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Interactive eight-choice menu (default).
    Menu,
    /// List every registered equipment record.
    List,
    /// Look up one record by its code (case-insensitive).
    Find(FindArgs),
    /// Records whose name contains the given text.
    Search(SearchArgs),
    /// Records ordered by power draw, lowest first.
    Sorted,
    /// Capability counts and power totals.
    Stats,
    /// Full summary of one record.
    Show(ShowArgs),
    /// Take a reading, send an instruction and print the logbook tail.
    Exercise(ExerciseArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Equipment code, e.g. UB-001
    pub code: String,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in equipment names
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Equipment code
    pub code: String,
}

#[derive(Clone, Debug, Args)]
pub struct ExerciseArgs {
    /// Equipment code
    pub code: String,

    /// Instruction for actionable records, e.g. ABRIR or "VELOCIDAD 80"
    #[arg(short, long)]
    pub instruction: Option<String>,
}
