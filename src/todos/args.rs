use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todos", version)]
#[command(about = "A todo list with a validated form, rendered as HTML", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "n")]
    Add {
        /// Title of the todo (1-32 characters)
        title: String,

        /// Description of the todo (1-100 characters)
        description: String,
    },

    /// Edit a todo's title and/or description
    #[command(alias = "e")]
    Edit {
        /// Id of the todo
        id: String,

        /// New title (kept when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New description (kept when omitted)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Mark a todo as done
    Done {
        /// Id of the todo
        id: String,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Id of the todo
        id: String,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Only show todos whose title contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Render the todo page as HTML
    Render {
        /// Only show todos whose title contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, page-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
