// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "mvpbuilder",
    version = "0.1.0",
    about = "Initialize a new MVP Builder project",
    long_about = "mvpbuilder sets up specification-driven development projects with AI assistant \
                  integration. It downloads a project template from GitHub and extracts it into \
                  a new directory (or the current one)."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // holds one of the subcommands defined in the Commands enum
    //
    // It is an Option because running `mvpbuilder` with no subcommand
    // is valid: we show the banner and a short usage guide instead
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// This enum defines our subcommands (currently just init)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new MVP Builder project
    ///
    /// Example: mvpbuilder init my_project
    Init {
        /// Name for your new project directory (or use '.' for current directory)
        ///
        /// This is a positional argument (required, no flag needed)
        project_name: String,

        /// GitHub token to use for API requests (or set GH_TOKEN or GITHUB_TOKEN environment variable)
        ///
        /// This is an optional flag: --github-token <TOKEN>
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        github_token: Option<String>,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (the set of subcommands)
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why Option<Commands>?
//    - Option represents a value that might not exist
//    - None = the user ran the tool bare, so we print the welcome banner
//    - Some(command) = dispatch to that subcommand's handler
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
