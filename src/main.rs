// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the init handler (or print the welcome banner)
// 3. Run the download-and-extract pipeline against the chosen template
// 4. Exit with proper code (0 = success/cancel, 1 = expected failure,
//    2 = unexpected error)
//
// Rust concepts used:
// - async/await: The download is network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands and errors
// =============================================================================

// Module declarations - tells Rust about our other source files
mod agents; // src/agents/ - the AI agent template registry
mod cli; // src/cli.rs - command-line parsing
mod pipeline; // src/pipeline/ - download-and-extract pipeline

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use pipeline::PipelineError;
use std::path::PathBuf;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

const BANNER: &str = "
╔════════════════════════════════════════════════════════════════╗
║                        MVP BUILDER                             ║
║              Specification-Driven Development CLI              ║
╚════════════════════════════════════════════════════════════════╝
";

// The #[tokio::main] attribute transforms our async main into a real main
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = project initialized (or user cancelled)
//   Ok(1) = expected failure (download/extract error, directory exists)
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init {
            project_name,
            github_token,
        }) => handle_init(&project_name, github_token).await,
        None => {
            // Bare invocation: show the banner and a short guide
            print_welcome();
            Ok(0)
        }
    }
}

// Handles the 'init' subcommand - the whole scaffolding flow
//
// Parameters:
//   project_name: new directory name, or "." for the current directory
//   github_token: optional token from --github-token (env vars are the
//                 fallback, checked below)
async fn handle_init(project_name: &str, github_token: Option<String>) -> Result<i32> {
    let agent = agents::select_agent()?;

    let is_current_dir = project_name == ".";

    // Resolve the extraction target before any network work, so a bad
    // target never costs the user a download
    let target_dir: PathBuf = if is_current_dir {
        let dir = std::env::current_dir()?;
        println!("\n📂 Target directory: {} (current directory)", dir.display());

        // Extracting over existing files overwrites them, so ask first
        if dir.read_dir()?.next().is_some() {
            let proceed = inquire::Confirm::new("Current directory is not empty. Continue anyway?")
                .with_default(false)
                .prompt()?;
            if !proceed {
                println!("Cancelled.");
                return Ok(0);
            }
        }
        dir
    } else {
        println!("\n📂 Project name: {}", project_name);
        let dir = std::env::current_dir()?.join(project_name);

        if dir.exists() {
            eprintln!("❌ Error: Directory '{}' already exists", project_name);
            return Ok(1);
        }
        dir
    };

    // --github-token wins; GH_TOKEN and GITHUB_TOKEN are the fallbacks
    let token = github_token
        .or_else(|| std::env::var("GH_TOKEN").ok())
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let repo = agent.repository()?;

    println!("\n🌐 Downloading template from {}...", agent.repo_url);
    let download = match pipeline::fetch(&repo, token.as_deref()).await {
        Ok(download) => download,
        Err(e) => return Ok(report_pipeline_error(e)),
    };
    println!("✅ Template downloaded successfully");

    // Only create the project directory once the download succeeded
    if !is_current_dir {
        std::fs::create_dir_all(&target_dir)?;
        println!("✅ Created directory: {}", project_name);
    }

    println!("📦 Extracting template to {}...", target_dir.display());
    if let Err(e) = pipeline::extract(&download.archive_path, &target_dir) {
        return Ok(report_pipeline_error(e));
    }
    println!("✅ Template extracted successfully");

    print_completion_message(project_name, agent.agent_folder);

    Ok(0)
}

// Prints a pipeline failure in a user-friendly way and picks the exit code
//
// The 404 case gets special treatment: GitHub answers 404 for private
// repositories too, so we point the user at --github-token
fn report_pipeline_error(err: PipelineError) -> i32 {
    eprintln!("❌ Error: {}", err);

    if matches!(err, PipelineError::NotFound) {
        eprintln!("💡 Tip: If this is a private repository, provide a GitHub token with --github-token");
    }

    1 // Exit code 1 = expected, reportable failure
}

// Prints the banner and usage guide shown on a bare `mvpbuilder` run
fn print_welcome() {
    println!("{}", BANNER);
    println!("Initialize a new MVP Builder project");
    println!();
    println!("This command will:");
    println!("  1. Let you choose your AI assistant");
    println!("  2. Download the appropriate template from GitHub");
    println!("  3. Extract the template to a new project directory or current directory");
    println!("  4. Set up AI assistant commands");
    println!();
    println!("Usage:");
    println!("  mvpbuilder init <project_name>  - Create a new project");
    println!("  mvpbuilder init .               - Initialize in current directory");
    println!();
    println!("Examples:");
    println!("  mvpbuilder init my_project");
    println!("  mvpbuilder init my_project --github-token=token");
    println!("  mvpbuilder init .");
    println!();
    println!("For more information, run: mvpbuilder init --help");
}

// Prints the completion message with next steps
//
// Parameters:
//   project_name: what the user asked for ("." means current directory)
//   agent_folder: where the agent keeps its commands (for the security note)
fn print_completion_message(project_name: &str, agent_folder: &str) {
    let is_current_dir = project_name == ".";

    println!("\n✅ Project initialized successfully!\n");

    println!("⚠️  Security Notice:");
    println!("Some agents may store credentials, auth tokens, or other identifying and private artifacts in the agent folder within your project.");
    println!(
        "Consider adding {} (or parts of it) to .gitignore to prevent accidental credential leakage.\n",
        agent_folder
    );

    if is_current_dir {
        println!("You're already in the project directory!\n");
    } else {
        println!("Go to the project folder: cd {}\n", project_name);
    }

    println!("Start using slash commands with your AI agent:");
    println!("  /docs:prd - Create PRD");
    println!("  /docs:clarify - Clarify PRD");
    println!("  /docs:feature - Create features files from PRD\n");
}
