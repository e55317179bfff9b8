// src/pipeline/mod.rs
// =============================================================================
// This module contains the download-and-extract pipeline.
//
// Submodules:
// - fetch: Downloads a branch snapshot ZIP from GitHub's zipball endpoint
// - extract: Unpacks the archive into the target, stripping the wrapper folder
// - error: The typed failure taxonomy shared by both stages
//
// The two stages run in strict sequence: fetch produces a temp-file path,
// extract consumes it (and deletes it on success). A failure at either
// stage aborts the run - there is no retry and no feedback loop.
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod error;
mod extract;
mod fetch;

// Re-export public items from submodules
// This lets users write `pipeline::fetch()` instead of
// `pipeline::fetch::fetch()`
pub use error::PipelineError;
pub use extract::extract;
pub use fetch::{fetch, DownloadResult, RepositoryRef};

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When you have a directory as a module (like src/pipeline/), the
//      mod.rs file inside it is the module root
//    - It's like index.js in JavaScript or __init__.py in Python
//
// 2. Why use 'pub use'?
//    - It re-exports items from submodules
//    - Makes the API cleaner for users of this module
//    - They don't need to know about our internal organization
//
// 3. Module privacy:
//    - By default, modules are private
//    - We explicitly choose what to make public with 'pub'
//    - This gives us control over our API surface
// -----------------------------------------------------------------------------
