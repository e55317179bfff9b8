// src/agents/mod.rs
// =============================================================================
// This module is the registry of AI agent templates we can scaffold.
//
// Each registry entry is a plain data record: which repository holds the
// template, which branch to snapshot, and which folder the agent keeps
// its commands in. Supporting a new agent means adding a record here -
// a data change, not a code change.
//
// Rust concepts:
// - const slices: A fixed table baked into the binary, no globals needed
// - &'static str: String data that lives for the whole program
// - Traits: Display makes templates printable (and promptable)
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::pipeline::RepositoryRef;

// One scaffoldable template: an AI assistant and where its starter
// project lives on GitHub
#[derive(Debug, Clone, Serialize)]
pub struct AgentTemplate {
    /// Short identifier, e.g. "claude"
    pub key: &'static str,
    /// Human-readable name shown in the selection prompt
    pub display_name: &'static str,
    /// GitHub repository holding the template
    pub repo_url: &'static str,
    /// Branch to snapshot
    pub branch: &'static str,
    /// Folder (inside the extracted project) where the agent stores its
    /// commands and, possibly, credentials - surfaced in the security notice
    pub agent_folder: &'static str,
}

impl AgentTemplate {
    // Resolves this record's repository URL and branch into the
    // RepositoryRef the pipeline's fetcher consumes
    pub fn repository(&self) -> Result<RepositoryRef> {
        RepositoryRef::from_repo_url(self.repo_url, self.branch)
    }
}

// Display is what inquire's Select renders for each option
impl fmt::Display for AgentTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

// The registry itself - currently a single entry
pub const AGENT_TEMPLATES: &[AgentTemplate] = &[AgentTemplate {
    key: "claude",
    display_name: "Claude",
    repo_url: "https://github.com/akhmat-s/MVP-Builder-CLI",
    branch: "main",
    agent_folder: ".claude",
}];

// Lets the user pick an agent template
//
// With a single registry entry there is nothing to choose, so we just
// announce the selection. With more entries, inquire renders an
// interactive arrow-key menu.
//
// Returns: a clone of the chosen record (they're tiny - five pointers)
pub fn select_agent() -> Result<AgentTemplate> {
    println!("\nChoose your AI assistant:");

    if AGENT_TEMPLATES.len() == 1 {
        let agent = AGENT_TEMPLATES[0].clone();
        println!("  1. {}", agent.display_name);
        println!("\nSelected: {}", agent.display_name);
        return Ok(agent);
    }

    let agent = inquire::Select::new("Select", AGENT_TEMPLATES.to_vec()).prompt()?;
    println!("Selected: {}", agent.display_name);

    Ok(agent)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a const slice instead of a HashMap?
//    - The registry never changes at runtime
//    - A const table is checked at compile time and needs no allocation
//    - Lookup by iteration is fine for a handful of entries
//
// 2. What is &'static str?
//    - A string slice with the 'static lifetime
//    - The text is baked into the binary and lives forever
//    - Perfect for configuration constants
//
// 3. Why implement Display?
//    - Display defines how a value prints with {}
//    - inquire::Select uses it to render each menu option
// -----------------------------------------------------------------------------
