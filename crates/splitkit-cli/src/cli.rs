//! Command line definition

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Split an HTML document into HTML, CSS and JS, or combine them back
#[derive(Debug, Parser)]
#[command(name = "splitkit", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move inline <style> and <script> content into style.css and script.js
    Split {
        /// HTML file to split; stdin when omitted or `-`
        input: Option<PathBuf>,

        /// Write index.html, style.css and script.js into this directory
        /// instead of printing them
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Inline CSS and JS into an HTML document
    Combine {
        /// HTML file; `-` reads stdin
        #[arg(long, value_name = "FILE")]
        html: PathBuf,

        /// Stylesheet to inline
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,

        /// Script to inline
        #[arg(long, value_name = "FILE")]
        js: Option<PathBuf>,

        /// Output file, or a directory to save the configured download
        /// filename into; stdout when omitted
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
