use std::path::PathBuf;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stubgen")]
#[command(about = "Generate C wrapper stubs from a marker-annotated definitions file")]
pub struct Args {
    #[arg(value_name = "INPUT", default_value = "gldef.in")]
    pub input : PathBuf,

    #[arg(short, long, value_enum, default_value_t = Emit::Stubs)]
    pub emit : Emit,

    /// Prefix of the function the stub body calls through
    #[arg(long, value_name = "PREFIX", default_value = "ldrp")]
    pub call_prefix : String,

    /// Replacement for the PREFIX marker in the stub header
    #[arg(long, value_name = "PREFIX", default_value = "exp")]
    pub export_prefix : String,

    /// Report malformed lines and continue instead of aborting
    #[arg(short, long)]
    pub keep_going : bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose : u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// Wrapper bodies forwarding to the call-prefixed pointer
    #[default]
    Stubs,
    /// Wrapper bodies resolving the target through GL_GetProcAddress
    Lazy,
    /// extern function pointer declarations
    Pointers,
    /// Parsed records as JSON
    Json,
}
