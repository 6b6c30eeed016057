pub mod corrections;
pub mod departments;
pub mod duty;
pub mod init;
pub mod issues;
pub mod options;
pub mod summary;
pub mod trend;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Employee performance summary from a visit log")]
    Summary(summary::SummaryArgs),
    #[command(about = "Department summary from a visit log")]
    Departments(departments::DepartmentsArgs),
    #[command(about = "Duty analysis of security supervisors")]
    Duty(duty::DutyArgs),
    #[command(about = "ERP correction analysis per officer")]
    Corrections(corrections::CorrectionsArgs),
    #[command(about = "IT issue timelines and assignee summary")]
    Issues(issues::IssuesArgs),
    #[command(about = "Month-over-month achievement trend")]
    Trend(trend::TrendArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
            Commands::Departments(args) => departments::cmd(args),
            Commands::Duty(args) => duty::cmd(args),
            Commands::Corrections(args) => corrections::cmd(args),
            Commands::Issues(args) => issues::cmd(args),
            Commands::Trend(args) => trend::cmd(args),
        }
    }
}
