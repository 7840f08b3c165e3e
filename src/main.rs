/*!
 * Command-line interface for ScanFS
 */

use std::io;
use std::path;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};

use scanfs::analysis::Analyzer;
use scanfs::config::{ApiConfig, Args, Config};
use scanfs::error::ScanFsError;
use scanfs::report::{OpOutcome, ReportFormat, Reporter};
use scanfs::scanner::Scanner;
use scanfs::summary::Summary;
use scanfs::tree::TreePrinter;
use scanfs::writer::JsonWriter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            if matches!(e, ScanFsError::Config(_)) {
                eprintln!();
                eprintln!("💡 To fix this:");
                eprintln!("  1. Create a .env file containing:");
                eprintln!("     DEEPSEEK_API_KEY=<your api key>");
                eprintln!("  2. Run the program again");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> scanfs::Result<ExitCode> {
    let args = Args::parse();

    // Shell completions short-circuit everything else
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    // The bearer token is required before any operation runs
    let api_config = ApiConfig::from_env()?;

    let config = Config::from_args(args);

    println!("🚀 ScanFS directory structure agent");
    println!(
        "📍 Scan path: {}",
        path::absolute(&config.target_dir)?.display()
    );
    println!("{}", "-".repeat(50));

    config.validate()?;

    if config.no_operations() {
        Args::command().print_help()?;
        println!("\n💡 Tip: use --all to run every operation");
        return Ok(ExitCode::SUCCESS);
    }

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    let mut outcomes = Vec::new();

    // Fixed operation order: tree, stats, JSON export, AI analysis. Each
    // operation re-walks the filesystem on its own.
    if config.tree {
        println!("\n🌳 File structure tree:");
        let printer = TreePrinter::new(config.show_size);
        let mut stdout = io::stdout().lock();
        printer.render(&config.target_dir, &mut stdout)?;
        outcomes.push(OpOutcome::ok("tree"));
    }

    if config.stats {
        println!("\n📊 Statistics:");
        let structure = Scanner::new(&config.target_dir).scan()?;
        let summary = Summary::of(&structure);
        reporter.print(&reporter.stats_table(&summary, &config.target_dir));
        outcomes.push(OpOutcome::ok("stats"));
    }

    if let Some(json_file) = &config.json_file {
        println!("\n💾 Saving file structure to: {}", json_file.display());
        let structure = Scanner::new(&config.target_dir).scan()?;
        let writer = JsonWriter::new(json_file);
        if writer.save(&structure) {
            outcomes.push(OpOutcome::ok("json").with_detail(json_file.display().to_string()));
        } else {
            outcomes.push(OpOutcome::failed("json", "save failed".to_string()));
        }
    }

    if let Some(question) = &config.question {
        println!("\n🤖 AI analysis:");
        println!("Question: {}", question);
        println!("{}", "-".repeat(50));

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message("🤖 Analyzing file structure with AI...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let analyzer = Analyzer::new(&api_config)?;
        let answer = analyzer.analyze(&config.target_dir, question, config.max_depth)?;

        spinner.finish_and_clear();
        println!("{}", answer);
        println!("{}", "-".repeat(50));
        outcomes.push(OpOutcome::ok("ai"));
    }

    println!("\n✅ Operations complete!");
    reporter.print(&reporter.results_table(&outcomes));

    Ok(ExitCode::SUCCESS)
}
