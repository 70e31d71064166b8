use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use resumatch::models::{MatchReport, ResumeProfile};
use resumatch::{
    ClaudeProvider, Config, PlainTextExtractor, ResumeParser, SimilarityMatcher, SkillProvider,
    SkillVocabulary, TextExtractor,
};

#[derive(Parser, Debug)]
#[command(name = "resumatch")]
#[command(version = "0.1.0")]
#[command(about = "Parse resumes and match skills against job descriptions")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract skills and total experience from a resume document
    Parse {
        /// Path to the resume document
        document: PathBuf,

        /// Newline-delimited skill list replacing the built-in vocabulary
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Extract skills via the Claude API instead of the lexical detector
        #[arg(long)]
        llm: bool,
    },

    /// Match job-description requirements against a candidate's resume
    Match {
        /// Path to the resume document
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job description document
        #[arg(short, long)]
        job: PathBuf,

        /// Newline-delimited skill list replacing the built-in vocabulary
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("resumatch=info".parse()?)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("ort=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::Parse {
            document,
            skills,
            json,
            llm,
        } => run_parse(&config, &document, skills.as_deref(), json, llm).await,
        Command::Match {
            resume,
            job,
            skills,
            json,
        } => run_match(&config, &resume, &job, skills.as_deref(), json).await,
    }
}

async fn run_parse(
    config: &Config,
    document: &Path,
    skills: Option<&Path>,
    json: bool,
    llm: bool,
) -> anyhow::Result<()> {
    let raw = PlainTextExtractor.extract(document)?;
    let parser = ResumeParser::with_vocabulary(load_vocabulary(skills)?);

    let mut profile = parser.parse(&raw)?;

    if llm {
        let api_key = config.anthropic_api_key.clone().ok_or_else(|| {
            resumatch::Error::Config("ANTHROPIC_API_KEY must be set for --llm".to_string())
        })?;
        let provider = ClaudeProvider::new(api_key, config.llm_model.clone())?;

        tracing::info!("Extracting skills via {}", provider.name());
        match provider.extract_skills(&raw).await {
            Ok(skills) => profile.skills = skills,
            Err(e) => {
                tracing::warn!("LLM skill extraction failed, keeping lexical skills: {e}");
            }
        }
    }

    output(&profile, json, format_profile)
}

async fn run_match(
    config: &Config,
    resume: &Path,
    job: &Path,
    skills: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let resume_text = PlainTextExtractor.extract(resume)?;
    let job_text = PlainTextExtractor.extract(job)?;

    let parser = ResumeParser::with_vocabulary(load_vocabulary(skills)?);
    let candidate = parser.parse(&resume_text)?;
    let requirements = parser.parse(&job_text)?.skills;

    tracing::info!(
        "Matching {} requirements against {} candidate skills",
        requirements.len(),
        candidate.skills.len()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Embedding and matching skills...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let matcher = SimilarityMatcher::with_default_model()?;
    let report = matcher
        .match_requirements(&requirements, &candidate.skills, config.concurrency_limit)
        .await?;

    pb.finish_and_clear();

    output(&report, json, format_report)
}

fn load_vocabulary(skills: Option<&Path>) -> anyhow::Result<SkillVocabulary> {
    Ok(match skills {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::with_default(),
    })
}

fn output<T: serde::Serialize>(
    value: &T,
    json: bool,
    format: fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", format(value));
    }
    Ok(())
}

fn format_profile(profile: &ResumeProfile) -> String {
    let skills = if profile.skills.is_empty() {
        "-".to_string()
    } else {
        profile.skills.join(", ")
    };

    format!(
        "Skills Detected  : {}\nTotal Experience : {} years",
        skills, profile.total_experience_years
    )
}

fn format_report(report: &MatchReport) -> String {
    let mut out = String::from("=== Skill Match Report ===\n\n");

    let width = report
        .matches
        .iter()
        .map(|m| m.requirement.len())
        .max()
        .unwrap_or(0);

    for m in &report.matches {
        let matched = m.matched.as_deref().unwrap_or("(no match)");
        out.push_str(&format!("  {:width$} -> {}\n", m.requirement, matched));
    }

    out.push_str(&format!(
        "\nMatched {} of {} requirements\n",
        report.matched_count(),
        report.matches.len()
    ));
    out
}
