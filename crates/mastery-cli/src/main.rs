//! Manifest Mastery CLI
//!
//! Headless front end over mastery-core.
//!
//! ## Usage
//!
//! ```bash
//! # List the goal catalog
//! mastery goals
//!
//! # Show the step sequence of a journey
//! mastery steps --variant compact
//!
//! # Render affirmations and gratitude for some goals
//! mastery affirm --goal "Get a promotion" --goal "Increase income"
//!
//! # Render the manifestation script
//! mastery script --goal "Start a business"
//!
//! # Replay a whole session from a JSON answers file
//! mastery run answers.json
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastery_core::template::{render_affirmations, render_script};
use mastery_core::{
    catalog, ActivityBody, BeliefField, GoalDetail, GoalField, Journey, JourneyConfig,
    JourneyVariant, LimitingBelief, PlanLink, PlanLinks, SelectionChange, Step, Transition,
    Wizard,
};
use serde::Deserialize;

/// Manifest Mastery - guided career manifestation
#[derive(Parser)]
#[command(name = "mastery")]
#[command(version = "0.1.0")]
#[command(about = "Manifest Mastery - goals, limiting beliefs, affirmations and a vision board")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON journey configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Step sequence: extended or compact
    #[arg(long, global = true)]
    variant: Option<JourneyVariant>,

    /// Year shown in the vision board title
    #[arg(long, global = true)]
    board_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the career goals on offer
    Goals,

    /// List the steps of the journey
    Steps,

    /// Print affirmation and gratitude statements
    Affirm {
        /// Goal to affirm (repeatable)
        #[arg(short, long = "goal", required = true)]
        goals: Vec<String>,
    },

    /// Print the manifestation script
    Script {
        /// Goal to weave into the script (repeatable)
        #[arg(short, long = "goal", required = true)]
        goals: Vec<String>,
    },

    /// Walk a whole session from an answers file
    Run {
        /// JSON answers file
        answers: PathBuf,
    },
}

/// Answers file replayed by `mastery run`.
///
/// Image paths are resolved relative to the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SessionFile {
    goals: Vec<String>,
    details: HashMap<String, GoalDetail>,
    belief: LimitingBelief,
    images: HashMap<String, PathBuf>,
    plan_links: PlanLinks,
}

impl SessionFile {
    async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
    }
}

fn load_config(cli: &Cli) -> Result<JourneyConfig> {
    let mut config = match &cli.config {
        Some(path) => JourneyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => JourneyConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config = config.with_variant(variant);
    }
    if let Some(year) = cli.board_year {
        config = config.with_board_year(year);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    mastery_core::logging::init(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Goals => {
            println!("Career goals ({}):", catalog::CAREER_GOALS.len());
            println!();
            for (i, goal) in catalog::CAREER_GOALS.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, goal);
            }
            println!();
            println!("Pick up to {}.", config.max_goals);
        }

        Commands::Steps => {
            let journey = Journey::new(config.variant);
            println!("Journey: {} ({} steps)", config.variant, journey.len());
            println!();
            for (i, descriptor) in journey.steps().iter().enumerate() {
                let progress = journey
                    .progress(descriptor.step)
                    .map(|p| format!("  [{}%]", p.percent()))
                    .unwrap_or_default();
                println!(
                    "  {}. {:<13} {}{}",
                    i + 1,
                    descriptor.step.key(),
                    descriptor.step.title(),
                    progress
                );
            }
        }

        Commands::Affirm { goals } => {
            let statements = render_affirmations(&goals, &config.templates);
            println!("Affirmations:");
            for line in &statements.affirmations {
                println!("  {}", line);
            }
            println!();
            println!("Gratitude:");
            for line in &statements.gratitude {
                println!("  {}", line);
            }
        }

        Commands::Script { goals } => {
            println!("{}", render_script(&goals, &config.templates));
        }

        Commands::Run { answers } => {
            let session = SessionFile::load(&answers).await?;
            let base = answers.parent().unwrap_or(Path::new("."));
            let wizard = replay(config, &session, base).await?;
            print_summary(&wizard);
        }
    }

    Ok(())
}

/// Fill in each step the way a user would, then move on.
async fn replay(config: JourneyConfig, session: &SessionFile, base: &Path) -> Result<Wizard> {
    let mut wizard = Wizard::new(config);

    loop {
        let step = wizard.current_step();
        fill_step(&mut wizard, step, session, base).await?;

        match wizard.advance() {
            Transition::Moved { from, to } => {
                tracing::debug!(from = from.key(), to = to.key(), "Replay advanced");
            }
            Transition::Stayed(_) => break,
            Transition::Blocked { step, reason } => {
                anyhow::bail!("Blocked at step '{}': {}", step.title(), reason);
            }
        }
    }

    Ok(wizard)
}

async fn fill_step(
    wizard: &mut Wizard,
    step: Step,
    session: &SessionFile,
    base: &Path,
) -> Result<()> {
    match step {
        Step::Goals => {
            for goal in &session.goals {
                if !catalog::is_catalog_goal(goal) {
                    eprintln!("Note: '{}' is not one of the catalog goals", goal);
                }
                if wizard.select_goal(goal) == SelectionChange::Ignored {
                    eprintln!("Skipping goal '{}': selection is full", goal);
                }
            }
            for (goal, detail) in &session.details {
                if !wizard.answers().goals.contains(goal) {
                    eprintln!("Skipping answers for unselected goal '{}'", goal);
                    continue;
                }
                for field in GoalField::ALL {
                    wizard.set_goal_field_for(goal, field, detail.get(field))?;
                }
            }
        }
        Step::Beliefs => {
            for field in BeliefField::ALL {
                wizard.set_belief_field(field, session.belief.get(field));
            }
        }
        Step::VisionBoard => {
            for (goal, path) in &session.images {
                let path = base.join(path);
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("reading image {}", path.display()))?;
                wizard
                    .upload_vision_image(goal, Some(&bytes))
                    .with_context(|| format!("image for '{}'", goal))?;
            }
        }
        Step::Plan => {
            for link in [PlanLink::Breathing, PlanLink::Silence] {
                wizard.set_plan_link(link, session.plan_links.get(link));
            }
        }
        Step::Welcome
        | Step::Intro
        | Step::Affirmations
        | Step::Script
        | Step::Overview => {}
    }
    Ok(())
}

fn print_summary(wizard: &Wizard) {
    let overview = wizard.overview();

    println!("{}", wizard.config().board_title());
    println!();
    for card in &overview.cards {
        println!("{}", card.goal);
        if let Some(image) = &card.image {
            println!(
                "  Image: {} {}x{}",
                image.format.mime(),
                image.width,
                image.height
            );
        }
        println!("  Goal: {}", card.goal_statement);
        println!("  Limiting belief: {}", card.limiting_belief);
        if let Some(affirmation) = &card.affirmation {
            println!("  Affirmation: {}", affirmation);
        }
        if let Some(gratitude) = &card.gratitude {
            println!("  Gratitude: {}", gratitude);
        }
        println!();
    }
    println!("Manifestation script:");
    for line in overview.script.lines() {
        println!("  {}", line);
    }
    println!();

    match wizard.config().variant {
        JourneyVariant::Extended => print_checklist(wizard),
        JourneyVariant::Compact => print_sheet(wizard),
    }
}

fn print_checklist(wizard: &Wizard) {
    let plan = wizard.practice_plan();
    println!("{} ({} minutes):", Step::Plan.title(), plan.total_minutes());
    for (i, activity) in plan.activities.iter().enumerate() {
        println!("  {}. {} - {} minutes", i + 1, activity.name, activity.minutes);
        match &activity.body {
            ActivityBody::Guidance(text) => println!("     {}", text),
            ActivityBody::Mantra(lines) => {
                for line in lines {
                    println!("     {}", line);
                }
            }
            ActivityBody::Text(text) => {
                for line in text.lines() {
                    println!("     {}", line);
                }
            }
            ActivityBody::Images(images) => {
                let goals: Vec<&str> = images.iter().map(|(goal, _)| goal.as_str()).collect();
                println!("     {}", goals.join(", "));
            }
        }
    }
}

fn print_sheet(wizard: &Wizard) {
    let sheet = wizard.plan_sheet();
    println!("{}:", Step::Plan.title());
    for link in [PlanLink::Breathing, PlanLink::Silence] {
        let value = sheet.links.get(link);
        let value = if value.is_empty() { "-" } else { value };
        println!("  {}: {}", link.label(), value);
    }
    match &sheet.vision_image {
        Some(image) => println!("  Vision image: {}x{}", image.width, image.height),
        None => println!("  Vision image: No image uploaded yet."),
    }
    println!("  Goals: {}", sheet.goal_statement.as_deref().unwrap_or("-"));
    println!("  Limiting belief: {}", sheet.fear);
    println!("  Ho'oponopono: {}", sheet.hooponopono);
    println!("  Gratitude: {}", sheet.gratitude.as_deref().unwrap_or("-"));
    println!("  Affirmation: {}", sheet.affirmation.as_deref().unwrap_or("-"));
}
