use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use fb_core::{
    Category, FamilyMember, QuickAction, Sentiment, TimeRange, UNKNOWN_ACTION_REPLY, UserProfile,
    analyze_text, build_report, chatbot_response, check_in, complete_activity, contextual_advice,
    detect_concerning_patterns, emotion_glyph, emotions, generate_suggestions, home_summary,
    household_stats, improvement_suggestion, quick_action, recommend_activities, today,
};
use fb_store::{Config, Store, db_path, default_base_dir};

#[derive(Parser)]
#[command(name = "fb", about = "FamilyBond household check-ins, insights and coaching")]
struct Cli {
    /// Data directory (defaults to $FB_DATA_DIR, then ~/.familybond)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the household profile
    Onboard {
        /// Your name
        name: String,

        /// Your role in the family
        #[arg(long, default_value = "parent")]
        role: String,

        /// Additional member as NAME:ROLE (repeatable)
        #[arg(long = "member", value_name = "NAME:ROLE")]
        members: Vec<String>,
    },

    /// Today's check-in, weekly progress and top recommendations
    Home {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage family members
    Member {
        #[command(subcommand)]
        command: MemberCommand,
    },

    /// Log how you (or a family member) feel
    LogMood {
        /// Emotion id, e.g. happy, stressed
        mood: String,

        /// Free-text note, scored for sentiment
        #[arg(long)]
        note: Option<String>,

        /// Member name or id (defaults to you)
        #[arg(long)]
        member: Option<String>,
    },

    /// Record a completed family activity
    Complete {
        /// Activity id
        activity_id: String,
    },

    /// Browse the activity catalog
    Activities {
        /// daily, weekly or monthly
        #[arg(long)]
        category: Option<Category>,

        /// Text to match in title or description
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Activities suited to the household's recent moods
    Recommend,

    /// Check recent check-ins for sustained negative moods
    Risk {
        #[arg(long)]
        member: Option<String>,
    },

    /// Coping suggestions for a mood
    Suggest { mood: String },

    /// Score a piece of text for sentiment
    Analyze { text: String },

    /// Talk to the family coach
    Chat { message: String },

    /// Advice for a mood and family role
    Advice {
        mood: String,

        /// Role to advise (defaults to your profile role)
        #[arg(long)]
        role: Option<String>,
    },

    /// Quick coaching: tips, mood, conflict, bonding or improve
    Coach { action: String },

    /// Mood trend report
    Report {
        #[arg(long)]
        member: Option<String>,

        /// week or month (defaults to config)
        #[arg(long)]
        range: Option<TimeRange>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show household statistics
    Stats,

    /// Export household data to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Import household data from a JSON file, replacing what is stored
    Import {
        /// Input file path
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum MemberCommand {
    /// Add a family member
    Add {
        name: String,
        #[arg(long)]
        role: String,
    },
    /// List family members
    List,
}

struct Env {
    store: Store,
    config: Config,
}

fn base_dir(cli: &Cli) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| std::env::var("FB_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(default_base_dir)
}

fn open_env(cli: &Cli) -> Result<Env> {
    let base = base_dir(cli);
    std::fs::create_dir_all(&base)
        .with_context(|| format!("failed to create {}", base.display()))?;
    let config = Config::load(&base).context("failed to load config.toml")?;
    let store = Store::open(&db_path(&base)).context("failed to open household store")?;
    Ok(Env { store, config })
}

fn require_user(store: &Store) -> Result<UserProfile> {
    store
        .load_user()
        .context("failed to load profile")?
        .ok_or_else(|| anyhow!("no household profile yet; run `fb onboard <name>` first"))
}

/// Resolve `--member` by id or case-insensitive name, defaulting to the user.
fn resolve_member(store: &Store, member: Option<&str>) -> Result<FamilyMember> {
    let user = require_user(store)?;
    let Some(wanted) = member else {
        return Ok(user.as_member());
    };
    store
        .load_family_members()
        .context("failed to load family members")?
        .into_iter()
        .find(|m| m.id == wanted || m.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| anyhow!("no family member named '{wanted}'"))
}

fn parse_member_spec(spec: &str) -> Result<FamilyMember> {
    let (name, role) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("member must be NAME:ROLE, got '{spec}'"))?;
    Ok(FamilyMember::new(name, role)?)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Onboard {
            name,
            role,
            members,
        } => cmd_onboard(&cli, name, role, members),
        Commands::Home { json } => cmd_home(&cli, *json),
        Commands::Member { command } => match command {
            MemberCommand::Add { name, role } => cmd_member_add(&cli, name, role),
            MemberCommand::List => cmd_member_list(&cli),
        },
        Commands::LogMood { mood, note, member } => {
            cmd_log_mood(&cli, mood, note.as_deref(), member.as_deref())
        }
        Commands::Complete { activity_id } => cmd_complete(&cli, activity_id),
        Commands::Activities { category, query } => cmd_activities(&cli, *category, query),
        Commands::Recommend => cmd_recommend(&cli),
        Commands::Risk { member } => cmd_risk(&cli, member.as_deref()),
        Commands::Suggest { mood } => cmd_suggest(mood),
        Commands::Analyze { text } => cmd_analyze(text),
        Commands::Chat { message } => cmd_chat(&cli, message),
        Commands::Advice { mood, role } => cmd_advice(&cli, mood, role.as_deref()),
        Commands::Coach { action } => cmd_coach(&cli, action),
        Commands::Report {
            member,
            range,
            json,
        } => cmd_report(&cli, member.as_deref(), *range, *json),
        Commands::Stats => cmd_stats(&cli),
        Commands::Export { path } => cmd_export(&cli, path),
        Commands::Import { path } => cmd_import(&cli, path),
    }
}

fn cmd_onboard(cli: &Cli, name: &str, role: &str, members: &[String]) -> Result<()> {
    let env = open_env(cli)?;
    let user = UserProfile::new(name, role)?;
    let members = members
        .iter()
        .map(|s| parse_member_spec(s))
        .collect::<Result<Vec<_>>>()?;
    env.store
        .onboard(&user, &members)
        .context("failed to onboard")?;

    println!("welcome, {} ({})", user.name, user.role);
    println!("household: {} member(s)", members.len() + 1);
    Ok(())
}

fn cmd_home(cli: &Cli, json: bool) -> Result<()> {
    let env = open_env(cli)?;
    let user = require_user(&env.store)?;
    let catalog = env
        .store
        .load_activity_catalog()
        .context("failed to load activities")?;
    let household = env.store.load_household().context("failed to load data")?;
    let summary = home_summary(
        &catalog,
        &household.mood_logs,
        &household.family_members,
        &household.activity_logs,
        &user.id,
        today(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("hello, {}!", user.name);
    match &summary.today_mood {
        Some(entry) => println!("today:       {} {}", emotion_glyph(&entry.mood), entry.mood),
        None => println!("today:       not checked in yet (fb log-mood <mood>)"),
    }
    println!(
        "this week:   {}/7 activities ({:.0}%)",
        summary.weekly_activities,
        summary.weekly_progress * 100.0
    );
    println!("recommended:");
    for a in &summary.recommendations {
        println!("  {:>3}  {}", a.id, a.title);
    }
    if let Some(concern) = &summary.concern {
        println!("concern:     {} - {}", concern.level, concern.message);
    }
    Ok(())
}

fn cmd_member_add(cli: &Cli, name: &str, role: &str) -> Result<()> {
    let env = open_env(cli)?;
    require_user(&env.store)?;
    let member = FamilyMember::new(name, role)?;
    env.store
        .add_family_member(&member)
        .context("failed to add member")?;
    println!("added {} ({}) id={}", member.name, member.role, member.id);
    Ok(())
}

fn cmd_member_list(cli: &Cli) -> Result<()> {
    let env = open_env(cli)?;
    let members = env
        .store
        .load_family_members()
        .context("failed to load family members")?;
    if members.is_empty() {
        println!("(no family members)");
    }
    for m in &members {
        println!("{:<16} {:<10} {}", m.name, m.role, m.id);
    }
    Ok(())
}

fn cmd_log_mood(cli: &Cli, mood: &str, note: Option<&str>, member: Option<&str>) -> Result<()> {
    let env = open_env(cli)?;
    let member = resolve_member(&env.store, member)?;
    let result = check_in(emotions(), &member.id, mood, note)?;
    env.store
        .append_mood_log(&result.entry)
        .context("failed to save mood")?;

    let sentiment = result.entry.sentiment_or_neutral();
    println!(
        "logged {} {} for {} (sentiment: {}, confidence {:.2})",
        emotion_glyph(mood),
        mood,
        member.name,
        sentiment.sentiment,
        sentiment.confidence
    );
    println!("suggestions:");
    for s in result.suggestions {
        println!("  - {s}");
    }
    Ok(())
}

fn cmd_complete(cli: &Cli, activity_id: &str) -> Result<()> {
    let env = open_env(cli)?;
    require_user(&env.store)?;
    let catalog = env
        .store
        .load_activity_catalog()
        .context("failed to load activities")?;
    let members = env
        .store
        .load_family_members()
        .context("failed to load family members")?;
    let entry = complete_activity(&catalog, activity_id, &members)?;
    env.store
        .append_activity_log(&entry)
        .context("failed to save activity")?;
    println!(
        "completed '{}' ({} min) with {} participant(s)",
        entry.activity_title,
        entry.duration_minutes,
        entry.participant_ids.len()
    );
    Ok(())
}

fn cmd_activities(cli: &Cli, category: Option<Category>, query: &str) -> Result<()> {
    let env = open_env(cli)?;
    let catalog = env
        .store
        .load_activity_catalog()
        .context("failed to load activities")?;
    let found = catalog.search(category, query);
    if found.is_empty() {
        println!("(no matching activities)");
    }
    for a in found {
        println!(
            "{:>3}  {:<28} {:>3} min  {}",
            a.id, a.title, a.duration_minutes, a.category
        );
    }
    Ok(())
}

fn cmd_recommend(cli: &Cli) -> Result<()> {
    let env = open_env(cli)?;
    let catalog = env
        .store
        .load_activity_catalog()
        .context("failed to load activities")?;
    let household = env.store.load_household().context("failed to load data")?;
    let recommended = recommend_activities(
        &catalog,
        &household.mood_logs,
        &household.family_members,
        &household.activity_logs,
    );
    for a in &recommended {
        println!("{:>3}  {:<28} {}", a.id, a.title, a.description);
    }
    Ok(())
}

fn cmd_risk(cli: &Cli, member: Option<&str>) -> Result<()> {
    let env = open_env(cli)?;
    let member = resolve_member(&env.store, member)?;
    let logs = env.store.load_mood_logs().context("failed to load moods")?;
    match detect_concerning_patterns(&logs, &member.id) {
        Some(p) => {
            println!(
                "{} risk: {:.0}% negative over {} check-ins",
                p.level, p.percentage, p.sample_size
            );
            println!("{}", p.message);
        }
        None => println!("no concerning pattern for {}", member.name),
    }
    Ok(())
}

fn cmd_suggest(mood: &str) -> Result<()> {
    for s in generate_suggestions(mood, Sentiment::Neutral) {
        println!("- {s}");
    }
    Ok(())
}

fn cmd_analyze(text: &str) -> Result<()> {
    let record = analyze_text(text);
    println!(
        "sentiment: {}, confidence: {:.2}",
        record.sentiment, record.confidence
    );
    Ok(())
}

fn cmd_chat(cli: &Cli, message: &str) -> Result<()> {
    let env = open_env(cli)?;
    let mut rng = match env.config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    println!("{}", chatbot_response(message, &mut rng));
    Ok(())
}

fn cmd_advice(cli: &Cli, mood: &str, role: Option<&str>) -> Result<()> {
    let env = open_env(cli)?;
    let role = match role {
        Some(r) => r.to_lowercase(),
        None => env
            .store
            .load_user()
            .context("failed to load profile")?
            .map(|u| u.role)
            .unwrap_or(env.config.default_role),
    };
    println!("{}", contextual_advice(mood, &role));
    Ok(())
}

fn cmd_coach(cli: &Cli, action: &str) -> Result<()> {
    let env = open_env(cli)?;
    let household = env.store.load_household().context("failed to load data")?;

    if action.eq_ignore_ascii_case("improve") {
        println!(
            "{}",
            improvement_suggestion(&household.activity_logs, &household.mood_logs)
        );
        return Ok(());
    }

    let Ok(action) = action.parse::<QuickAction>() else {
        println!("{UNKNOWN_ACTION_REPLY}");
        return Ok(());
    };
    let (user_id, role) = match &household.user {
        Some(u) => (u.id.as_str(), u.role.as_str()),
        None => ("", env.config.default_role.as_str()),
    };
    println!(
        "{}",
        quick_action(action, &household.mood_logs, user_id, Some(role))
    );
    Ok(())
}

fn cmd_report(
    cli: &Cli,
    member: Option<&str>,
    range: Option<TimeRange>,
    json: bool,
) -> Result<()> {
    let env = open_env(cli)?;
    let member = resolve_member(&env.store, member)?;
    let household = env.store.load_household().context("failed to load data")?;
    let range = range.unwrap_or(env.config.report_range);

    let report = build_report(
        emotions(),
        &household.mood_logs,
        &household.activity_logs,
        &member.id,
        range,
        today(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} - past {}", member.name, report.range);
    for p in &report.points {
        match p.score {
            Some(score) => println!("  {}  {}", p.date, "#".repeat(score as usize)),
            None => println!("  {}  -", p.date),
        }
    }
    println!("check-ins:   {}", report.total_mood_logs);
    println!("activities:  {}", report.total_activities);
    println!("avg score:   {:.1}", report.average_score);
    if let Some(top) = &report.top_emotion {
        println!("top emotion: {} {}", emotion_glyph(top), top);
    }
    if let Some(concern) = &report.concern {
        println!("concern:     {} - {}", concern.level, concern.message);
    }
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let env = open_env(cli)?;
    let user = require_user(&env.store)?;
    let household = env.store.load_household().context("failed to load data")?;
    let stats = household_stats(&user.id, &household.mood_logs, &household.activity_logs);

    println!("user:        {} ({})", user.name, user.role);
    println!("members:     {}", household.family_members.len());
    println!("mood logs:   {}", stats.mood_logs);
    println!("activities:  {}", stats.activities);
    Ok(())
}

fn cmd_export(cli: &Cli, path: &Path) -> Result<()> {
    let env = open_env(cli)?;
    env.store
        .export_json_file(path)
        .context("failed to export household")?;
    println!("exported to {}", path.display());
    Ok(())
}

fn cmd_import(cli: &Cli, path: &Path) -> Result<()> {
    let env = open_env(cli)?;
    env.store
        .import_json_file(path)
        .context("failed to import JSON")?;

    let household = env
        .store
        .load_household()
        .context("failed to load data after import")?;
    println!(
        "imported from {}. members={}, mood logs={}, activities={}",
        path.display(),
        household.family_members.len(),
        household.mood_logs.len(),
        household.activity_logs.len()
    );
    Ok(())
}
