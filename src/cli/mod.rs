use crate::{
    budget::BudgetSummary,
    services::gemini_client::{DEFAULT_BASE_URL, DEFAULT_MODEL},
    types::{citation_links, TripPlan},
    GeminiClient, ItineraryParser, Planner, PlannerError, TripRequest, TripSession,
};
use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::{env, io::Read, time::Duration};
use tracing::{error, info};

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => generate(sub).await,
        Some(("parse", sub)) => parse(sub),
        Some(("budget", sub)) => budget(sub),
        Some(("schema", _)) => {
            let schema = crate::schemas::plan_schema()?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        _ => Err(anyhow!("unknown command")),
    }
}

fn command() -> Command {
    let budget_arg = Arg::new("budget")
        .short('b')
        .long("budget")
        .value_name("AMOUNT")
        .help("Total budget for the whole trip")
        .value_parser(value_parser!(f64));
    let days_arg = Arg::new("days")
        .short('d')
        .long("days")
        .value_name("COUNT")
        .help("Trip duration in days")
        .value_parser(value_parser!(u32));
    let json_arg = Arg::new("json")
        .long("json")
        .help("Print the plan and budget as JSON")
        .action(ArgAction::SetTrue);

    Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate travel itineraries with Gemini and track spend against estimates")
        .subcommand_required(true)
        .subcommand(
            Command::new("generate")
                .about("Ask the model for an itinerary and parse it")
                .arg(
                    Arg::new("destination")
                        .help("Where the trip goes")
                        .required(true)
                        .index(1),
                )
                .arg(days_arg.clone().required(true))
                .arg(
                    Arg::new("interests")
                        .short('i')
                        .long("interests")
                        .value_name("TEXT")
                        .help("Interests to plan around, e.g. \"temples, street food\"")
                        .required(true),
                )
                .arg(budget_arg.clone())
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Gemini model to use (or set GEMINI_MODEL)"),
                )
                .arg(
                    Arg::new("api-key")
                        .short('k')
                        .long("api-key")
                        .value_name("KEY")
                        .help("Gemini API key (or set GEMINI_API_KEY env var)"),
                )
                .arg(
                    Arg::new("base-url")
                        .short('u')
                        .long("base-url")
                        .value_name("URL")
                        .help("API base URL (or set GEMINI_BASE_URL)"),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("Give up waiting for the model after this many seconds")
                        .value_parser(value_parser!(u64))
                        .default_value("120"),
                )
                .arg(json_arg.clone()),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an itinerary markdown document offline")
                .arg(
                    Arg::new("file")
                        .help("Markdown file to read, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(budget_arg.clone())
                .arg(days_arg.clone())
                .arg(
                    Arg::new("actual")
                        .short('a')
                        .long("actual")
                        .value_name("DAY:INDEX=AMOUNT")
                        .help("Record an actual cost for the activity at INDEX (0-based) of DAY")
                        .action(ArgAction::Append),
                )
                .arg(json_arg),
        )
        .subcommand(
            Command::new("budget")
                .about("Summarize the budget of an exported plan")
                .arg(
                    Arg::new("plan")
                        .help("Plan JSON file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(budget_arg)
                .arg(days_arg),
        )
        .subcommand(Command::new("schema").about("Print the JSON schema of exported plans"))
}

async fn generate(matches: &ArgMatches) -> anyhow::Result<()> {
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GEMINI_API_KEY").ok())
        .or_else(|| env::var("API_KEY").ok())
        .ok_or_else(|| {
            anyhow!("Gemini API key is required. Set GEMINI_API_KEY or use --api-key")
        })?;

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GEMINI_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model = matches
        .get_one::<String>("model")
        .cloned()
        .or_else(|| env::var("GEMINI_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let destination = matches
        .get_one::<String>("destination")
        .map(String::as_str)
        .unwrap_or_default();
    let interests = matches
        .get_one::<String>("interests")
        .map(String::as_str)
        .unwrap_or_default();
    let days = matches.get_one::<u32>("days").copied().unwrap_or_default();
    let request = TripRequest::new(destination, days, interests)?;

    let client = GeminiClient::new(api_key)
        .with_base_url(base_url.clone())
        .with_model(model.clone());
    let planner = Planner::new(client);
    let mut session =
        TripSession::new().with_total_budget(matches.get_one::<f64>("budget").copied());

    let deadline = Duration::from_secs(matches.get_one::<u64>("timeout").copied().unwrap_or(120));
    info!("Using model: {}", model);
    info!("Base URL: {}", base_url);

    let outcome = match tokio::time::timeout(deadline, session.submit(&planner, &request)).await {
        Ok(result) => result,
        Err(_) => Err(PlannerError::Timeout(format!(
            "no response within {}s",
            deadline.as_secs()
        ))),
    };

    if let Err(e) = outcome {
        error!("Itinerary generation failed: {}", e);
        return Err(anyhow!(e.user_message()));
    }

    let plan = session.plan().cloned().unwrap_or_default();
    print_outcome(&plan, &session.budget(), matches.get_flag("json"))
}

fn parse(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or("-");
    let markdown = read_input(path)?;

    let itinerary = ItineraryParser::new().parse(&markdown);
    let days = matches
        .get_one::<u32>("days")
        .copied()
        .unwrap_or(itinerary.len() as u32);

    let mut session = TripSession::new()
        .with_total_budget(matches.get_one::<f64>("budget").copied())
        .with_duration(days);
    session.replace_plan(TripPlan::new(itinerary, Vec::new()));

    for edit in matches.get_many::<String>("actual").into_iter().flatten() {
        let (day, index, amount) = parse_cost_edit(edit)?;
        if !session.set_actual_cost(day, index, Some(amount))? {
            return Err(anyhow!("no activity {} on day {}", index, day));
        }
    }

    let plan = session.plan().cloned().unwrap_or_default();
    print_outcome(&plan, &session.budget(), matches.get_flag("json"))
}

fn budget(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("plan")
        .map(String::as_str)
        .unwrap_or("-");
    let raw = read_input(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not JSON", path))?;
    let plan = TripPlan::from_json_value(value)?;

    let days = matches
        .get_one::<u32>("days")
        .copied()
        .unwrap_or(plan.itinerary.len() as u32);
    let summary = BudgetSummary::compute(
        &plan.itinerary,
        matches.get_one::<f64>("budget").copied(),
        days,
    );

    print_budget(&summary);
    Ok(())
}

fn read_input(path: &str) -> crate::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|err| {
            PlannerError::Io(std::io::Error::new(
                err.kind(),
                format!("failed to read {}: {}", path, err),
            ))
        })
    }
}

/// Parse `DAY:INDEX=AMOUNT`.
fn parse_cost_edit(raw: &str) -> anyhow::Result<(u32, usize, f64)> {
    let (target, amount) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected DAY:INDEX=AMOUNT, got {}", raw))?;
    let (day, index) = target
        .split_once(':')
        .ok_or_else(|| anyhow!("expected DAY:INDEX=AMOUNT, got {}", raw))?;

    Ok((
        day.trim().parse().with_context(|| format!("bad day in {}", raw))?,
        index
            .trim()
            .parse()
            .with_context(|| format!("bad index in {}", raw))?,
        amount
            .trim()
            .parse()
            .with_context(|| format!("bad amount in {}", raw))?,
    ))
}

fn print_outcome(plan: &TripPlan, summary: &BudgetSummary, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let output = serde_json::json!({ "plan": plan, "budget": summary });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("No itinerary could be recognized in the response.");
        return Ok(());
    }

    for day in &plan.itinerary {
        println!("\nDay {}: {}", day.day, day.date);
        for (index, activity) in day.activities.iter().enumerate() {
            println!("  [{}] {}", index, activity.name);
            if !activity.description.is_empty() {
                println!("      {}", activity.description);
            }
            println!("      Hours: {}", activity.opening_hours);
            println!("      Estimated: {}", activity.estimated_cost);
            if let Some(link) = &activity.check_price_link {
                println!("      Check price: {}", link);
            }
            if let Some(actual) = activity.actual_cost {
                println!("      Actual: {:.2}", actual);
            }
        }
    }

    let links = citation_links(&plan.citations);
    if !links.is_empty() {
        println!("\nSources:");
        for link in links {
            println!("  - {} <{}>", link.label, link.uri);
        }
    }

    println!();
    print_budget(summary);
    Ok(())
}

fn print_budget(summary: &BudgetSummary) {
    println!("Total estimated: {:.2}", summary.total_estimated);
    println!("Total actual:    {:.2}", summary.total_actual);
    if let Some(total) = summary.total_budget {
        println!("Budget:          {:.2}", total);
    }
    if let Some(remaining) = summary.remaining {
        let marker = if summary.is_over_budget() {
            " (over budget)"
        } else {
            ""
        };
        println!("Remaining:       {:.2}{}", remaining, marker);
    }
    if let Some(daily) = summary.average_daily_remaining {
        println!("Per day left:    {:.2}", daily);
    }
}
