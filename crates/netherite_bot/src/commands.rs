//! Command handlers.
//!
//! Every handler turns an [`Invocation`] into a [`Reply`]; nothing here is
//! fatal. Upstream failure modes map onto user-facing text: an absent
//! subject gets an informative message, transport or decode failures get a
//! generic "unavailable" notice, and the details go to the log.

use crate::{BotContext, Command, Invocation};
use chrono::Utc;
use netherite_fetch::{
    lookup, BedrockServerFetcher, BugReportFetcher, FetchError, FetchErrorKind, Fetched, Fetcher,
    JavaServerFetcher, NameHistoryFetcher, OrderStatisticsFetcher, ProfileFetcher,
    ServiceHealthFetcher, WikiFetcher, WynncraftFetcher,
};
use netherite_format as fmt;
use netherite_format::{Card, Gesture, RpsOutcome};
use std::time::Duration;
use tracing::{instrument, warn};

/// How long player-centric records stay cached.
const PLAYER_TTL: Duration = Duration::from_secs(28_800);
/// How long server status and service health stay cached.
const SERVER_TTL: Duration = Duration::from_secs(300);

const INVITE_PERMISSIONS: u64 = 379_968;

/// What the bot says back.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain message content.
    Text(String),
    /// An embed, possibly with an attachment.
    Card(Box<Card>),
}

impl Reply {
    fn card(card: Card) -> Self {
        Reply::Card(Box::new(card.at(Utc::now())))
    }
}

/// Gateway-derived facts a handler may need.
#[derive(Debug, Clone, Copy)]
pub struct GatewayInfo {
    /// Number of guilds the bot is in.
    pub guild_count: u64,
    /// The bot's own user id.
    pub current_user_id: u64,
    /// Shard heartbeat latency, when the gateway has measured one.
    pub latency_ms: Option<u64>,
}

fn usage(text: &str) -> Reply {
    Reply::Text(fmt::question(text))
}

fn not_found(text: &str) -> Reply {
    Reply::Text(fmt::error(text))
}

fn unavailable(err: &FetchError) -> Reply {
    warn!(error = %err, "Upstream lookup failed");
    Reply::Text(fmt::error(
        "That service is not responding right now. Try again later.",
    ))
}

fn subject(raw: &str) -> String {
    fmt::inline(&fmt::escape(raw, true, false))
}

/// Run one invocation to completion.
#[instrument(skip(ctx, gateway, invocation), fields(command = ?invocation.command()))]
pub async fn execute(ctx: &BotContext, gateway: &GatewayInfo, invocation: &Invocation) -> Reply {
    let args = invocation.args();
    match invocation.command() {
        Command::Profile => profile(ctx, args).await,
        Command::JavaServer => java_server(ctx, args).await,
        Command::BedrockServer => bedrock_server(ctx, args).await,
        Command::ServiceStatus => service_status(ctx).await,
        Command::Wynncraft => wynncraft(ctx, args).await,
        Command::BugReport => bug_report(ctx, args).await,
        Command::Wiki => wiki(ctx, &invocation.text()).await,
        Command::Villager => villager(&invocation.text()),
        Command::Enchant => enchant(&invocation.text()),
        Command::Unenchant => unenchant(&invocation.text()),
        Command::Creeper => Reply::Text("Aw man".to_string()),
        Command::Rps => rps(args),
        Command::Storage => storage(args),
        Command::Comparator => comparator(args),
        Command::ItemsFromStrength => items_from_strength(args),
        Command::TicksToSeconds => ticks_to_seconds(args),
        Command::SecondsToTicks => seconds_to_ticks(args),
        Command::Ping => ping(gateway),
        Command::Info => info(ctx, gateway),
        Command::Stats => stats(ctx, gateway),
        Command::Invite => invite(gateway),
        Command::Vote => vote(gateway),
        Command::LicenseInfo => license_info(),
    }
}

async fn profile(ctx: &BotContext, args: &[String]) -> Reply {
    let Some(username) = args.first() else {
        return usage("Whose profile? Try `profile <username>`.");
    };
    let fetcher = ProfileFetcher::new(ctx.http().clone());
    match lookup(ctx.cache(), &fetcher, username, PLAYER_TTL).await {
        Ok(Fetched::Found(profile)) => {
            let history = NameHistoryFetcher::new(ctx.http().clone());
            let names = match lookup(ctx.cache(), &history, &profile.id, PLAYER_TTL).await {
                Ok(Fetched::Found(names)) => names,
                Ok(Fetched::NotFound) => Vec::new(),
                Err(e) => {
                    warn!(error = %e, "Name history lookup failed, rendering without it");
                    Vec::new()
                }
            };
            Reply::card(fmt::profile_card(&profile, &names))
        }
        Ok(Fetched::NotFound) => not_found(&format!(
            "{} is not a Minecraft username.",
            subject(username)
        )),
        Err(e) => unavailable(&e),
    }
}

/// Fold `host port` and `host:port` argument forms into one subject string.
/// A port embedded in the host wins over a separate port argument.
fn server_subject(args: &[String]) -> Result<String, Reply> {
    let Some(host) = args.first() else {
        return Err(usage("Which server? Try `server <address> [port]`."));
    };
    match args.get(1) {
        Some(port) if !host.contains(':') => match port.parse::<u16>() {
            Ok(port) => Ok(format!("{host}:{port}")),
            Err(_) => Err(not_found(&format!("{} is not a valid port.", subject(port)))),
        },
        _ => Ok(host.clone()),
    }
}

async fn java_server(ctx: &BotContext, args: &[String]) -> Reply {
    let address = match server_subject(args) {
        Ok(address) => address,
        Err(reply) => return reply,
    };
    let address = address.as_str();
    let fetcher = JavaServerFetcher::new(ctx.http().clone(), ctx.settings().api_base.clone());
    match lookup(ctx.cache(), &fetcher, address, SERVER_TTL).await {
        Ok(Fetched::Found(status)) => Reply::card(fmt::java_server_card(address, &status)),
        Ok(Fetched::NotFound) => not_found(&format!(
            "{} is not online, or is blocking status pings.",
            subject(address)
        )),
        Err(e) => match e.kind() {
            FetchErrorKind::InvalidSubject(_) => not_found(&format!(
                "{} is not a valid server address.",
                subject(address)
            )),
            _ => unavailable(&e),
        },
    }
}

async fn bedrock_server(ctx: &BotContext, args: &[String]) -> Reply {
    let address = match server_subject(args) {
        Ok(address) => address,
        Err(reply) => return reply,
    };
    let address = address.as_str();
    let fetcher = BedrockServerFetcher::new(ctx.http().clone(), ctx.settings().api_base.clone());
    match lookup(ctx.cache(), &fetcher, address, SERVER_TTL).await {
        Ok(Fetched::Found(status)) => Reply::card(fmt::bedrock_server_card(address, &status)),
        Ok(Fetched::NotFound) => not_found(&format!(
            "{} is not online, or is blocking status pings.",
            subject(address)
        )),
        Err(e) => match e.kind() {
            FetchErrorKind::InvalidSubject(_) => not_found(&format!(
                "{} is not a valid server address.",
                subject(address)
            )),
            _ => unavailable(&e),
        },
    }
}

async fn service_status(ctx: &BotContext) -> Reply {
    let health_fetcher =
        ServiceHealthFetcher::new(ctx.http().clone(), ctx.settings().api_base.clone());
    let health = match lookup(ctx.cache(), &health_fetcher, "mojang", SERVER_TTL).await {
        Ok(Fetched::Found(health)) => health,
        Ok(Fetched::NotFound) => {
            return not_found("The service health check came back empty. Try again later.");
        }
        Err(e) => return unavailable(&e),
    };

    // Sales are garnish; the card renders without them.
    let sales_fetcher = OrderStatisticsFetcher::new(ctx.http().clone());
    let sales = match lookup(ctx.cache(), &sales_fetcher, "minecraft", SERVER_TTL).await {
        Ok(Fetched::Found(sales)) => Some(sales),
        Ok(Fetched::NotFound) => None,
        Err(e) => {
            warn!(error = %e, "Sales lookup failed, rendering status without it");
            None
        }
    };

    Reply::card(fmt::service_status_card(&health, sales.as_ref()))
}

async fn wynncraft(ctx: &BotContext, args: &[String]) -> Reply {
    let Some(username) = args.first() else {
        return usage("Whose stats? Try `wyncraft <username>`.");
    };
    let fetcher = WynncraftFetcher::new(ctx.http().clone());
    match lookup(ctx.cache(), &fetcher, username, PLAYER_TTL).await {
        Ok(Fetched::Found(stats)) => {
            let profiles = ProfileFetcher::new(ctx.http().clone());
            let skin = match lookup(ctx.cache(), &profiles, username, PLAYER_TTL).await {
                Ok(Fetched::Found(profile)) => Some(profile.skin_url()),
                Ok(Fetched::NotFound) => None,
                Err(e) => {
                    warn!(error = %e, "Skin lookup failed, rendering without a thumbnail");
                    None
                }
            };
            Reply::card(fmt::wynncraft_card(&stats, skin))
        }
        Ok(Fetched::NotFound) => not_found(&format!(
            "{} has never logged onto Wynncraft.",
            subject(username)
        )),
        Err(e) => unavailable(&e),
    }
}

async fn bug_report(ctx: &BotContext, args: &[String]) -> Reply {
    let Some(key) = args.first() else {
        return usage("Which issue? Try `mcbug <key>`, e.g. `mcbug MC-4`.");
    };
    // Issue keys are not cached: bug state changes faster than a TTL can
    // track, and stale vote counts read as wrong answers.
    let fetcher = BugReportFetcher::new(ctx.http().clone());
    match fetcher.fetch(&key.to_ascii_uppercase()).await {
        Ok(Fetched::Found(issue)) => Reply::card(fmt::bug_card(&issue)),
        Ok(Fetched::NotFound) => {
            not_found(&format!("{} is not a bug report I can find.", subject(key)))
        }
        Err(e) => unavailable(&e),
    }
}

async fn wiki(ctx: &BotContext, query: &str) -> Reply {
    if query.is_empty() {
        return usage("Which article? Try `wiki <title>`.");
    }
    let fetcher = WikiFetcher::new(ctx.http().clone());
    match fetcher.fetch(query).await {
        Ok(Fetched::Found(article)) => Reply::card(fmt::wiki_card(&article)),
        Ok(Fetched::NotFound) => not_found(&format!(
            "The wiki has no article named {}.",
            subject(query)
        )),
        Err(e) => unavailable(&e),
    }
}

fn villager(text: &str) -> Reply {
    if text.is_empty() {
        return usage("Say something! Try `villager <message>`.");
    }
    let mut rng = rand::thread_rng();
    Reply::Text(fmt::villager_speech(&mut rng, text))
}

fn enchant(text: &str) -> Reply {
    if text.is_empty() {
        return usage("Enchant what? Try `enchant <message>`.");
    }
    Reply::Text(fmt::enchant(text))
}

fn unenchant(text: &str) -> Reply {
    if text.is_empty() {
        return usage("Unenchant what? Try `unenchant <message>`.");
    }
    Reply::Text(fmt::unenchant(text))
}

fn rps(args: &[String]) -> Reply {
    let gesture = args.first().and_then(|raw| Gesture::parse(raw));
    let Some(user) = gesture else {
        return usage("Pick one of rock, paper, or shears.");
    };
    let bot = Gesture::random(&mut rand::thread_rng());
    let text = match fmt::play_rps(user, bot) {
        RpsOutcome::Tie => format!("We both picked {user}. It's a tie."),
        RpsOutcome::UserWins => format!("You picked {user}, I picked {bot}. You win!"),
        RpsOutcome::BotWins => format!("You picked {user}, I picked {bot}. I win!"),
    };
    Reply::Text(text)
}

fn parse_count(args: &[String]) -> Option<u64> {
    args.first().and_then(|raw| raw.parse().ok())
}

fn storage(args: &[String]) -> Reply {
    let Some(items) = parse_count(args) else {
        return usage("How many items? Try `storage <count>`.");
    };
    let report = fmt::storage_report(items);
    Reply::Text(format!(
        "{} items is {} stacks. You would need {} single chests \
         (or shulker boxes), {} double chests, or {} double chests \
         of shulker boxes.",
        fmt::bold(&items.to_string()),
        fmt::bold(&report.stacks.to_string()),
        fmt::bold(&report.single_chests.to_string()),
        fmt::bold(&report.double_chests.to_string()),
        fmt::bold(&report.chests_of_shulkers.to_string()),
    ))
}

fn comparator(args: &[String]) -> Reply {
    let Some(items) = parse_count(args) else {
        return usage("How many items? Try `comparator <count>`.");
    };
    let strength = fmt::comparator_strength(items);
    Reply::Text(format!(
        "A double chest holding {} items emits a comparator signal of strength {}.",
        fmt::bold(&items.to_string()),
        fmt::bold(&strength.to_string()),
    ))
}

fn items_from_strength(args: &[String]) -> Reply {
    let strength = args.first().and_then(|raw| raw.parse::<u8>().ok());
    let Some(strength) = strength.filter(|s| *s <= 15) else {
        return usage("Which signal strength (0-15)? Try `itemsfromredstone <strength>`.");
    };
    let items = fmt::items_for_strength(strength);
    Reply::Text(format!(
        "A double chest needs at least {} items to emit a comparator signal of strength {}.",
        fmt::bold(&items.to_string()),
        fmt::bold(&strength.to_string()),
    ))
}

fn ticks_to_seconds(args: &[String]) -> Reply {
    let Some(ticks) = parse_count(args) else {
        return usage("How many ticks? Try `tick2second <ticks>`.");
    };
    Reply::Text(format!(
        "{} ticks is {} seconds.",
        fmt::bold(&ticks.to_string()),
        fmt::bold(&fmt::ticks_to_seconds(ticks).to_string()),
    ))
}

fn seconds_to_ticks(args: &[String]) -> Reply {
    let seconds = args.first().and_then(|raw| raw.parse::<f64>().ok());
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s >= 0.0) else {
        return usage("How many seconds? Try `second2tick <seconds>`.");
    };
    Reply::Text(format!(
        "{} seconds is {} ticks.",
        fmt::bold(&seconds.to_string()),
        fmt::bold(&fmt::seconds_to_ticks(seconds).to_string()),
    ))
}

fn ping(gateway: &GatewayInfo) -> Reply {
    match gateway.latency_ms {
        Some(ms) => Reply::Text(format!("\u{1F3D3} Pong! ({ms} ms)")),
        None => Reply::Text("\u{1F3D3} Pong!".to_string()),
    }
}

fn info(ctx: &BotContext, gateway: &GatewayInfo) -> Reply {
    let card = Card::new()
        .titled("Netherite")
        .described(
            "A Minecraft-themed chat bot: player profiles, server status, \
             wiki and bug-tracker lookups, and redstone arithmetic.",
        )
        .field("Version", env!("CARGO_PKG_VERSION"), true)
        .field("Servers", gateway.guild_count.to_string(), true)
        .field(
            "Uptime",
            uptime_text(ctx.uptime_seconds()),
            true,
        )
        .field("Invite", invite_url(gateway.current_user_id), false);
    Reply::card(card)
}

fn stats(ctx: &BotContext, gateway: &GatewayInfo) -> Reply {
    let card = Card::new()
        .titled("Netherite statistics")
        .field("Servers", gateway.guild_count.to_string(), true)
        .field("Uptime", uptime_text(ctx.uptime_seconds()), true);
    Reply::card(card)
}

fn uptime_text(seconds: u64) -> String {
    let text = fmt::humanize_timedelta(seconds);
    if text.is_empty() {
        "less than a second".to_string()
    } else {
        text
    }
}

fn invite_url(client_id: u64) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={client_id}&permissions={INVITE_PERMISSIONS}&scope=bot"
    )
}

fn invite(gateway: &GatewayInfo) -> Reply {
    Reply::Text(format!(
        "Invite me to your server: {}",
        invite_url(gateway.current_user_id)
    ))
}

fn vote(gateway: &GatewayInfo) -> Reply {
    Reply::Text(format!(
        "Enjoying the bot? Vote for it: https://top.gg/bot/{}/vote",
        gateway.current_user_id
    ))
}

fn license_info() -> Reply {
    Reply::Text(fmt::info(
        "Netherite is free software, dual-licensed under MIT or Apache-2.0. \
         Source and license texts ship with the code repository.",
    ))
}
