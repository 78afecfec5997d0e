//! Prefix-command parsing.
//!
//! A message is a command when it starts with the configured prefix and the
//! first word names a known command. Anything else is silently ignored so
//! ordinary chat never produces bot noise.

use crate::CommandClass;
use derive_getters::Getters;

/// A command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mojang profile lookup.
    Profile,
    /// Java edition server ping.
    JavaServer,
    /// Bedrock edition server ping.
    BedrockServer,
    /// Mojang service health and game sales.
    ServiceStatus,
    /// Wynncraft class statistics.
    Wynncraft,
    /// Mojira bug report lookup.
    BugReport,
    /// Minecraft wiki article extract.
    Wiki,
    /// Villager speech transform.
    Villager,
    /// Standard galactic alphabet transcription.
    Enchant,
    /// Inverse galactic alphabet transcription.
    Unenchant,
    /// Aw man.
    Creeper,
    /// Rock-paper-shears.
    Rps,
    /// Chest/shulker storage planning.
    Storage,
    /// Comparator signal strength from an item count.
    Comparator,
    /// Item count needed for a comparator signal.
    ItemsFromStrength,
    /// Game ticks to seconds.
    TicksToSeconds,
    /// Seconds to game ticks.
    SecondsToTicks,
    /// Liveness check.
    Ping,
    /// About the bot.
    Info,
    /// Guild count and uptime.
    Stats,
    /// Invite link.
    Invite,
    /// Voting link.
    Vote,
    /// License notice.
    LicenseInfo,
}

impl Command {
    /// Resolve a command name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "profile" => Some(Command::Profile),
            "server" => Some(Command::JavaServer),
            "serverpe" => Some(Command::BedrockServer),
            "status" => Some(Command::ServiceStatus),
            "wyncraft" => Some(Command::Wynncraft),
            "mcbug" => Some(Command::BugReport),
            "wiki" => Some(Command::Wiki),
            "villager" => Some(Command::Villager),
            "enchant" => Some(Command::Enchant),
            "unenchant" => Some(Command::Unenchant),
            "creeper" => Some(Command::Creeper),
            "rps" => Some(Command::Rps),
            "storage" => Some(Command::Storage),
            "comparator" => Some(Command::Comparator),
            "itemsfromredstone" => Some(Command::ItemsFromStrength),
            "tick2second" => Some(Command::TicksToSeconds),
            "second2tick" => Some(Command::SecondsToTicks),
            "ping" => Some(Command::Ping),
            "info" => Some(Command::Info),
            "stats" => Some(Command::Stats),
            "invite" => Some(Command::Invite),
            "vote" => Some(Command::Vote),
            "licenseinfo" => Some(Command::LicenseInfo),
            _ => None,
        }
    }

    /// The cooldown class the command is throttled under.
    pub fn class(self) -> CommandClass {
        match self {
            Command::Profile
            | Command::JavaServer
            | Command::BedrockServer
            | Command::ServiceStatus
            | Command::Wynncraft
            | Command::BugReport
            | Command::Wiki => CommandClass::Networked,
            _ => CommandClass::Local,
        }
    }
}

/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Invocation {
    /// The resolved command.
    #[getter(copy)]
    command: Command,
    /// Positional arguments after the command name.
    args: Vec<String>,
}

impl Invocation {
    /// All arguments joined back into one text payload.
    pub fn text(&self) -> String {
        self.args.join(" ")
    }
}

/// Parse a message into an invocation.
///
/// Returns `None` for messages without the prefix and for unknown command
/// names.
pub fn parse(prefix: &str, content: &str) -> Option<Invocation> {
    let rest = content.strip_prefix(prefix)?;
    let mut words = rest.split_whitespace();
    let command = Command::parse(words.next()?)?;
    let args = words.map(str::to_string).collect();
    Some(Invocation { command, args })
}
