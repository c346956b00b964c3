use std::{collections::BTreeMap, sync::Arc};

use chrono::Local;
use shared::error::CommandError;

use crate::{actions::ExternalActions, content};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to append to the transcript; empty text displays nothing.
    Text(String),
    /// Remove every interactively produced transcript entry.
    ClearTranscript,
}

pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError>;
}

struct Canned {
    name: &'static str,
    text: &'static str,
}

impl Command for Canned {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(self.text.to_string()))
    }
}

struct Echo;

impl Command for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

struct Date;

impl Command for Date {
    fn name(&self) -> &'static str {
        "date"
    }

    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(
            Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        ))
    }
}

struct Clear;

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::ClearTranscript)
    }
}

#[derive(Debug, Clone, Copy)]
enum LinkTarget {
    Web(&'static str),
    Mail(&'static str),
}

struct OpenLink {
    name: &'static str,
    target: LinkTarget,
    confirmation: &'static str,
    actions: Arc<dyn ExternalActions>,
}

impl Command for OpenLink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        match self.target {
            LinkTarget::Web(url) => self.actions.open_url(url)?,
            LinkTarget::Mail(address) => self.actions.compose_email(address)?,
        }
        Ok(CommandOutput::Text(self.confirmation.to_string()))
    }
}

/// Name to handler table, fixed once built.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn from_commands(commands: impl IntoIterator<Item = Box<dyn Command>>) -> Self {
        Self {
            commands: commands
                .into_iter()
                .map(|command| (command.name(), command))
                .collect(),
        }
    }

    pub fn builtin(actions: Arc<dyn ExternalActions>) -> Self {
        let canned = [
            ("help", content::HELP),
            ("about", content::ABOUT),
            ("skills", content::SKILLS),
            ("papers", content::PAPERS),
            ("projects", content::PROJECTS),
            ("contact", content::CONTACT),
            ("privacy", content::PRIVACY),
            ("whoami", content::WHOAMI),
            ("pwd", content::PWD),
            ("ls", content::LS),
        ]
        .into_iter()
        .map(|(name, text)| Box::new(Canned { name, text }) as Box<dyn Command>);

        let links = [
            (
                "github",
                LinkTarget::Web(content::GITHUB_URL),
                "Opening GitHub profile...",
            ),
            (
                "linkedin",
                LinkTarget::Web(content::LINKEDIN_URL),
                "Opening LinkedIn profile...",
            ),
            (
                "email",
                LinkTarget::Mail(content::EMAIL_ADDRESS),
                "Opening email client...",
            ),
            (
                "arxiv",
                LinkTarget::Web(content::ARXIV_URL),
                "Opening arXiv author profile...",
            ),
        ]
        .into_iter()
        .map(|(name, target, confirmation)| {
            Box::new(OpenLink {
                name,
                target,
                confirmation,
                actions: Arc::clone(&actions),
            }) as Box<dyn Command>
        });

        let others: [Box<dyn Command>; 3] = [Box::new(Echo), Box::new(Date), Box::new(Clear)];

        Self::from_commands(canned.chain(links).chain(others))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
