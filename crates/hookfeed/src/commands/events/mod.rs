//! Event commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod list;
mod purge;

use self::{list::EventListCommand, purge::EventPurgeCommand};

/// Manage stored events
#[derive(Parser)]
pub(crate) struct EventsCommand {
    #[clap(subcommand)]
    inner: EventsSubCommand,
}

#[async_trait]
impl Command for EventsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum EventsSubCommand {
    List(EventListCommand),
    Purge(EventPurgeCommand),
}

#[async_trait]
impl Command for EventsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.execute(ctx).await,
            Self::Purge(sub) => sub.execute(ctx).await,
        }
    }
}
