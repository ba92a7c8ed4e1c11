//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use hookfeed_config::Config;
use hookfeed_core::{CoreContext, CoreModule};
use hookfeed_database_interface::DbService;
use tokio::sync::RwLock;

use self::{events::EventsCommand, server::ServerCommand};
use crate::Result;

mod events;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub db_service: Box<dyn DbService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            db_service: self.db_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Events(EventsCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Events(sub) => sub.execute(ctx).await,
        }
    }
}
