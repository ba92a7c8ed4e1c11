use std::sync::Arc;

use clap::Parser;
use hookfeed_config::Config;
use hookfeed_core::CoreModule;
use hookfeed_database_interface::DbService;
use hookfeed_database_memory::MemoryDb;
use hookfeed_models::Event;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

/// Command context on the memory store, capturing what commands print.
pub(crate) struct CommandContextTest {
    pub config: Config,
    pub db_service: MemoryDb,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::for_tests(),
            db_service: MemoryDb::new(),
        }
    }

    pub async fn with_events(self, events: impl IntoIterator<Item = Event>) -> Self {
        for event in events {
            self.db_service.events_create(event).await.unwrap();
        }

        self
    }

    /// Run `hookfeed <args>` and return its output.
    pub async fn run(self, args: &[&str]) -> String {
        let command_line = std::iter::once("hookfeed").chain(args.iter().copied());
        let args = match Args::try_parse_from(command_line) {
            Ok(args) => args,
            Err(e) => panic!("Could not parse {args:?}: {e}"),
        };

        let output = Arc::new(RwLock::new(Vec::<u8>::new()));
        let ctx = CommandContext {
            config: self.config,
            core_module: CoreModule::builder().build(),
            db_service: Box::new(self.db_service),
            writer: output.clone(),
        };
        CommandExecutor::parse_args_async(args, ctx).await.unwrap();

        let output = output.read().await;
        String::from_utf8_lossy(&output).into_owned()
    }
}
