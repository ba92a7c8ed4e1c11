use async_trait::async_trait;
use clap::Parser;
use hookfeed_core::use_cases::events::PurgeEventsInterface;
use shaku::HasComponent;
use time::Duration;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Delete events older than a number of days
#[derive(Parser)]
pub(crate) struct EventPurgeCommand {
    /// Age threshold, in days
    #[clap(long)]
    older_than_days: u32,
}

#[async_trait]
impl Command for EventPurgeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let count = {
            let core_ctx = ctx.as_core_context();
            let purge_events: &dyn PurgeEventsInterface = ctx.core_module.resolve_ref();
            purge_events
                .run(&core_ctx, Duration::days(self.older_than_days.into()))
                .await?
        };

        writeln!(ctx.writer.write().await, "{count} event(s) deleted.")?;

        Ok(())
    }
}
