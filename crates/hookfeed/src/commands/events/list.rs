use async_trait::async_trait;
use clap::Parser;
use hookfeed_core::use_cases::events::ListRecentEventsInterface;
use shaku::HasComponent;
use time::format_description::well_known::Rfc3339;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List the most recent events
#[derive(Parser)]
pub(crate) struct EventListCommand {
    /// Maximum number of events, capped by the feed limit
    #[clap(long)]
    limit: Option<u64>,
}

#[async_trait]
impl Command for EventListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let events = {
            let core_ctx = ctx.as_core_context();
            let list_recent_events: &dyn ListRecentEventsInterface =
                ctx.core_module.resolve_ref();
            list_recent_events.run(&core_ctx, self.limit).await?
        };

        if events.is_empty() {
            writeln!(ctx.writer.write().await, "No event stored.")?;
        } else {
            for event in events {
                writeln!(
                    ctx.writer.write().await,
                    "- [{}] {}",
                    event.timestamp.format(&Rfc3339)?,
                    event.message()
                )?;
            }
        }

        Ok(())
    }
}
