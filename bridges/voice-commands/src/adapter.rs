use std::mem;

use domain::expenses::{Command, Extras};
use ulid::Ulid;
use url::Url;

use crate::{
    channel::MethodChannel,
    config::BridgeConfig,
    intent::{Intent, ACTION_VIEW},
};

#[derive(Clone, Debug, PartialEq)]
struct PendingCommand {
    command_id: String,
    command: Command,
}

enum ChannelState<C> {
    /// Engine not attached yet; holds at most one command.
    Unready { pending: Option<PendingCommand> },
    Ready { channel: C },
}

/// Builds expense commands from platform events and hands them to the
/// application over a [`MethodChannel`].
///
/// Until [`attach_channel`](Self::attach_channel) is called a single command
/// is buffered. A newer command replaces an older unflushed one.
pub struct CommandAdapter<C> {
    config: BridgeConfig,
    state: ChannelState<C>,
}

impl<C: MethodChannel> Default for CommandAdapter<C> {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl<C: MethodChannel> CommandAdapter<C> {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            state: ChannelState::Unready { pending: None },
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ChannelState::Ready { .. })
    }

    pub fn pending(&self) -> Option<&Command> {
        match &self.state {
            ChannelState::Unready { pending } => pending.as_ref().map(|pending| &pending.command),
            ChannelState::Ready { .. } => None,
        }
    }

    /// Engine attachment. Flushes the pending command, if any. Attaching again
    /// swaps the channel handle.
    pub fn attach_channel(&mut self, channel: C) {
        tracing::info!(channel = channel.name(), "Method channel attached");

        let previous = mem::replace(&mut self.state, ChannelState::Ready { channel });
        match previous {
            ChannelState::Unready {
                pending: Some(pending),
            } => {
                tracing::info!(command_id = %pending.command_id, "Flushing pending voice command");
                self.deliver(pending);
            }
            ChannelState::Unready { pending: None } => {}
            ChannelState::Ready { channel } => {
                tracing::debug!(previous = channel.name(), "Replaced method channel");
            }
        }
    }

    /// Routes a launch or new intent. Unrecognized intents are ignored.
    pub fn handle_intent(&mut self, intent: &Intent) {
        match intent.action.as_deref() {
            Some(action) if action == self.config.create_expense_action => {
                self.handle_action_event(&intent.extras);
            }
            Some(ACTION_VIEW) => match intent.data_uri() {
                Ok(Some(uri)) if uri.scheme() == self.config.deep_link_scheme => {
                    self.handle_deep_link(&uri);
                }
                Ok(Some(uri)) => {
                    tracing::debug!(scheme = uri.scheme(), "Ignoring view intent");
                }
                Ok(None) => tracing::debug!("Ignoring view intent without data"),
                Err(e) => tracing::warn!("Ignoring view intent: {}", e),
            },
            action => tracing::debug!(?action, "Ignoring intent"),
        }
    }

    pub fn handle_action_event(&mut self, extras: &Extras) {
        self.dispatch(Command::from_extras(extras));
    }

    /// Only links whose host is the configured expense host produce a command.
    pub fn handle_deep_link(&mut self, uri: &Url) {
        if uri.host_str() != Some(self.config.deep_link_host.as_str()) {
            tracing::debug!(host = ?uri.host_str(), "Ignoring deep link");
            return;
        }

        self.dispatch(Command::from_deep_link(uri));
    }

    fn dispatch(&mut self, command: Command) {
        let pending = PendingCommand {
            command_id: Ulid::new().to_string(),
            command,
        };

        tracing::info!(
            command_id = %pending.command_id,
            source = %pending.command.source(),
            "Voice command received"
        );

        if let ChannelState::Unready { pending: slot } = &mut self.state {
            if let Some(dropped) = slot.replace(pending) {
                tracing::warn!(
                    command_id = %dropped.command_id,
                    "Pending voice command replaced before delivery"
                );
            }
            return;
        }

        self.deliver(pending);
    }

    fn deliver(&self, pending: PendingCommand) {
        let ChannelState::Ready { channel } = &self.state else {
            return;
        };

        let result = pending
            .command
            .to_arguments()
            .and_then(|arguments| channel.invoke_method(&self.config.method_name, arguments));

        match result {
            Ok(()) => tracing::info!(
                command_id = %pending.command_id,
                method = %self.config.method_name,
                "Voice command delivered"
            ),
            Err(e) => tracing::error!(
                command_id = %pending.command_id,
                "Failed to deliver voice command: {}",
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::UnboundedChannel;
    use domain::expenses::{Extra, Source};

    fn gasolina() -> Extras {
        Extras::from([
            ("amount".to_string(), Extra::from("180")),
            ("title".to_string(), Extra::from("gasolina")),
        ])
    }

    #[test]
    fn starts_unready_without_pending() {
        let adapter: CommandAdapter<UnboundedChannel> = CommandAdapter::default();

        assert!(!adapter.is_ready());
        assert!(adapter.pending().is_none());
    }

    #[test]
    fn buffers_until_attached() {
        let mut adapter: CommandAdapter<UnboundedChannel> = CommandAdapter::default();
        adapter.handle_action_event(&gasolina());

        assert_eq!(adapter.pending().and_then(Command::amount), Some(180.0));

        let (channel, mut receiver) = UnboundedChannel::new("evenly/test");
        adapter.attach_channel(channel);

        assert!(adapter.is_ready());
        assert!(adapter.pending().is_none());
        let call = receiver.try_recv().unwrap();
        assert_eq!(call.method, "onVoiceCommand");
        assert_eq!(call.arguments["title"], "gasolina");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn newer_command_replaces_pending() {
        let mut adapter: CommandAdapter<UnboundedChannel> = CommandAdapter::default();
        adapter.handle_action_event(&gasolina());
        adapter.handle_deep_link(&Url::parse("evenly://expense?title=lunch").unwrap());

        let pending = adapter.pending().unwrap();
        assert_eq!(pending.source(), Source::DeepLink);
        assert_eq!(pending.title(), Some("lunch"));
    }

    #[test]
    fn foreign_host_is_ignored() {
        let mut adapter: CommandAdapter<UnboundedChannel> = CommandAdapter::default();
        adapter.handle_deep_link(&Url::parse("evenly://settings?amount=1").unwrap());

        assert!(adapter.pending().is_none());
    }

    #[test]
    fn closed_channel_drops_command() {
        let (channel, receiver) = UnboundedChannel::new("evenly/test");
        drop(receiver);

        let mut adapter: CommandAdapter<UnboundedChannel> = CommandAdapter::default();
        adapter.attach_channel(channel);
        adapter.handle_action_event(&gasolina());

        assert!(adapter.is_ready());
        assert!(adapter.pending().is_none());
    }
}
