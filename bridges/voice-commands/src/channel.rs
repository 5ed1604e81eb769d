use derive_new::new;
use domain::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

/// One-way method channel into the application layer.
///
/// Calls are fire-and-forget: `Ok` means the call was handed over, not that
/// the receiver handled it.
pub trait MethodChannel {
    fn name(&self) -> &str;

    fn invoke_method(&self, method: &str, arguments: Value) -> Result<(), Error>;
}

impl<C: MethodChannel + ?Sized> MethodChannel for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke_method(&self, method: &str, arguments: Value) -> Result<(), Error> {
        (**self).invoke_method(method, arguments)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, new)]
pub struct MethodCall {
    pub channel: String,
    pub method: String,
    pub arguments: Value,
}

/// Channel backed by an unbounded tokio queue; the application side owns the
/// receiver.
#[derive(Clone, Debug)]
pub struct UnboundedChannel {
    name: String,
    sender: mpsc::UnboundedSender<MethodCall>,
}

impl UnboundedChannel {
    pub fn new(name: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<MethodCall>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let channel = Self {
            name: name.into(),
            sender,
        };
        (channel, receiver)
    }
}

impl MethodChannel for UnboundedChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke_method(&self, method: &str, arguments: Value) -> Result<(), Error> {
        self.sender
            .send(MethodCall::new(self.name.clone(), method.to_string(), arguments))
            .map_err(|_| Error::ChannelClosed {
                channel: self.name.clone(),
            })
    }
}
