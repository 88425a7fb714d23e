//! Process-wide notification bus
//!
//! Installed once at start-up with a single subscriber. Publishers only see
//! [`notify`]; the returned [`Notice`] is also what a handler renders as a
//! toast in its own response.

use serde::Serialize;
use std::sync::OnceLock;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

static BUS: OnceLock<UnboundedSender<Notice>> = OnceLock::new();

/// Installs the bus and hands back its only receiver
///
/// Returns `None` when the bus is already installed.
pub fn init() -> Option<UnboundedReceiver<Notice>> {
    let (tx, rx) = unbounded_channel();
    BUS.set(tx).ok()?;
    Some(rx)
}

/// Publishes a notice; a no-op for the bus when it was never installed
pub fn notify(kind: NoticeKind, text: impl Into<String>) -> Notice {
    let notice = Notice {
        kind,
        text: text.into(),
    };
    if let Some(tx) = BUS.get() {
        let _ = tx.send(notice.clone());
    }
    notice
}

/// The subscriber: writes every notice to the log for the process lifetime
pub fn spawn_logger(mut rx: UnboundedReceiver<Notice>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(notice) = rx.recv().await {
            match notice.kind {
                NoticeKind::Success => log::info!("notice: {}", notice.text),
                NoticeKind::Error => log::warn!("notice: {}", notice.text),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // The bus is global, so everything that touches `init` lives in one test.
    #[tokio::test]
    async fn test_bus_delivers_to_single_subscriber() {
        let mut rx = init().expect("first init installs the bus");
        assert!(init().is_none());

        let notice = notify(NoticeKind::Success, "bus self-test notice");
        assert_eq!(notice.kind, NoticeKind::Success);

        // Other tests may publish concurrently once the bus exists.
        loop {
            let received = rx.recv().await.unwrap();
            if received == notice {
                break;
            }
        }
    }
}
