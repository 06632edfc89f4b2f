use anyhow::bail;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use gigmarket_client::{AppState, ChatKey, ChatPhase, ClientEvent, EventSink};
use gigmarket_shared::types::{JobId, Role, UserId};

use super::RoleArg;
use crate::render;

#[derive(Args)]
pub struct ChatArgs {
    #[arg(long)]
    job: String,
    /// Defaults to the signed-in user when chatting as the client;
    /// required when chatting as the freelancer
    #[arg(long)]
    client: Option<String>,
    /// Defaults to the signed-in user when chatting as the freelancer
    #[arg(long)]
    freelancer: Option<String>,
    #[arg(long = "as", value_enum, default_value = "client")]
    role: RoleArg,
    /// Print chat events as JSON lines instead of a transcript
    #[arg(long)]
    json: bool,
}

pub async fn run(state: &mut AppState, args: ChatArgs) -> anyhow::Result<()> {
    let role = Role::from(args.role);
    let mut key = ChatKey {
        job_id: Some(JobId::from(args.job)),
        client_id: args.client.map(UserId::from),
        freelancer_id: args.freelancer.map(UserId::from),
    };
    if role == Role::Freelancer && key.freelancer_id.is_none() {
        key.freelancer_id = Some(state.user_id().await?);
    }
    converse(state, key, role, args.json).await
}

/// Open the chat and relay between stdin and the poller until EOF,
/// `/quit` or Ctrl-C.
pub async fn converse(
    state: &mut AppState,
    key: ChatKey,
    role: Role,
    json: bool,
) -> anyhow::Result<()> {
    let (sink, mut events) = EventSink::channel();
    let mut session = state.chat(key, role).with_events(sink);

    match session.open(state.email()).await {
        ChatPhase::Ready(chat_id) => {
            if !json {
                eprintln!("Chat #{chat_id} open. Type a message, /quit to leave.");
            }
        }
        ChatPhase::Deferred if role == Role::Freelancer => {
            bail!("chat needs a job, a client and a freelancer (pass --client as the freelancer)")
        }
        ChatPhase::Deferred => bail!("chat needs a job, a client and a freelancer"),
        ChatPhase::Failed(message) => bail!("{message}"),
        other => bail!("chat could not be opened ({other:?})"),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut printed = 0;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == "/quit" {
                    break;
                }
                session.set_draft(line);
                if let Err(e) = session.send().await {
                    if !e.is_validation() {
                        eprintln!("{}", e.user_message("Failed to send message"));
                    }
                }
            }
            Some(event) = events.recv() => {
                if json {
                    println!("{}", serde_json::to_string(&event)?);
                    continue;
                }
                match event {
                    ClientEvent::MessagesUpdated(_) => {
                        let messages = session.messages().await;
                        // The list only grows; a shorter one means a reload.
                        if messages.len() < printed {
                            printed = 0;
                        }
                        for message in &messages[printed..] {
                            println!("{}", render::message_line(message));
                        }
                        printed = messages.len();
                    }
                    ClientEvent::PollFailed(failed) => {
                        tracing::debug!(seq = failed.seq, error = %failed.error, "Poll failed");
                    }
                    ClientEvent::MessageSent(_) | ClientEvent::PollerStopped { .. } => {}
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.close().await;
    while let Ok(event) = events.try_recv() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        }
    }
    Ok(())
}
