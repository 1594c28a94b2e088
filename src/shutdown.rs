use tracing::info;

/// Why the receiver was asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Interrupt,
    Terminate,
}

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn wait_for_termination() -> std::io::Result<Termination> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        let received = tokio::select! {
            res = tokio::signal::ctrl_c() => res.map(|_| Termination::Interrupt)?,
            _ = terminate.recv() => Termination::Terminate,
        };
        info!(signal = ?received, "Termination signal received");
        Ok(received)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        info!(signal = ?Termination::Interrupt, "Termination signal received");
        Ok(Termination::Interrupt)
    }
}
