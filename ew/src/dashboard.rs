//! Wallet dashboard TUI using ratatui + crossterm.
//!
//! Shows wallet cards with live balance state, the portfolio total, the ten
//! most recent transactions across wallets, and the notification stack.

use std::collections::HashMap;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use chrono::Utc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use warden::{
    recent_activity, ActivityOptions, BalanceEntry, BalanceTracker, Notification, Severity,
    TransactionRecord, Wallet, WardenClient,
};

use crate::client::{create_app, require_session};
use crate::error::EwError;
use crate::format::{relative_age, short_address, status_kind, StatusKind};

/// Stagger between automatic balance refreshes, per wallet index, to avoid
/// bursting the backend's rate limiter.
const BALANCE_STAGGER: Duration = Duration::from_millis(500);

/// Fixed delay before the recent-transaction aggregation starts, letting the
/// balance refreshes go first.
const ACTIVITY_DELAY: Duration = Duration::from_secs(2);

/// Target render interval.
const RENDER_INTERVAL: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Run the wallet dashboard TUI until `q`/Esc or cancellation.
pub async fn run(cancel: CancellationToken) -> Result<(), EwError> {
    let app = create_app()?;
    require_session(&app.session)?;

    let me = app.client.me().await?;
    info!(wallets = me.wallets.len(), "dashboard starting");

    let tracker = BalanceTracker::new();

    // Initial balance pass, one staggered refresh per wallet.
    spawn_balance_pass(&app.client, &tracker, &me.wallets, BALANCE_STAGGER);

    // Recent activity, delayed behind the balance pass. The task owns its
    // client clone; if the dashboard exits first the result is simply unused.
    let (activity_tx, mut activity_rx) = mpsc::channel::<Vec<TransactionRecord>>(1);
    {
        let client = app.client.clone();
        let wallets = me.wallets.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ACTIVITY_DELAY).await;
            let merged = recent_activity(&client, &wallets, &ActivityOptions::default()).await;
            let _ = activity_tx.send(merged).await;
        });
    }

    // Set up terminal.
    enable_raw_mode().map_err(|e| EwError::Terminal(e.to_string()))?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| EwError::Terminal(e.to_string()))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| EwError::Terminal(e.to_string()))?;

    let mut transactions: Vec<TransactionRecord> = Vec::new();
    let mut activity_loading = true;
    let mut render_interval = tokio::time::interval(RENDER_INTERVAL);

    // Main event loop.
    let mut quit = false;
    let result: Result<(), EwError> = loop {
        if quit {
            break Ok(());
        }

        tokio::select! {
            // Aggregated transactions arriving (possibly partial).
            Some(merged) = activity_rx.recv() => {
                transactions = merged;
                activity_loading = false;
            }

            // Render tick — also polls keyboard input.
            _ = render_interval.tick() => {
                while event::poll(Duration::ZERO).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press {
                            match key.code {
                                KeyCode::Char('q') | KeyCode::Esc => quit = true,
                                // Manual refresh; in-flight addresses are skipped.
                                KeyCode::Char('r') => {
                                    spawn_balance_pass(
                                        &app.client,
                                        &tracker,
                                        &me.wallets,
                                        Duration::ZERO,
                                    );
                                }
                                _ => {}
                            }
                        }
                    }
                }

                if !quit {
                    let balances = tracker.snapshot();
                    let total = tracker.total();
                    let notifications = app.notifier.active();
                    let _ = terminal.draw(|frame| {
                        render_ui(
                            frame,
                            &me.email,
                            &me.wallets,
                            &balances,
                            total,
                            &transactions,
                            activity_loading,
                            &notifications,
                        );
                    });
                }
            }

            _ = cancel.cancelled() => {
                break Ok(());
            }
        }
    };

    restore_terminal(&mut terminal);
    result
}

/// Spawn one balance refresh per wallet, `stagger * index` apart.
///
/// Requests already in flight for an address are skipped by the tracker, so
/// overlapping passes (automatic + manual) never duplicate work.
fn spawn_balance_pass(
    client: &WardenClient,
    tracker: &BalanceTracker,
    wallets: &[Wallet],
    stagger: Duration,
) {
    for (i, wallet) in wallets.iter().enumerate() {
        let client = client.clone();
        let tracker = tracker.clone();
        let address = wallet.address.clone();
        let network = wallet.network;
        let delay = stagger * i as u32;
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            tracker.refresh(&client, &address, network).await;
        });
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

/// Restore terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    let _ = terminal.show_cursor();
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

// ---------------------------------------------------------------------------
// UI rendering
// ---------------------------------------------------------------------------

/// Render the full dashboard frame.
#[allow(clippy::too_many_arguments)]
fn render_ui(
    frame: &mut Frame,
    email: &str,
    wallets: &[Wallet],
    balances: &HashMap<String, BalanceEntry>,
    total: Decimal,
    transactions: &[TransactionRecord],
    activity_loading: bool,
    notifications: &[Notification],
) {
    let area = frame.area();

    // Notifications get one row each when present.
    let notif_height = if notifications.is_empty() {
        0
    } else {
        notifications.len() as u16 + 2
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(8),                // panels
            Constraint::Length(notif_height),  // notifications
        ])
        .split(area);

    // Header.
    let header_text = format!(
        " EW WALLET — {email} | total {} ETH | 'r' refresh, 'q' quit",
        total.round_dp(8),
    );
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::White).bg(Color::Blue).bold())
        .alignment(Alignment::Center);
    frame.render_widget(header, main_layout[0]);

    // Panels: wallets (50%) | recent transactions (50%).
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    render_wallets(frame, panels[0], wallets, balances);
    render_transactions(frame, panels[1], transactions, activity_loading, wallets);
    render_notifications(frame, main_layout[2], notifications);
}

/// Render the wallet cards with their balance state.
fn render_wallets(
    frame: &mut Frame,
    area: Rect,
    wallets: &[Wallet],
    balances: &HashMap<String, BalanceEntry>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(wallets.len() * 3 + 1);

    if wallets.is_empty() {
        lines.push(Line::from(" No wallets yet. Create one with `ew create-wallet`."));
    }

    for wallet in wallets {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", short_address(&wallet.address))),
            Span::styled(
                format!("[{}]", wallet.network),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let entry = balances.get(&wallet.address);
        let line = match entry {
            None => Line::styled("   not loaded", Style::default().fg(Color::DarkGray)),
            Some(e) if e.loading => {
                Line::styled("   checking...", Style::default().fg(Color::Yellow))
            }
            Some(e) => match &e.error {
                Some(message) => Line::styled(
                    format!("   {message}"),
                    Style::default().fg(Color::Red),
                ),
                None => {
                    let age = e
                        .last_refreshed
                        .map(|at| relative_age(at, Utc::now()))
                        .unwrap_or_default();
                    Line::from(vec![
                        Span::styled(
                            format!("   {} ETH ", e.balance.round_dp(8)),
                            Style::default().fg(Color::Green),
                        ),
                        Span::styled(
                            format!("({age})"),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                }
            },
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" My Wallets ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the merged recent-transaction list.
fn render_transactions(
    frame: &mut Frame,
    area: Rect,
    transactions: &[TransactionRecord],
    loading: bool,
    wallets: &[Wallet],
) {
    let now = Utc::now();
    let lines: Vec<Line> = if loading {
        vec![Line::from(" Loading transactions...")]
    } else if transactions.is_empty() {
        if wallets.is_empty() {
            vec![Line::from(" Create a wallet to get started")]
        } else {
            vec![Line::from(" No transactions found")]
        }
    } else {
        transactions
            .iter()
            .map(|tx| {
                let color = match status_kind(&tx.status) {
                    StatusKind::Success => Color::Green,
                    StatusKind::Pending => Color::Yellow,
                    StatusKind::Failed => Color::Red,
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {:<10}", relative_age(tx.created_at, now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!(
                        " {} -> {} ",
                        short_address(&tx.from),
                        short_address(&tx.to)
                    )),
                    Span::raw(format!("{} ETH ", tx.amount_in_ether.round_dp(6))),
                    Span::styled(tx.status.clone(), Style::default().fg(color)),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Latest Transactions ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the active notification stack, newest last.
fn render_notifications(frame: &mut Frame, area: Rect, notifications: &[Notification]) {
    if notifications.is_empty() {
        return;
    }

    let lines: Vec<Line> = notifications
        .iter()
        .map(|n| {
            let color = match n.severity {
                Severity::Error => Color::Red,
                Severity::Warning => Color::Yellow,
                Severity::Info => Color::Blue,
                Severity::Success => Color::Green,
            };
            Line::styled(format!(" {}", n.message), Style::default().fg(color))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Notifications ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
