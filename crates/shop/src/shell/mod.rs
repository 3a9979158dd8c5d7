//! Interactive storefront shell.
//!
//! One mpsc consumer owns the session; stdin reading and checkout notice
//! timers are detached producer tasks, so every mutation happens on the
//! loop below in response to a discrete event.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error};

use tienda_app::{
    domain::checkout::{CheckoutState, NOTICE_TTL},
    session::StoreSession,
};

use crate::shell::commands::{Command, parse};

mod commands;
mod render;

/// Events consumed by the shell loop.
#[derive(Debug)]
enum ShellEvent {
    /// One line of user input.
    Input(String),

    /// Standard input closed.
    InputClosed,

    /// A checkout notice timer fired.
    NoticeExpired,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Continue,
    Quit,
}

/// Run the storefront shell until the user quits or input closes.
pub async fn run(mut session: StoreSession) {
    let (events, mut inbox) = mpsc::channel(16);

    spawn_input_reader(events.clone());

    // The storefront opens on the unfiltered catalog.
    session.refresh_catalog(None).await;
    render::catalog(&session.catalog);
    render::help();
    render::prompt();

    while let Some(event) = inbox.recv().await {
        match event {
            ShellEvent::Input(line) => {
                if handle_line(&mut session, &events, &line).await == Outcome::Quit {
                    break;
                }

                render::prompt();
            }
            ShellEvent::InputClosed => break,
            ShellEvent::NoticeExpired => {
                if session.expire_notice() {
                    debug!("checkout notice expired");
                }
            }
        }
    }
}

async fn handle_line(
    session: &mut StoreSession,
    events: &mpsc::Sender<ShellEvent>,
    line: &str,
) -> Outcome {
    let line = line.trim();

    if line.is_empty() {
        return Outcome::Continue;
    }

    let command = match parse(line) {
        Ok(command) => command,
        Err(error) => {
            render::message(&error.to_string());
            return Outcome::Continue;
        }
    };

    match command {
        Command::Browse { category } => {
            session.refresh_catalog(category).await;
            render::catalog(&session.catalog);
        }
        Command::Categories => render::categories(&session.catalog),
        Command::Add { selection } => add_to_cart(session, &selection),
        Command::Quantity { title, quantity } => {
            if session.cart.line(&title).is_none() {
                render::message(&format!("'{title}' is not in your cart."));
            } else {
                session.set_quantity(&title, quantity);
                render::cart(&session.cart);
            }
        }
        Command::Cart => render::cart(&session.cart),
        Command::Checkout => checkout(session, events).await,
        Command::Help => render::help(),
        Command::Quit => return Outcome::Quit,
    }

    Outcome::Continue
}

fn add_to_cart(session: &mut StoreSession, selection: &str) {
    // A numeric selection refers to the numbered catalog listing; anything
    // else is taken as a title.
    let title = match selection.parse::<usize>() {
        Ok(number) => {
            let Some(product) = number
                .checked_sub(1)
                .and_then(|index| session.catalog.products().get(index))
            else {
                render::message(&format!("No product number {number} in the list."));
                return;
            };

            product.title.clone()
        }
        Err(_) => selection.to_string(),
    };

    match session.add_to_cart(&title) {
        Some(line) => {
            render::message(&format!("Added {} (x{} in cart).", line.title, line.quantity));
        }
        None => render::message(&format!("'{title}' is not in the catalog.")),
    }
}

async fn checkout(session: &mut StoreSession, events: &mpsc::Sender<ShellEvent>) {
    // The action is disabled while the cart is empty; nothing is sent.
    if session.cart.is_empty() {
        render::message("Your cart is empty; add something first.");
        return;
    }

    match session.submit_order().await {
        Ok(state) => {
            render::checkout_state(state);

            if matches!(
                state,
                CheckoutState::Success { .. } | CheckoutState::Failure
            ) {
                schedule_notice_expiry(events.clone());
            }
        }
        Err(error) => render::message(&error.to_string()),
    }
}

/// Fire-and-forget notice timer; never cancelled, so the last one to fire
/// wins.
fn schedule_notice_expiry(events: mpsc::Sender<ShellEvent>) {
    tokio::spawn(async move {
        tokio::time::sleep(NOTICE_TTL).await;

        if events.send(ShellEvent::NoticeExpired).await.is_err() {
            debug!("shell closed before the notice expired");
        }
    });
}

fn spawn_input_reader(events: mpsc::Sender<ShellEvent>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if events.send(ShellEvent::Input(line)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    if events.send(ShellEvent::InputClosed).await.is_err() {
                        debug!("shell already closed");
                    }

                    break;
                }
                Err(io_error) => {
                    error!("failed to read input: {io_error}");

                    if events.send(ShellEvent::InputClosed).await.is_err() {
                        debug!("shell already closed");
                    }

                    break;
                }
            }
        }
    });
}
