//! Shell command parsing.

use thiserror::Error;

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch and list the catalog, optionally filtered by category.
    Browse {
        /// Category filter; `None` lists everything.
        category: Option<String>,
    },

    /// List the categories offered by the loaded catalog.
    Categories,

    /// Add a product to the cart by list number or title.
    Add {
        /// Number shown in the catalog listing, or a product title.
        selection: String,
    },

    /// Replace the quantity of a cart line.
    Quantity {
        /// Title of the line to change.
        title: String,

        /// New quantity, already clamped to at least one.
        quantity: u32,
    },

    /// Show the cart lines and totals.
    Cart,

    /// Submit the cart as an order.
    Checkout,

    /// Show the command summary.
    Help,

    /// Leave the storefront.
    Quit,
}

/// Reasons a line cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The verb is not one of the known commands.
    #[error("unknown command '{0}'; try 'help'")]
    UnknownCommand(String),

    /// The command needs an argument that was not given.
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),

    /// The quantity argument is not a whole number.
    #[error("'{0}' is not a valid quantity")]
    InvalidQuantity(String),
}

/// Parse one input line into a command.
///
/// Quantities are clamped to at least one, mirroring the cart controls
/// which never decrement below a single unit.
///
/// # Errors
///
/// Returns a [`ParseError`] describing what the line is missing.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let Some((&verb, rest)) = words.split_first() else {
        return Err(ParseError::UnknownCommand(String::new()));
    };

    match verb {
        "browse" | "products" => Ok(Command::Browse {
            category: (!rest.is_empty()).then(|| rest.join(" ")),
        }),
        "categories" => Ok(Command::Categories),
        "add" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument(
                    "add",
                    "a product number or title",
                ));
            }

            Ok(Command::Add {
                selection: rest.join(" "),
            })
        }
        "qty" => {
            let Some((&quantity_word, title_words)) = rest.split_last() else {
                return Err(ParseError::MissingArgument(
                    "qty",
                    "a product title and a quantity",
                ));
            };

            if title_words.is_empty() {
                return Err(ParseError::MissingArgument(
                    "qty",
                    "a product title and a quantity",
                ));
            }

            let quantity = match quantity_word.parse::<u32>() {
                Ok(value) => value.max(1),
                Err(_) => {
                    return Err(ParseError::InvalidQuantity(quantity_word.to_string()));
                }
            };

            Ok(Command::Quantity {
                title: title_words.join(" "),
                quantity,
            })
        }
        "cart" => Ok(Command::Cart),
        "checkout" => Ok(Command::Checkout),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
