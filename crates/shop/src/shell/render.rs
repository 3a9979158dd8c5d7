//! Shell rendering.

use std::io::{self, Write};

use rust_decimal::Decimal;

use tienda_app::domain::{cart::Cart, catalog::CatalogView, checkout::CheckoutState};

/// Format a decimal amount as a dollar string.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Print the loaded catalog as a numbered list.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn catalog(view: &CatalogView) {
    match view.category() {
        Some(category) => println!("Products in {category}:"),
        None => println!("Products:"),
    }

    if view.products().is_empty() {
        println!("  (nothing here right now)");
        return;
    }

    for (index, product) in view.products().iter().enumerate() {
        println!(
            "{:>3}. {}  {}  [{}]",
            index + 1,
            product.title,
            format_usd(product.price),
            product.category
        );

        if !product.description.is_empty() {
            println!("     {}", product.description);
        }
    }
}

/// Print the filter options derived from the loaded catalog.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn categories(view: &CatalogView) {
    let categories = view.categories();

    if categories.is_empty() {
        println!("No categories loaded; try 'browse' first.");
        return;
    }

    println!("Categories: {}", categories.join(", "));
}

/// Print the cart lines and derived totals.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        println!(
            "{:>3} x {}  {}",
            line.quantity,
            line.title,
            format_usd(line.price)
        );
    }

    let totals = cart.totals();

    println!("Subtotal  {}", format_usd(totals.subtotal));
    println!("Delivery  {}", format_usd(totals.delivery_fee));
    println!("Total     {}", format_usd(totals.total));
}

/// Print the user-facing notice for a checkout state.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn checkout_state(state: &CheckoutState) {
    match state {
        CheckoutState::Idle => {}
        CheckoutState::Submitting => println!("Submitting your order..."),
        CheckoutState::Success { order_id } => {
            println!("Order placed! Your order id is {order_id}.");
        }
        CheckoutState::Failure => {
            println!("Something went wrong placing your order. Please try again.");
        }
    }
}

/// Print a one-line message.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn message(text: &str) {
    println!("{text}");
}

/// Print the command summary.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn help() {
    println!("Commands:");
    println!("  browse [category]   list products, optionally filtered");
    println!("  categories          list the filter options");
    println!("  add <n | title>     add a product to the cart");
    println!("  qty <title> <n>     change a line's quantity");
    println!("  cart                show the cart and totals");
    println!("  checkout            place the order");
    println!("  quit                leave the storefront");
}

/// Print the input prompt without a trailing newline.
#[expect(clippy::print_stdout, reason = "the shell renders to stdout")]
pub fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_usd_pads_to_two_decimal_places() {
        assert_eq!(format_usd(Decimal::new(850, 2)), "$8.50");
        assert_eq!(format_usd(Decimal::new(19, 0)), "$19.00");
    }

    #[test]
    fn format_usd_handles_zero() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn format_usd_keeps_cents_exact() {
        assert_eq!(format_usd(Decimal::new(1349, 2)), "$13.49");
        assert_eq!(format_usd(Decimal::new(499, 2)), "$4.99");
    }
}
